use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a call to the planning API.
///
/// Every variant leaves local state untouched; callers surface it and let the
/// user retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("request to {endpoint} failed: {message}")]
    Transport {
        endpoint: &'static str,
        message: String,
    },

    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("unexpected response from {endpoint}: {detail}")]
    MalformedResponse {
        endpoint: &'static str,
        detail: String,
    },
}

impl ServiceError {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ServiceError::Transport { endpoint, .. }
            | ServiceError::Status { endpoint, .. }
            | ServiceError::MalformedResponse { endpoint, .. } => endpoint,
        }
    }
}

#[derive(Debug, Error)]
pub enum BriefError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("unsupported brief file type '.{0}' (use .toml, .pdf or a text file)")]
    UnsupportedType(String),

    #[error("cannot extract text from '{}': {source}", .path.display())]
    Pdf {
        path: PathBuf,
        source: lopdf::Error,
    },

    #[error("brief is empty")]
    Empty,

    #[error("invalid brief: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

#[derive(Debug, Error)]
pub enum TicketFileError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid ticket file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot encode tickets: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("ticket file has no tickets")]
    NoTickets,

    #[error("ticket {0} has an empty summary")]
    BlankSummary(usize),
}
