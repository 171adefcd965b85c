use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot serialise PDF: {0}")]
    Serialize(#[source] io::Error),

    #[error("output directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("cannot write to '{}': {source}", .dir.display())]
    Write { dir: PathBuf, source: io::Error },

    #[error("cannot save '{}': {source}", .path.display())]
    Persist { path: PathBuf, source: io::Error },
}
