//! Loading generation requests from files.

use std::fs;
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::api::{PlanRequest, ProjectBrief};
use crate::error::BriefError;

const TEXT_EXTENSIONS: [&str; 4] = ["txt", "md", "json", "csv"];

/// Parse a TOML brief and check its required fields.
pub fn parse_brief(source: &str) -> Result<ProjectBrief, BriefError> {
    let brief: ProjectBrief = toml::from_str(source)?;
    let missing = brief.missing_fields();
    if !missing.is_empty() {
        return Err(BriefError::MissingFields(missing));
    }
    Ok(brief)
}

/// Free-text request from document content. Blank text is rejected.
pub fn free_text(source: &str) -> Result<PlanRequest, BriefError> {
    let text = source.trim();
    if text.is_empty() {
        return Err(BriefError::Empty);
    }
    Ok(PlanRequest::FreeText {
        text: text.to_string(),
    })
}

/// Text of every page, in page order. Each page's lines are joined with a
/// space and the page ends with a blank line.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, lopdf::Error> {
    let document = Document::load_mem(bytes)?;
    let mut text = String::new();
    for page in document.get_pages().into_keys() {
        let raw = document.extract_text(&[page])?;
        let items: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        text.push_str(&items.join(" "));
        text.push_str("\n\n");
    }
    Ok(text)
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

fn read_error(path: &Path) -> impl Fn(std::io::Error) -> BriefError + '_ {
    move |source| BriefError::Read {
        path: path.to_path_buf(),
        source,
    }
}

/// Load a request from `path`, choosing the form by extension: `.toml` is a
/// structured brief, anything [`load_text`] accepts is sent as free text.
pub fn load_request(path: &Path) -> Result<PlanRequest, BriefError> {
    if extension(path) != "toml" {
        return load_text(path);
    }

    let source = fs::read_to_string(path).map_err(read_error(path))?;
    debug!(path = %path.display(), "loaded structured brief");
    parse_brief(&source).map(PlanRequest::Structured)
}

/// Load a document as free text. PDFs are read page by page; `.txt`, `.md`,
/// `.json` and `.csv` are taken as is.
pub fn load_text(path: &Path) -> Result<PlanRequest, BriefError> {
    let extension = extension(path);

    let text = if extension == "pdf" {
        let bytes = fs::read(path).map_err(read_error(path))?;
        extract_pdf_text(&bytes).map_err(|source| BriefError::Pdf {
            path: path.to_path_buf(),
            source,
        })?
    } else if TEXT_EXTENSIONS.contains(&extension.as_str()) {
        fs::read_to_string(path).map_err(read_error(path))?
    } else {
        return Err(BriefError::UnsupportedType(extension));
    };

    debug!(path = %path.display(), %extension, chars = text.len(), "loaded text brief");
    free_text(&text)
}
