pub mod error;
pub mod font;
pub mod layout;
pub mod pdf;
pub mod save;

pub use error::RenderError;
pub use layout::{PageGeometry, layout};
pub use save::{OUTPUT_FILE_NAME, export_markdown, save};

use plandoc::DocumentModel;

const DOCUMENT_TITLE: &str = "Project Plan";

/// Lay out and serialise a document model into PDF bytes.
pub fn render(model: &DocumentModel) -> Result<Vec<u8>, RenderError> {
    let geometry = PageGeometry::A4;
    let pages = layout(model, geometry);
    tracing::debug!(pages = pages.len(), elements = model.elements.len(), "laid out document");
    pdf::PdfWriter::new(Vec::new())
        .write_document(&pages, geometry, DOCUMENT_TITLE)
        .map_err(RenderError::Serialize)
}
