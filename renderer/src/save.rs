use std::io::Write;
use std::path::{Path, PathBuf};

use plandoc::DocumentModel;
use tracing::{debug, info};

use crate::error::RenderError;
use crate::render;

/// Every export lands under this name.
pub const OUTPUT_FILE_NAME: &str = "project-plan.pdf";

/// Render `model` and deliver it as `dir/project-plan.pdf`.
///
/// The whole file is rendered in memory before anything touches the disk,
/// then written to a sibling temp file and renamed over the target. A failure
/// at any step leaves the target path as it was.
pub fn save(model: &DocumentModel, dir: &Path) -> Result<PathBuf, RenderError> {
    if !dir.is_dir() {
        return Err(RenderError::MissingDirectory(dir.to_path_buf()));
    }

    let bytes = render(model)?;
    let target = dir.join(OUTPUT_FILE_NAME);

    let write_err = |source| RenderError::Write {
        dir: dir.to_path_buf(),
        source,
    };
    let mut staged = tempfile::Builder::new()
        .prefix(".project-plan")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;
    staged.write_all(&bytes).map_err(write_err)?;
    staged.as_file().sync_all().map_err(write_err)?;
    debug!(path = %staged.path().display(), bytes = bytes.len(), "staged PDF");

    staged.persist(&target).map_err(|e| RenderError::Persist {
        path: target.clone(),
        source: e.error,
    })?;

    info!(path = %target.display(), elements = model.elements.len(), "saved plan PDF");
    Ok(target)
}

/// Parse markdown, build the document model and save it in one call.
pub fn export_markdown(source: &str, dir: &Path) -> Result<PathBuf, RenderError> {
    let model = plandoc::document_from_markdown(source);
    save(&model, dir)
}
