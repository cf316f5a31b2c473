//! Document I/O operations for imposition

use crate::constants::OUTPUT_FILE_PREFIX;
use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    log::debug!("Loaded {} ({} pages)", path.display(), doc.get_pages().len());
    Ok(doc)
}

/// Save the imposed document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ImposeError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Default output path for an input file: `book.<file name>` in the
/// current directory
pub fn output_path_for(input: impl AsRef<Path>) -> Result<PathBuf> {
    let input = input.as_ref();
    let file_name = input.file_name().ok_or_else(|| {
        ImposeError::Config(format!("Input path has no file name: {}", input.display()))
    })?;
    Ok(PathBuf::from(format!(
        "{}{}",
        OUTPUT_FILE_PREFIX,
        file_name.to_string_lossy()
    )))
}
