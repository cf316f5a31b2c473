//! PDF imposition - arranging pages for signature binding
//!
//! This module orchestrates the imposition process:
//! 1. Skip leading pages and collect the source pages
//! 2. Compute the signature page order
//! 3. Render each sheet into the output PDF

mod io;

pub use io::{load_pdf, output_path_for, save_pdf};

use crate::layout::compute_order;
use crate::options::ImpositionOptions;
use crate::render::{PdfSheetSink, SheetRenderer};
use crate::source::{PageSource, PdfPageSource};
use crate::types::*;
use lopdf::Document;

/// Main imposition function
///
/// Runs the whole transform on a blocking thread; either the complete
/// imposed document is returned or nothing is.
pub async fn impose(document: &Document, options: &ImpositionOptions) -> Result<Document> {
    options.validate()?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || impose_sync(&document, &options)).await?
}

/// Synchronous variant of [`impose`] for callers without a runtime
pub fn impose_sync(document: &Document, options: &ImpositionOptions) -> Result<Document> {
    options.validate()?;

    let source = PdfPageSource::new(document, options.page_offset);
    let total_pages = source.page_count();

    if total_pages == 0 {
        return Err(ImposeError::NoPages);
    }

    let order = compute_order(total_pages, options.sheets_per_signature)?;
    log::debug!(
        "Imposing {} pages into {} signatures of {} slots ({} blank)",
        total_pages,
        order.signature_count(),
        order.pages_per_signature(),
        order.blank_count()
    );

    let renderer = SheetRenderer::from_options(options)?;
    renderer.render(&order, &source, PdfSheetSink::new(document))
}
