use crate::constants::PAGES_PER_SHEET;
use crate::options::ImpositionOptions;
use crate::source::{PageSource, PdfPageSource};
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for imposing `document` with `options`
pub fn calculate_statistics(
    document: &Document,
    options: &ImpositionOptions,
) -> Result<ImpositionStatistics> {
    options.validate()?;
    let source_pages = PdfPageSource::new(document, options.page_offset).page_count();
    statistics_for(source_pages, options.sheets_per_signature)
}

/// Statistics for `source_pages` pages bound in signatures of
/// `sheets_per_signature` sheets
pub fn statistics_for(
    source_pages: usize,
    sheets_per_signature: usize,
) -> Result<ImpositionStatistics> {
    if sheets_per_signature == 0 {
        return Err(ImposeError::Config(
            "Sheets per signature must be at least 1".to_string(),
        ));
    }

    if source_pages == 0 {
        return Err(ImposeError::NoPages);
    }

    let pages_per_signature = sheets_per_signature
        .checked_mul(PAGES_PER_SHEET)
        .ok_or_else(|| {
            ImposeError::Config(format!(
                "Sheets per signature is too large: {}",
                sheets_per_signature
            ))
        })?;

    // Pad to multiple of pages_per_signature
    let signatures = source_pages.div_ceil(pages_per_signature);
    let padded_count = signatures * pages_per_signature;
    let blank_pages_added = padded_count - source_pages;

    let paper_sheets = signatures * sheets_per_signature;

    Ok(ImpositionStatistics {
        source_pages,
        signatures,
        pages_per_signature,
        paper_sheets,
        // Front and back of each sheet
        output_pages: paper_sheets * 2,
        blank_pages_added,
    })
}
