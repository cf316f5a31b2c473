//! Shared constants for signature imposition
//!
//! This module centralizes magic numbers and defaults used throughout
//! the imposition process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert inches to points
#[inline]
pub fn inches_to_pt(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}

/// Convert points to inches
#[inline]
pub fn pt_to_inches(pt: f32) -> f32 {
    pt / POINTS_PER_INCH
}

// =============================================================================
// Source Pages
// =============================================================================

/// Fallback page width in points when a source page has no MediaBox (US Letter)
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Fallback page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Fallback page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Signatures
// =============================================================================

/// Logical page slots carried by one folded sheet (two per printed side)
pub const PAGES_PER_SHEET: usize = 4;

/// Default number of sheets folded together into one signature
pub const DEFAULT_SHEETS_PER_SIGNATURE: usize = 5;

// =============================================================================
// Output Sheet Layout (inches)
// =============================================================================

/// Default output sheet width (US Letter, portrait)
pub const DEFAULT_SHEET_WIDTH_IN: f32 = 8.5;

/// Default output sheet height (US Letter, portrait)
pub const DEFAULT_SHEET_HEIGHT_IN: f32 = 11.0;

/// Default padding below each placed page
pub const DEFAULT_BOTTOM_PADDING_IN: f32 = 0.25;

/// Default padding along the spine
pub const DEFAULT_INSIDE_PADDING_IN: f32 = 0.3;

/// Default padding along the fore edge
pub const DEFAULT_OUTSIDE_PADDING_IN: f32 = 0.35;

// =============================================================================
// Output Document
// =============================================================================

/// PDF version written for imposed documents
pub const OUTPUT_PDF_VERSION: &str = "1.7";

/// Prefix prepended to the input file name to derive the output file name
pub const OUTPUT_FILE_PREFIX: &str = "book.";

/// Line width for the fold/trim guide line (points)
pub const GUIDE_LINE_WIDTH: f32 = 0.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert_eq!(inches_to_pt(8.5), 612.0);
        assert_eq!(pt_to_inches(792.0), 11.0);
        assert_eq!(pt_to_inches(inches_to_pt(0.25)), 0.25);
    }
}
