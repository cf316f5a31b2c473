//! Sheet rendering for imposition
//!
//! This module turns an imposed order into output sheets:
//! - Walking the order and placing pages half by half
//! - Sink implementations (PDF output, in-memory recording)
//! - Creating XObjects from source pages
//! - Deep copying PDF objects

mod pdf_sink;
mod renderer;
mod sink;
mod xobject;

pub use pdf_sink::PdfSheetSink;
pub use renderer::{SheetRenderer, render_order};
pub use sink::{PlacedPage, SheetRecord, SheetRecorder, SheetSink};
pub use xobject::{copy_object_deep, create_page_xobject, get_page_dimensions, page_box};
