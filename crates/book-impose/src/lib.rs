pub mod constants;
pub mod impose;
pub mod layout;
mod marks;
mod options;
pub mod render;
mod source;
mod stats;
mod types;

pub use impose::{impose, impose_sync, load_pdf, output_path_for, save_pdf};
pub use layout::{ImposedOrder, Slot, compute_order};
pub use options::*;
pub use render::{PdfSheetSink, SheetRecorder, SheetRenderer, SheetSink, render_order};
pub use source::{Page, PageSource, PdfPageSource};
pub use stats::{calculate_statistics, statistics_for};
pub use types::*;
