//! Layout calculation modules for imposition
//!
//! This module handles the combinatorial and geometric side of imposition:
//! - Signature page ordering (which source page goes where)
//! - Sheet geometry (half widths, paddings, scale)

mod geometry;
mod order;
mod types;

pub use geometry::*;
pub use order::*;
pub use types::*;
