//! Layout data types for imposition
//!
//! These types represent the intermediate layout calculations between
//! signature ordering and PDF rendering.

/// One position in the imposed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A source page, by 0-based logical index
    Page(usize),
    /// Padding for a signature position with no source page
    Blank,
}

impl Slot {
    /// Source page index, if this slot holds one
    pub fn page(self) -> Option<usize> {
        match self {
            Slot::Page(index) => Some(index),
            Slot::Blank => None,
        }
    }

    pub fn is_blank(self) -> bool {
        matches!(self, Slot::Blank)
    }
}

/// Which half of an output sheet is being filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetHalf {
    #[default]
    Left,
    Right,
}

/// Placement of a source page on the output sheet: uniform scale, then
/// translation to `(x, y)` in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub x: f32,
    pub y: f32,
}

impl Transform {
    pub fn new(scale: f32, x: f32, y: f32) -> Self {
        Self { scale, x, y }
    }

    /// PDF `cm` operands `[a b c d e f]`
    pub fn matrix(&self) -> [f32; 6] {
        [self.scale, 0.0, 0.0, self.scale, self.x, self.y]
    }
}

/// A straight line on the output sheet, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Line {
    /// Horizontal line spanning `[0, width]` at height `y`
    pub fn horizontal(y: f32, width: f32) -> Self {
        Self {
            x0: 0.0,
            y0: y,
            x1: width,
            y1: y,
        }
    }
}
