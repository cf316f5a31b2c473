//! Sheet geometry in points
//!
//! Converts the inch-based [`LayoutParams`] into the positions the renderer
//! needs: where each half starts, how wide a page may be, and how much a
//! source page has to be scaled to fit.

use crate::constants::inches_to_pt;
use crate::options::{GuideLine, LayoutParams};
use crate::types::*;

use super::{Line, SheetHalf};

/// Resolved sheet geometry, all values in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
    pub outside_pt: f32,
    pub inside_pt: f32,
    pub bottom_pt: f32,
}

impl SheetGeometry {
    /// Resolve layout parameters, rejecting layouts that leave no room for pages
    pub fn from_layout(layout: &LayoutParams) -> Result<Self> {
        layout.validate()?;
        Ok(Self {
            width_pt: inches_to_pt(layout.sheet_width_in),
            height_pt: inches_to_pt(layout.sheet_height_in),
            outside_pt: inches_to_pt(layout.outside_padding_in),
            inside_pt: inches_to_pt(layout.inside_padding_in),
            bottom_pt: inches_to_pt(layout.bottom_padding_in),
        })
    }

    pub fn half_width(&self) -> f32 {
        self.width_pt / 2.0
    }

    /// Width a page is scaled to on either half
    pub fn target_width(&self) -> f32 {
        self.half_width() - self.outside_pt - self.inside_pt
    }

    /// Left edge of the page area on the given half
    pub fn half_origin_x(&self, half: SheetHalf) -> f32 {
        match half {
            SheetHalf::Left => self.outside_pt,
            SheetHalf::Right => self.half_width() + self.inside_pt,
        }
    }

    /// Uniform scale that fits a page of `page_width` points into the
    /// target width. Height is not constrained.
    pub fn scale_for(&self, index: usize, page_width: f32) -> Result<f32> {
        if !page_width.is_finite() || page_width <= 0.0 {
            return Err(ImposeError::InvalidPageGeometry {
                index,
                width: page_width,
            });
        }
        Ok(self.target_width() / page_width)
    }

    /// Guide line across the full sheet width, if one is configured
    pub fn guide_line(&self, guide: GuideLine) -> Option<Line> {
        let y = match guide {
            GuideLine::Never => return None,
            GuideLine::SheetMidpoint => self.height_pt / 2.0,
            GuideLine::AtHeight { inches } => inches_to_pt(inches),
        };
        Some(Line::horizontal(y, self.width_pt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_geometry() -> SheetGeometry {
        SheetGeometry::from_layout(&LayoutParams::default()).unwrap()
    }

    #[test]
    fn test_default_letter_geometry() {
        let geometry = default_geometry();
        assert_eq!(geometry.width_pt, 612.0);
        assert_eq!(geometry.height_pt, 792.0);
        assert!((geometry.target_width() - (306.0 - 25.2 - 21.6)).abs() < 1e-3);
        assert!((geometry.half_origin_x(SheetHalf::Left) - 25.2).abs() < 1e-4);
        assert!((geometry.half_origin_x(SheetHalf::Right) - 327.6).abs() < 1e-3);
    }

    #[test]
    fn test_scale_is_target_over_width() {
        let geometry = default_geometry();
        let scale = geometry.scale_for(0, 612.0).unwrap();
        assert!((scale - geometry.target_width() / 612.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_width_page_rejected() {
        let geometry = default_geometry();
        for width in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            match geometry.scale_for(3, width) {
                Err(ImposeError::InvalidPageGeometry { index, .. }) => assert_eq!(index, 3),
                other => panic!("Expected InvalidPageGeometry, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_paddings_wider_than_half_rejected() {
        let layout = LayoutParams {
            outside_padding_in: 2.0,
            inside_padding_in: 2.25,
            ..Default::default()
        };
        assert!(matches!(
            SheetGeometry::from_layout(&layout),
            Err(ImposeError::Config(_))
        ));
    }

    #[test]
    fn test_guide_line_positions() {
        let geometry = default_geometry();
        assert_eq!(geometry.guide_line(GuideLine::Never), None);
        assert_eq!(
            geometry.guide_line(GuideLine::SheetMidpoint),
            Some(Line::horizontal(396.0, 612.0))
        );
        assert_eq!(
            geometry.guide_line(GuideLine::AtHeight { inches: 1.0 }),
            Some(Line::horizontal(72.0, 612.0))
        );
    }
}
