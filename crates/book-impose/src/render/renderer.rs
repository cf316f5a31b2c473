//! Sheet layout rendering
//!
//! Walks an [`ImposedOrder`] two slots at a time, placing the left-half page
//! and then the right-half page of each output sheet, and hands the results
//! to a [`SheetSink`].

use crate::layout::{ImposedOrder, SheetGeometry, SheetHalf, Slot, Transform, compute_order};
use crate::options::{GuideLine, ImpositionOptions};
use crate::source::PageSource;
use crate::types::*;

use super::sink::SheetSink;

/// Render-time cursor state. Owned by a single `render` call.
struct OutputCanvas {
    cursor_x: f32,
    half: SheetHalf,
    sheet_open: bool,
    committed: usize,
}

/// Places pages from a [`PageSource`] onto sheets in imposed order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetRenderer {
    geometry: SheetGeometry,
    guide_line: GuideLine,
}

impl SheetRenderer {
    pub fn new(geometry: SheetGeometry, guide_line: GuideLine) -> Self {
        Self {
            geometry,
            guide_line,
        }
    }

    pub fn from_options(options: &ImpositionOptions) -> Result<Self> {
        Ok(Self::new(
            SheetGeometry::from_layout(&options.layout)?,
            options.guide_line,
        ))
    }

    pub fn geometry(&self) -> &SheetGeometry {
        &self.geometry
    }

    /// Render every slot of `order` into `sink` and return the sink's output.
    ///
    /// Blank slots still take up their half of a sheet. An odd-length order
    /// commits its last sheet with only the left half filled.
    pub fn render<S, K>(&self, order: &ImposedOrder, source: &S, mut sink: K) -> Result<K::Output>
    where
        S: PageSource,
        K: SheetSink<S::Content>,
    {
        let geometry = &self.geometry;
        let mut canvas = OutputCanvas {
            cursor_x: geometry.half_origin_x(SheetHalf::Left),
            half: SheetHalf::Left,
            sheet_open: false,
            committed: 0,
        };

        for slot in order.iter() {
            if !canvas.sheet_open {
                sink.begin_sheet(geometry.width_pt, geometry.height_pt)?;
                canvas.sheet_open = true;
            }

            if let Slot::Page(index) = slot {
                let page = source.page(index)?;
                let scale = geometry.scale_for(page.index, page.width)?;
                let transform = Transform::new(scale, canvas.cursor_x, geometry.bottom_pt);
                sink.place(&page, transform)?;
            }

            match canvas.half {
                SheetHalf::Left => {
                    canvas.cursor_x = geometry.half_origin_x(SheetHalf::Right);
                    canvas.half = SheetHalf::Right;
                }
                SheetHalf::Right => {
                    canvas.cursor_x = geometry.half_origin_x(SheetHalf::Left);
                    self.commit::<S::Content, K>(&mut canvas, &mut sink)?;
                    canvas.half = SheetHalf::Left;
                }
            }
        }

        // Odd-length order: the last sheet only got its left half
        if canvas.sheet_open {
            self.commit::<S::Content, K>(&mut canvas, &mut sink)?;
        }

        log::debug!("Rendered {} sheets from {} slots", canvas.committed, order.len());
        sink.finish()
    }

    fn commit<C, K>(&self, canvas: &mut OutputCanvas, sink: &mut K) -> Result<()>
    where
        K: SheetSink<C>,
    {
        if let Some(line) = self.geometry.guide_line(self.guide_line) {
            sink.draw_line(line)?;
        }
        sink.commit_sheet()?;
        canvas.sheet_open = false;
        canvas.committed += 1;
        Ok(())
    }
}

/// Compute the order for every page of `source` and render it
pub fn render_order<S, K>(source: &S, options: &ImpositionOptions, sink: K) -> Result<K::Output>
where
    S: PageSource,
    K: SheetSink<S::Content>,
{
    options.validate()?;
    let order = compute_order(source.page_count(), options.sheets_per_signature)?;
    SheetRenderer::from_options(options)?.render(&order, source, sink)
}
