//! Output sinks for rendered sheets

use crate::layout::{Line, Transform};
use crate::source::Page;
use crate::types::*;

/// Receives output sheets from the renderer, in order.
///
/// Per sheet the renderer calls `begin_sheet`, any number of `place` calls,
/// an optional `draw_line`, then `commit_sheet`. `finish` is called once
/// after the last sheet.
pub trait SheetSink<C> {
    type Output;

    fn begin_sheet(&mut self, width_pt: f32, height_pt: f32) -> Result<()>;

    /// Draw `page` scaled and translated by `transform`
    fn place(&mut self, page: &Page<C>, transform: Transform) -> Result<()>;

    fn draw_line(&mut self, line: Line) -> Result<()>;

    fn commit_sheet(&mut self) -> Result<()>;

    fn finish(self) -> Result<Self::Output>
    where
        Self: Sized;
}

/// One page drawn on a recorded sheet
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPage {
    pub page_index: usize,
    pub transform: Transform,
}

/// Everything drawn on one output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRecord {
    pub width_pt: f32,
    pub height_pt: f32,
    pub placements: Vec<PlacedPage>,
    pub lines: Vec<Line>,
}

/// Sink that records sheets in memory instead of drawing them
#[derive(Debug, Default)]
pub struct SheetRecorder {
    sheets: Vec<SheetRecord>,
    current: Option<SheetRecord>,
}

impl SheetRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn open_sheet(&mut self) -> Result<&mut SheetRecord> {
        self.current
            .as_mut()
            .ok_or_else(|| ImposeError::Render("No sheet is open".to_string()))
    }
}

impl<C> SheetSink<C> for SheetRecorder {
    type Output = Vec<SheetRecord>;

    fn begin_sheet(&mut self, width_pt: f32, height_pt: f32) -> Result<()> {
        if self.current.is_some() {
            return Err(ImposeError::Render("Sheet is already open".to_string()));
        }
        self.current = Some(SheetRecord {
            width_pt,
            height_pt,
            placements: Vec::new(),
            lines: Vec::new(),
        });
        Ok(())
    }

    fn place(&mut self, page: &Page<C>, transform: Transform) -> Result<()> {
        self.open_sheet()?.placements.push(PlacedPage {
            page_index: page.index,
            transform,
        });
        Ok(())
    }

    fn draw_line(&mut self, line: Line) -> Result<()> {
        self.open_sheet()?.lines.push(line);
        Ok(())
    }

    fn commit_sheet(&mut self) -> Result<()> {
        let sheet = self
            .current
            .take()
            .ok_or_else(|| ImposeError::Render("No sheet to commit".to_string()))?;
        self.sheets.push(sheet);
        Ok(())
    }

    fn finish(self) -> Result<Vec<SheetRecord>> {
        if self.current.is_some() {
            return Err(ImposeError::Render(
                "Last sheet was never committed".to_string(),
            ));
        }
        Ok(self.sheets)
    }
}
