//! Projection of the 800x600 game canvas onto terminal cells.

use crate::engine::Surface;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rect, Rgb, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Glyph used for solid fills.
pub const SOLID: char = '█';

/// Region of the framebuffer that stands for the whole canvas.
///
/// Each cell covers `CANVAS_WIDTH / cols` by `CANVAS_HEIGHT / rows` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cols: u16,
    pub rows: u16,
}

impl Playfield {
    pub fn new(origin_x: u16, origin_y: u16, cols: u16, rows: u16) -> Self {
        Self {
            origin_x,
            origin_y,
            cols,
            rows,
        }
    }

    /// Canvas pixels per column
    pub fn cell_w(&self) -> f64 {
        CANVAS_WIDTH / self.cols.max(1) as f64
    }

    /// Canvas pixels per row
    pub fn cell_h(&self) -> f64 {
        CANVAS_HEIGHT / self.rows.max(1) as f64
    }

    /// Cells touched by `rect`, as `(x, y, w, h)` in framebuffer coordinates.
    ///
    /// Any cell the rectangle overlaps is included; the result is clipped to
    /// the playfield. `None` when nothing is visible.
    pub fn project(&self, rect: Rect) -> Option<(u16, u16, u16, u16)> {
        if self.cols == 0 || self.rows == 0 {
            return None;
        }
        let (x0, x1) = span(rect.x, rect.right(), self.cell_w(), self.cols)?;
        let (y0, y1) = span(rect.y, rect.bottom(), self.cell_h(), self.rows)?;
        Some((self.origin_x + x0, self.origin_y + y0, x1 - x0, y1 - y0))
    }
}

/// Cell range `[start, end)` covering `[lo, hi)` pixels, clipped to `[0, cells)`.
fn span(lo: f64, hi: f64, cell: f64, cells: u16) -> Option<(u16, u16)> {
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo {
        return None;
    }
    let max = cells as f64;
    let start = (lo / cell).floor().clamp(0.0, max) as u16;
    let end = (hi / cell).ceil().clamp(0.0, max) as u16;
    if end > start {
        Some((start, end))
    } else {
        None
    }
}

/// `Surface` adapter that paints onto a framebuffer playfield.
pub struct CanvasSurface<'a> {
    fb: &'a mut FrameBuffer,
    field: Playfield,
    background: CellStyle,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(fb: &'a mut FrameBuffer, field: Playfield, background: CellStyle) -> Self {
        Self {
            fb,
            field,
            background,
        }
    }
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self) {
        let f = self.field;
        self.fb
            .fill_rect(f.origin_x, f.origin_y, f.cols, f.rows, ' ', self.background);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if let Some((x, y, w, h)) = self.field.project(rect) {
            let style = CellStyle {
                fg: color,
                bold: true,
                ..self.background
            };
            self.fb.fill_rect(x, y, w, h, SOLID, style);
        }
    }
}
