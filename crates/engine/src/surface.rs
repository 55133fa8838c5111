//! Drawing target abstraction.

use crate::types::{Rect, Rgb};

/// Something the engine can paint solid rectangles onto.
///
/// Coordinates are canvas pixels (800x600, origin top-left). Implementations
/// decide how to map them onto real output and must clip anything that falls
/// outside the canvas.
pub trait Surface {
    /// Erase the whole drawing area.
    fn clear(&mut self);

    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
}

/// Surface that records draw calls instead of drawing.
///
/// Handy for headless runs and for asserting what a frame contains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    cleared: bool,
    rects: Vec<(Rect, Rgb)>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `clear` was called at least once.
    pub fn cleared(&self) -> bool {
        self.cleared
    }

    /// Filled rectangles since the last `clear`, in draw order.
    pub fn rects(&self) -> &[(Rect, Rgb)] {
        &self.rects
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.cleared = true;
        self.rects.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.rects.push((rect, color));
    }
}
