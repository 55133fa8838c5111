//! GameView: maps a `GameEngine` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::{CanvasSurface, Playfield};
use crate::engine::GameEngine;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GamePhase;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Side panel width in columns.
const PANEL_W: u16 = 14;
/// Gap between the playfield frame and the side panel.
const PANEL_GAP: u16 = 2;
/// Smallest playfield worth drawing.
const MIN_COLS: u16 = 16;

/// A lightweight terminal renderer for the bike game.
pub struct GameView {
    /// Widest playfield in columns; rows follow from the canvas aspect ratio.
    max_cols: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 80x30 cells: 10x20 px each, roughly square on a 1:2 terminal glyph.
        Self { max_cols: 80 }
    }
}

impl GameView {
    /// Rows matching `cols` for a 4:3 canvas drawn with 1:2 glyphs.
    fn rows_for(cols: u16) -> u16 {
        cols * 3 / 8
    }

    fn cols_for(rows: u16) -> u16 {
        rows * 8 / 3
    }

    /// Compute where the playfield goes in `viewport`.
    ///
    /// The side panel is reserved first when there is room for it. Returns
    /// `None` when the terminal is too small for a usable playfield.
    pub fn layout(&self, viewport: Viewport) -> Option<Playfield> {
        let with_panel = viewport.width.saturating_sub(2 + PANEL_GAP + PANEL_W);
        let avail_w = if with_panel >= MIN_COLS {
            with_panel
        } else {
            viewport.width.saturating_sub(2)
        };
        let avail_h = viewport.height.saturating_sub(2);

        let mut cols = avail_w.min(self.max_cols);
        let mut rows = Self::rows_for(cols);
        if rows > avail_h {
            rows = avail_h;
            cols = Self::cols_for(rows).min(cols);
        }
        if cols < MIN_COLS || rows == 0 {
            return None;
        }

        let panel = if with_panel >= cols { PANEL_GAP + PANEL_W } else { 0 };
        let total_w = cols + 2 + panel;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(rows + 2) / 2;
        Some(Playfield::new(start_x + 1, start_y + 1, cols, rows))
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, engine: &GameEngine, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let Some(field) = self.layout(viewport) else {
            fb.put_str(0, 0, "terminal too small", CellStyle::default());
            return;
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), Rgb::new(20, 20, 30));
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        draw_border(
            fb,
            field.origin_x - 1,
            field.origin_y - 1,
            field.cols + 2,
            field.rows + 2,
            border,
        );

        engine.render(&mut CanvasSurface::new(fb, field, bg));

        self.draw_side_panel(fb, engine, viewport, field);

        match engine.phase() {
            GamePhase::Idle => draw_overlay(fb, field, "BIKE DASH", "PRESS ENTER"),
            GamePhase::GameOver => draw_overlay(fb, field, "GAME OVER", "PRESS ENTER"),
            GamePhase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, engine: &GameEngine, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(engine, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        engine: &GameEngine,
        viewport: Viewport,
        field: Playfield,
    ) {
        let panel_x = field.origin_x + field.cols + 1 + PANEL_GAP;
        if panel_x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = CellStyle { dim: true, ..value };

        let state = engine.state();
        let mut y = field.origin_y;

        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, state.score(), value);
        y += 3;

        fb.put_str(panel_x, y, "TIME", label);
        fb.put_tenths(panel_x, y + 1, state.elapsed_secs(), value);
        y += 3;

        fb.put_str(panel_x, y, "SPEED", label);
        fb.put_tenths(panel_x, y + 1, state.player().speed(), value);
        y += 3;

        fb.put_str(panel_x, y, "HI", label);
        fb.put_u32(panel_x, y + 1, state.best_score(), value);
        y += 3;

        for line in ["←→ steer", "↑↓ thrust", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, field: Playfield, title: &str, subtitle: &str) {
    let style = CellStyle {
        bold: true,
        ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
    };
    let sub = CellStyle {
        bold: false,
        dim: true,
        ..style
    };

    let mid_y = field.origin_y + field.rows / 2;
    centered(fb, field, mid_y.saturating_sub(1), title, style);
    centered(fb, field, mid_y + 1, subtitle, sub);
}

fn centered(fb: &mut FrameBuffer, field: Playfield, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = field.origin_x + field.cols.saturating_sub(text_w) / 2;
    fb.put_str(x, y, text, style);
}
