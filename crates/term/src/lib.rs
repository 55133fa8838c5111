//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! The game itself draws onto an 800x600 pixel canvas through the engine's
//! [`Surface`](bike_dash_engine::Surface) trait; [`CanvasSurface`] projects
//! that canvas onto a grid of terminal cells.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Keep the canvas aspect ratio on 1:2 terminal glyphs

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use bike_dash_core as core;
pub use bike_dash_engine as engine;
pub use bike_dash_types as types;

pub use canvas::{CanvasSurface, Playfield};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use render_throttle::{frame_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
