//! Game engine - the frame-level driver around `core::GameState`.
//!
//! The core crate knows nothing about time sources or drawing. This crate
//! adds the three seams a front-end needs:
//!
//! - [`GameEngine`]: `start` / `step` / `render` / `handle_input`
//! - [`Surface`]: the drawing target `render` paints onto
//! - [`FrameClock`]: turns monotonic instants into frame deltas
//!
//! # Example
//!
//! ```
//! use bike_dash_engine::{DrawList, GameEngine};
//! use bike_dash_types::GameAction;
//!
//! let mut engine = GameEngine::new(7);
//! engine.start();
//! engine.handle_input(GameAction::MoveLeft);
//! engine.step(1.0 / 60.0);
//!
//! let mut frame = DrawList::new();
//! engine.render(&mut frame);
//! assert!(frame.cleared());
//! assert_eq!(frame.rects().len(), 1 + engine.state().obstacles().len());
//! ```

pub mod clock;
pub mod engine;
pub mod surface;

pub use bike_dash_core as core;
pub use bike_dash_types as types;

pub use clock::FrameClock;
pub use engine::GameEngine;
pub use surface::{DrawList, Surface};
