//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical runs
//! - **Testable**: Every rule is exercised without a rendering surface
//! - **Portable**: Can run in any environment (terminal, headless simulation)
//! - **Fast**: Obstacles live in a fixed-capacity array, no allocation per step
//!
//! # Module Structure
//!
//! - [`game_state`]: Bike, obstacles, scoring, lifecycle and the per-frame step
//! - [`rng`]: Seeded LCG and the per-frame obstacle spawner
//! - [`snapshot`]: Copy-out view of the state for renderers and reports
//!
//! # Game Rules
//!
//! - **Gravity**: The bike sinks toward the floor, damped by friction
//! - **Thrust**: Up/down adjust vertical velocity, capped at `MAX_SPEED`
//! - **Obstacles**: 1% chance per frame to drop a 50x50 block at a random column
//! - **Scoring**: 10 points for every block that falls past the bottom edge
//! - **Game over**: First bounding-box overlap between bike and block
//!
//! # Example
//!
//! ```
//! use bike_dash_core::{GameState, Obstacle};
//! use bike_dash_types::{GameAction, GamePhase};
//!
//! let mut game = GameState::with_spawn_chance(12345, 0.0);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.step(1.0 / 60.0);
//! assert_eq!(game.phase(), GamePhase::Running);
//!
//! // Drop a block right onto the bike.
//! let bike = game.player().rect();
//! game.push_obstacle(Obstacle::new(bike.x, bike.y, 250.0));
//! game.step(1.0 / 60.0);
//! assert_eq!(game.phase(), GamePhase::GameOver);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::step`](game_state::GameState::step) once per frame with
//! the elapsed seconds. Bike physics is tuned per 1/60 s reference frame and
//! scaled by the delta; obstacles fall at `speed * delta` px.

pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use bike_dash_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, Obstacle, Player};
pub use rng::{ObstacleSpawner, SimpleRng};
pub use snapshot::GameSnapshot;
