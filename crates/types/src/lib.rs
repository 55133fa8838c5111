//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, headless runs).
//!
//! # Canvas
//!
//! The game simulates a fixed logical drawing area, independent of the
//! terminal it is eventually rendered to:
//!
//! - **Width**: 800 px
//! - **Height**: 600 px
//! - **Origin**: top-left, y grows downward
//!
//! # Physics Constants
//!
//! Player kinematics are expressed per *reference frame* (1/60 s):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 0.1 | Velocity gained per frame (downward) |
//! | `FRICTION` | 0.95 | Velocity retained per frame |
//! | `MAX_SPEED` | 15 | Velocity magnitude cap |
//! | `MOVE_STEP` | 10 | Horizontal px per left/right key press |
//! | `THRUST_STEP` | 2 | Velocity change per up/down key press |
//!
//! # Obstacles
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `OBSTACLE_SIZE` | 50 | Width and height |
//! | `OBSTACLE_SPAWN_CHANCE` | 0.01 | Spawn probability per frame |
//! | `OBSTACLE_MIN_SPEED` | 200 | Slowest fall speed (px/s) |
//! | `OBSTACLE_SPEED_RANGE` | 100 | Added random fall speed (px/s) |
//! | `DODGE_REWARD` | 10 | Points per obstacle leaving the bottom edge |
//!
//! # Examples
//!
//! ```
//! use bike_dash_types::{GameAction, Rect, CANVAS_HEIGHT, CANVAS_WIDTH};
//!
//! let bike = Rect::new(180.0, 520.0, 40.0, 60.0);
//! let rock = Rect::new(180.0, 520.0, 50.0, 50.0);
//! assert!(bike.overlaps(&rock));
//!
//! assert_eq!(GameAction::MoveLeft.as_str(), "moveLeft");
//!
//! assert_eq!(CANVAS_WIDTH, 800.0);
//! assert_eq!(CANVAS_HEIGHT, 600.0);
//! ```

/// Logical canvas width in pixels
pub const CANVAS_WIDTH: f64 = 800.0;

/// Logical canvas height in pixels
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Bike (player) width in pixels
pub const BIKE_WIDTH: f64 = 40.0;

/// Bike (player) height in pixels
pub const BIKE_HEIGHT: f64 = 60.0;

/// Gap between the bike and the bottom edge at spawn
pub const BIKE_START_GAP: f64 = 20.0;

/// Lowest y the bike's top edge may reach (bike resting on the canvas bottom)
pub const FLOOR_Y: f64 = CANVAS_HEIGHT - BIKE_HEIGHT;

/// Maximum vertical speed magnitude (px per reference frame)
pub const MAX_SPEED: f64 = 15.0;

/// Downward acceleration per reference frame
pub const GRAVITY: f64 = 0.1;

/// Fraction of velocity retained per reference frame
pub const FRICTION: f64 = 0.95;

/// Reference frame rate the physics constants are tuned for
pub const REFERENCE_FPS: f64 = 60.0;

/// Horizontal distance per left/right key press
pub const MOVE_STEP: f64 = 10.0;

/// Vertical velocity change per up/down key press
pub const THRUST_STEP: f64 = 2.0;

/// Obstacle width and height
pub const OBSTACLE_SIZE: f64 = 50.0;

/// Probability of spawning an obstacle on any given frame
pub const OBSTACLE_SPAWN_CHANCE: f64 = 0.01;

/// Slowest obstacle fall speed (px per second)
pub const OBSTACLE_MIN_SPEED: f64 = 200.0;

/// Random extra fall speed on top of `OBSTACLE_MIN_SPEED` (px per second)
pub const OBSTACLE_SPEED_RANGE: f64 = 100.0;

/// Maximum number of obstacles alive at once
pub const MAX_OBSTACLES: usize = 64;

/// Score awarded for each obstacle that falls past the bottom edge
pub const DODGE_REWARD: u32 = 10;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Longest frame delta the frame clock hands to a step, in seconds
pub const MAX_STEP_SECS: f64 = 0.1;

/// Axis-aligned rectangle in canvas pixels
///
/// Used both as the collision bounding box and as the draw primitive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Strict axis-aligned overlap test
    ///
    /// Rectangles that only share an edge do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use bike_dash_types::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
    /// assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    /// ```
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Bike fill color (`#00ffcc`)
pub const BIKE_COLOR: Rgb = Rgb::new(0x00, 0xff, 0xcc);

/// Obstacle fill color (`#ff00cc`)
pub const OBSTACLE_COLOR: Rgb = Rgb::new(0xff, 0x00, 0xcc);

/// Game lifecycle phase
///
/// `Idle → Running → GameOver`, with `start` leading back to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Nothing has been started yet
    #[default]
    Idle,
    /// Physics, spawning and collision are live
    Running,
    /// The bike hit an obstacle; state is frozen until the next start
    GameOver,
}

impl GamePhase {
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Running)
    }

    /// Convert to snake_case string
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Running => "running",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Each action corresponds to a key-down event in the arcade
/// controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift the bike one step left
    MoveLeft,
    /// Shift the bike one step right
    MoveRight,
    /// Push vertical velocity upward (up arrow)
    Accelerate,
    /// Push vertical velocity downward (down arrow)
    Brake,
    /// Start a new run (from idle or after game over)
    Start,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Accelerate => "accelerate",
            GameAction::Brake => "brake",
            GameAction::Start => "start",
        }
    }
}
