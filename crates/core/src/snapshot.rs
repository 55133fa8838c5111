use arrayvec::ArrayVec;

use crate::types::{GamePhase, Rect, MAX_OBSTACLES};

/// Read-only view of a game at one instant.
///
/// Everything a renderer or reporter needs, copied out of `GameState` so the
/// caller never holds a borrow of the live simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub best_score: u32,
    pub dodged: u32,
    pub elapsed_secs: f64,
    /// Signed vertical velocity (positive = downward)
    pub velocity: f64,
    pub player: Rect,
    pub obstacles: ArrayVec<Rect, MAX_OBSTACLES>,
    pub episode_id: u32,
    pub frame: u64,
    pub seed: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            best_score: 0,
            dodged: 0,
            elapsed_secs: 0.0,
            velocity: 0.0,
            player: Rect::default(),
            obstacles: ArrayVec::new(),
            episode_id: 0,
            frame: 0,
            seed: 0,
        }
    }
}
