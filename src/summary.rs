//! Headless simulation with a JSON-serializable result.

use serde::{Deserialize, Serialize};

use crate::engine::GameEngine;
use crate::types::REFERENCE_FPS;

/// Outcome of one headless run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u32,
    /// Frames actually stepped (fewer than requested if the bike crashed)
    pub frames: u64,
    pub phase: String,
    pub score: u32,
    pub dodged: u32,
    pub elapsed_secs: f64,
    pub obstacles_on_screen: usize,
}

/// Run a fresh game for up to `frames` fixed 1/60 s steps with no input.
///
/// The bike just sits at its start position, so the run ends at the first
/// obstacle that lands on it.
pub fn simulate(seed: u32, frames: u64) -> RunSummary {
    let mut engine = GameEngine::new(seed);
    engine.start();

    let dt = 1.0 / REFERENCE_FPS;
    for _ in 0..frames {
        engine.step(dt);
        if !engine.is_running() {
            break;
        }
    }

    let state = engine.state();
    RunSummary {
        seed,
        frames: state.frame(),
        phase: state.phase().as_str().to_string(),
        score: state.score(),
        dodged: state.dodged(),
        elapsed_secs: state.elapsed_secs(),
        obstacles_on_screen: state.obstacles().len(),
    }
}
