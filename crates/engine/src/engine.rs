//! GameEngine: owns the game state and exposes the per-frame entry points.

use log::debug;

use crate::core::{GameSnapshot, GameState};
use crate::surface::Surface;
use crate::types::{GameAction, GamePhase, BIKE_COLOR, OBSTACLE_COLOR};

/// The whole game behind one handle.
///
/// A front-end drives it with one `step` + `render` per frame and forwards
/// key-downs to `handle_input`.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Create an idle engine with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_state(GameState::new(seed))
    }

    /// Wrap an existing state (e.g. one with a custom spawn chance)
    pub fn with_state(state: GameState) -> Self {
        Self { state }
    }

    /// Reset to a fresh run and enter `Running`
    pub fn start(&mut self) {
        self.state.start();
    }

    /// Advance one frame. Returns `false` when not running.
    pub fn step(&mut self, dt_secs: f64) -> bool {
        let stepped = self.state.step(dt_secs);
        if stepped && self.state.game_over() {
            debug!("engine stopped at frame {}", self.state.frame());
        }
        stepped
    }

    /// Paint the current frame: clear, then bike, then obstacles.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        if self.state.phase() == GamePhase::Idle {
            return;
        }
        surface.fill_rect(self.state.player().rect(), BIKE_COLOR);
        for obstacle in self.state.obstacles() {
            surface.fill_rect(obstacle.rect(), OBSTACLE_COLOR);
        }
    }

    /// Forward a key-down action. Returns `true` if it changed anything.
    pub fn handle_input(&mut self, action: GameAction) -> bool {
        self.state.apply_action(action)
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Obstacle;
    use crate::surface::DrawList;
    use crate::types::Rect;

    fn quiet_engine() -> GameEngine {
        let mut engine = GameEngine::with_state(GameState::with_spawn_chance(5, 0.0));
        engine.start();
        engine
    }

    #[test]
    fn idle_engine_renders_blank_canvas() {
        let engine = GameEngine::new(1);
        let mut list = DrawList::new();
        engine.render(&mut list);
        assert!(list.cleared());
        assert!(list.rects().is_empty());
    }

    #[test]
    fn render_draws_bike_then_obstacles() {
        let mut engine = quiet_engine();
        engine
            .state_mut()
            .push_obstacle(Obstacle::new(10.0, 20.0, 200.0));

        let mut list = DrawList::new();
        engine.render(&mut list);

        let rects = list.rects();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], (engine.state().player().rect(), BIKE_COLOR));
        assert_eq!(rects[1], (Rect::new(10.0, 20.0, 50.0, 50.0), OBSTACLE_COLOR));
    }

    #[test]
    fn render_does_not_mutate_state() {
        let mut engine = quiet_engine();
        engine.step(1.0 / 60.0);
        let before = engine.snapshot();

        let mut list = DrawList::new();
        engine.render(&mut list);
        engine.render(&mut list);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn game_over_frame_still_renders() {
        let mut engine = quiet_engine();
        let bike = engine.state().player().rect();
        engine
            .state_mut()
            .push_obstacle(Obstacle::new(bike.x, bike.y, 200.0));
        engine.step(0.0);
        assert_eq!(engine.phase(), GamePhase::GameOver);

        let mut list = DrawList::new();
        engine.render(&mut list);
        assert_eq!(list.rects().len(), 2);
    }

    #[test]
    fn input_is_ignored_until_started() {
        let mut engine = GameEngine::new(1);
        assert!(!engine.handle_input(GameAction::MoveLeft));
        assert!(engine.handle_input(GameAction::Start));
        assert!(engine.is_running());
        assert!(engine.handle_input(GameAction::MoveLeft));
    }
}
