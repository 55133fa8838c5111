//! Game state module - manages the complete game state
//!
//! This module ties together the bike, the falling obstacles, the spawner and
//! scoring. It handles per-frame physics, collision, input and the game
//! lifecycle (`Idle → Running → GameOver`).

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::rng::ObstacleSpawner;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// The player-controlled bike
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity in px per reference frame (positive = downward)
    pub velocity: f64,
}

impl Player {
    /// Create a bike at the start position: horizontally centered, just above the floor
    pub fn new() -> Self {
        Self {
            x: CANVAS_WIDTH / 2.0 - BIKE_WIDTH / 2.0,
            y: CANVAS_HEIGHT - BIKE_HEIGHT - BIKE_START_GAP,
            velocity: 0.0,
        }
    }

    /// Bounding box
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, BIKE_WIDTH, BIKE_HEIGHT)
    }

    /// Absolute vertical speed, as shown in the HUD
    pub fn speed(&self) -> f64 {
        self.velocity.abs()
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A falling obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Fall speed in px per second
    pub speed: f64,
}

impl Obstacle {
    /// Create a standard-size obstacle
    pub fn new(x: f64, y: f64, speed: f64) -> Self {
        Self {
            x,
            y,
            w: OBSTACLE_SIZE,
            h: OBSTACLE_SIZE,
            speed,
        }
    }

    /// Bounding box
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// True once the top edge has fallen below the canvas
    pub fn is_past_bottom(&self) -> bool {
        self.y > CANVAS_HEIGHT
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    phase: GamePhase,
    player: Player,
    obstacles: ArrayVec<Obstacle, MAX_OBSTACLES>,
    spawner: ObstacleSpawner,
    score: u32,
    /// Best score seen across episodes of this state.
    best_score: u32,
    /// Obstacles that fell past the bottom edge this episode.
    dodged: u32,
    elapsed_secs: f64,
    /// Monotonic episode id (increments on every start).
    episode_id: u32,
    /// Steps taken within the current episode.
    frame: u64,
}

impl GameState {
    /// Create a new idle game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_spawner(ObstacleSpawner::new(seed))
    }

    /// Create a new idle game with a custom per-frame spawn chance
    pub fn with_spawn_chance(seed: u32, chance: f64) -> Self {
        Self::with_spawner(ObstacleSpawner::with_chance(seed, chance))
    }

    fn with_spawner(spawner: ObstacleSpawner) -> Self {
        Self {
            phase: GamePhase::Idle,
            player: Player::new(),
            obstacles: ArrayVec::new(),
            spawner,
            score: 0,
            best_score: 0,
            dodged: 0,
            elapsed_secs: 0.0,
            episode_id: 0,
            frame: 0,
        }
    }

    /// Reset to a fresh episode and start running.
    ///
    /// The spawner keeps its stream, so consecutive episodes differ while the
    /// whole session stays reproducible from the starting seed.
    pub fn start(&mut self) {
        self.player = Player::new();
        self.obstacles.clear();
        self.score = 0;
        self.dodged = 0;
        self.elapsed_secs = 0.0;
        self.frame = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = GamePhase::Running;
        info!(
            "episode {} started (rng state {})",
            self.episode_id,
            self.spawner.seed()
        );
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn dodged(&self) -> u32 {
        self.dodged
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn seed(&self) -> u32 {
        self.spawner.seed()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Direct access to the bike, for scripted scenarios.
    ///
    /// The next `step` re-establishes the floor/ceiling clamp; horizontal
    /// bounds are only enforced by input.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Insert an obstacle directly, for scripted scenarios.
    ///
    /// Returns `false` when the obstacle collection is full.
    pub fn push_obstacle(&mut self, obstacle: Obstacle) -> bool {
        self.obstacles.try_push(obstacle).is_ok()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.score = self.score;
        out.best_score = self.best_score;
        out.dodged = self.dodged;
        out.elapsed_secs = self.elapsed_secs;
        out.velocity = self.player.velocity;
        out.player = self.player.rect();
        out.obstacles.clear();
        out.obstacles.extend(self.obstacles.iter().map(Obstacle::rect));
        out.episode_id = self.episode_id;
        out.frame = self.frame;
        out.seed = self.spawner.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the simulation by `dt_secs`.
    ///
    /// Order within a step: bike physics, obstacle fall and removal, spawn
    /// roll, collision. Returns `true` if the step ran (the game was running).
    pub fn step(&mut self, dt_secs: f64) -> bool {
        if !self.is_running() {
            return false;
        }

        let dt = sanitize_dt(dt_secs);
        self.frame = self.frame.wrapping_add(1);

        self.step_player(dt);
        self.step_obstacles(dt);

        if let Some(obstacle) = self.spawner.roll() {
            if self.obstacles.try_push(obstacle).is_ok() {
                debug!(
                    "spawned obstacle at x={:.1} speed={:.1}",
                    obstacle.x, obstacle.speed
                );
            } else {
                debug!("obstacle spawn skipped: {} alive", MAX_OBSTACLES);
            }
        }

        if let Some(index) = self.first_collision() {
            self.end_game(index);
            return true;
        }

        self.elapsed_secs += dt;
        true
    }

    fn step_player(&mut self, dt: f64) {
        let frames = dt * REFERENCE_FPS;
        let player = &mut self.player;

        player.velocity += GRAVITY * frames;
        player.velocity *= FRICTION.powf(frames);
        player.velocity = player.velocity.clamp(-MAX_SPEED, MAX_SPEED);
        player.y += player.velocity * frames;

        if player.y > FLOOR_Y {
            player.y = FLOOR_Y;
            player.velocity = 0.0;
        } else if player.y < 0.0 {
            player.y = 0.0;
            player.velocity = 0.0;
        }
    }

    fn step_obstacles(&mut self, dt: f64) {
        for obstacle in &mut self.obstacles {
            obstacle.y += obstacle.speed * dt;
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_past_bottom());
        let removed = (before - self.obstacles.len()) as u32;

        if removed > 0 {
            self.dodged += removed;
            self.score += removed * DODGE_REWARD;
            debug!("{} obstacle(s) dodged, score {}", removed, self.score);
        }
    }

    /// Index of the first obstacle overlapping the bike, if any
    pub fn first_collision(&self) -> Option<usize> {
        let bike = self.player.rect();
        self.obstacles.iter().position(|o| bike.overlaps(&o.rect()))
    }

    fn end_game(&mut self, obstacle_index: usize) {
        self.phase = GamePhase::GameOver;
        self.best_score = self.best_score.max(self.score);
        info!(
            "episode {} over: hit obstacle {} after {:.1}s, score {}",
            self.episode_id, obstacle_index, self.elapsed_secs, self.score
        );
    }

    /// Apply a game action
    ///
    /// Returns `true` if the action changed anything. Movement actions are
    /// ignored unless running; `Start` is ignored while running.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                if self.is_running() {
                    return false;
                }
                self.start();
                true
            }
            _ if !self.is_running() => false,
            GameAction::MoveLeft => self.nudge_x(-MOVE_STEP),
            GameAction::MoveRight => self.nudge_x(MOVE_STEP),
            GameAction::Accelerate => self.thrust(-THRUST_STEP),
            GameAction::Brake => self.thrust(THRUST_STEP),
        }
    }

    /// Shift the bike horizontally, keeping it fully on the canvas
    fn nudge_x(&mut self, dx: f64) -> bool {
        let x = (self.player.x + dx).clamp(0.0, CANVAS_WIDTH - BIKE_WIDTH);
        let moved = x != self.player.x;
        self.player.x = x;
        moved
    }

    /// Change vertical velocity, keeping its magnitude within `MAX_SPEED`
    fn thrust(&mut self, dv: f64) -> bool {
        let v = (self.player.velocity + dv).clamp(-MAX_SPEED, MAX_SPEED);
        let changed = v != self.player.velocity;
        self.player.velocity = v;
        changed
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Map negative and non-finite frame deltas to 0.
fn sanitize_dt(dt_secs: f64) -> f64 {
    if dt_secs.is_finite() && dt_secs > 0.0 {
        dt_secs
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn quiet_game() -> GameState {
        let mut state = GameState::with_spawn_chance(12345, 0.0);
        state.start();
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.dodged, 0);
        assert_eq!(state.episode_id, 0);
        assert_eq!(state.elapsed_secs, 0.0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_player_start_position() {
        let player = Player::new();
        assert_eq!(player.x, 380.0);
        assert_eq!(player.y, 520.0);
        assert_eq!(player.velocity, 0.0);
    }

    #[test]
    fn test_step_is_noop_when_idle() {
        let mut state = GameState::with_spawn_chance(1, 1.0);
        assert!(!state.step(DT));
        assert!(state.obstacles.is_empty());
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_start_resets_episode() {
        let mut state = quiet_game();
        state.score = 50;
        state.dodged = 5;
        state.elapsed_secs = 12.0;
        state.player.x = 0.0;
        state.push_obstacle(Obstacle::new(0.0, 0.0, 200.0));
        state.phase = GamePhase::GameOver;

        state.start();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.dodged, 0);
        assert_eq!(state.elapsed_secs, 0.0);
        assert_eq!(state.player, Player::new());
        assert!(state.obstacles.is_empty());
        assert_eq!(state.episode_id, 2);
    }

    #[test]
    fn test_gravity_settles_on_floor() {
        let mut state = quiet_game();
        for _ in 0..600 {
            state.step(DT);
        }
        assert_eq!(state.player.y, FLOOR_Y);
        assert_eq!(state.player.velocity, 0.0);
    }

    #[test]
    fn test_single_frame_matches_arcade_physics() {
        let mut state = quiet_game();
        state.player.y = 300.0;
        state.player.velocity = 1.0;
        state.step(DT);

        let expected_v = (1.0 + GRAVITY) * FRICTION;
        assert!((state.player.velocity - expected_v).abs() < 1e-9);
        assert!((state.player.y - (300.0 + expected_v)).abs() < 1e-9);
    }

    #[test]
    fn test_ceiling_clamp() {
        let mut state = quiet_game();
        state.player.y = 1.0;
        state.player.velocity = -MAX_SPEED;
        state.step(DT);
        assert_eq!(state.player.y, 0.0);
        assert_eq!(state.player.velocity, 0.0);
    }

    #[test]
    fn test_zero_dt_keeps_upward_thrust_on_floor() {
        let mut state = quiet_game();
        state.player.y = FLOOR_Y;
        state.apply_action(GameAction::Accelerate);
        state.step(0.0);
        assert_eq!(state.player.velocity, -THRUST_STEP);
    }

    #[test]
    fn test_obstacles_fall_by_speed_times_dt() {
        let mut state = quiet_game();
        state.push_obstacle(Obstacle::new(0.0, 0.0, 240.0));
        state.step(0.05);
        assert!((state.obstacles[0].y - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_obstacle_past_bottom_scores_reward() {
        let mut state = quiet_game();
        state.push_obstacle(Obstacle::new(0.0, 599.0, 200.0));
        state.step(DT);

        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, DODGE_REWARD);
        assert_eq!(state.dodged, 1);
    }

    #[test]
    fn test_obstacle_exactly_at_bottom_is_kept() {
        let mut state = quiet_game();
        state.push_obstacle(Obstacle::new(0.0, CANVAS_HEIGHT, 200.0));
        state.step(0.0);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_multiple_removals_in_one_step() {
        let mut state = quiet_game();
        state.push_obstacle(Obstacle::new(0.0, 590.0, 300.0));
        state.push_obstacle(Obstacle::new(60.0, 595.0, 300.0));
        state.push_obstacle(Obstacle::new(120.0, 100.0, 300.0));
        state.step(0.05);

        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.score, 2 * DODGE_REWARD);
    }

    #[test]
    fn test_collision_ends_game() {
        let mut state = quiet_game();
        state.player.x = 180.0;
        state.player.y = 520.0;
        state.push_obstacle(Obstacle::new(180.0, 520.0, 250.0));

        assert!(state.step(0.0));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.is_running());
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = quiet_game();
        state.player.x = 180.0;
        state.player.y = 520.0;
        state.push_obstacle(Obstacle::new(180.0, 520.0, 250.0));
        state.step(DT);

        let frozen = state.snapshot();
        assert!(!state.step(DT));
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.snapshot(), frozen);
    }

    #[test]
    fn test_elapsed_time_stops_on_collision_frame() {
        let mut state = quiet_game();
        state.step(0.05);
        let before = state.elapsed_secs;

        state.player.x = 0.0;
        state.player.y = FLOOR_Y;
        state.push_obstacle(Obstacle::new(0.0, FLOOR_Y, 200.0));
        state.step(DT);

        assert_eq!(state.elapsed_secs, before);
    }

    #[test]
    fn test_best_score_survives_restart() {
        let mut state = quiet_game();
        state.push_obstacle(Obstacle::new(0.0, 599.0, 200.0));
        state.step(DT);
        state.player.x = 600.0;
        state.push_obstacle(Obstacle::new(600.0, state.player.y, 200.0));
        state.step(0.0);
        assert!(state.game_over());
        assert_eq!(state.best_score, DODGE_REWARD);

        state.start();
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, DODGE_REWARD);
    }

    #[test]
    fn test_horizontal_moves_are_clamped() {
        let mut state = quiet_game();
        state.player.x = 5.0;
        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.player.x, 0.0);
        assert!(!state.apply_action(GameAction::MoveLeft));

        state.player.x = CANVAS_WIDTH - BIKE_WIDTH - 3.0;
        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.player.x, CANVAS_WIDTH - BIKE_WIDTH);
        assert!(!state.apply_action(GameAction::MoveRight));
    }

    #[test]
    fn test_thrust_is_clamped_to_max_speed() {
        let mut state = quiet_game();
        for _ in 0..20 {
            state.apply_action(GameAction::Accelerate);
        }
        assert_eq!(state.player.velocity, -MAX_SPEED);

        for _ in 0..40 {
            state.apply_action(GameAction::Brake);
        }
        assert_eq!(state.player.velocity, MAX_SPEED);
    }

    #[test]
    fn test_input_ignored_when_not_running() {
        let mut state = GameState::new(1);
        let before = state.player;
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::Accelerate));
        assert_eq!(state.player, before);
    }

    #[test]
    fn test_start_action_ignored_while_running() {
        let mut state = quiet_game();
        state.score = 30;
        assert!(!state.apply_action(GameAction::Start));
        assert_eq!(state.score, 30);
        assert_eq!(state.episode_id, 1);
    }

    #[test]
    fn test_start_action_restarts_after_game_over() {
        let mut state = quiet_game();
        state.phase = GamePhase::GameOver;
        assert!(state.apply_action(GameAction::Start));
        assert!(state.is_running());
        assert_eq!(state.episode_id, 2);
    }

    #[test]
    fn test_spawn_stops_at_capacity() {
        let mut state = GameState::with_spawn_chance(3, 1.0);
        state.start();

        // Zero-length steps: nothing falls and spawns sit above the canvas,
        // so only the spawner changes anything.
        for _ in 0..MAX_OBSTACLES + 10 {
            state.step(0.0);
        }
        assert!(state.is_running());
        assert_eq!(state.obstacles.len(), MAX_OBSTACLES);
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(-1.0), 0.0);
        assert_eq!(sanitize_dt(f64::NAN), 0.0);
        assert_eq!(sanitize_dt(f64::INFINITY), 0.0);
        assert_eq!(sanitize_dt(10.0), 10.0);
        assert_eq!(sanitize_dt(DT), DT);
    }

    #[test]
    fn test_long_step_moves_obstacles_by_full_delta() {
        let mut state = quiet_game();
        state.push_obstacle(Obstacle::new(0.0, 0.0, 200.0));

        state.step(0.5);

        assert!(state.is_running());
        assert_eq!(state.obstacles[0].y, 100.0);
        assert_eq!(state.elapsed_secs, 0.5);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = quiet_game();
        state.push_obstacle(Obstacle::new(10.0, 20.0, 200.0));
        state.apply_action(GameAction::Brake);

        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.player, state.player.rect());
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0], Rect::new(10.0, 20.0, 50.0, 50.0));
        assert_eq!(snap.velocity, THRUST_STEP);
        assert_eq!(snap.episode_id, 1);
    }
}
