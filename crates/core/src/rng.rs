//! RNG module - seeded obstacle generation
//!
//! Obstacles appear with a fixed probability per frame, at a uniformly random
//! column and with a uniformly random fall speed. All of that randomness is
//! drawn from one seeded LCG so a run can be replayed from its seed.

use crate::game_state::Obstacle;
use crate::types::{
    CANVAS_WIDTH, OBSTACLE_MIN_SPEED, OBSTACLE_SIZE, OBSTACLE_SPAWN_CHANCE, OBSTACLE_SPEED_RANGE,
};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a uniform value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Per-frame obstacle spawner
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    rng: SimpleRng,
    /// Probability of a spawn on each roll, in [0, 1]
    chance: f64,
}

impl ObstacleSpawner {
    /// Create a spawner with the arcade spawn chance
    pub fn new(seed: u32) -> Self {
        Self::with_chance(seed, OBSTACLE_SPAWN_CHANCE)
    }

    /// Create a spawner with a custom spawn chance (clamped to [0, 1])
    ///
    /// A chance of `1.0` spawns on every roll and `0.0` never spawns, which
    /// makes scripted scenarios and benchmarks deterministic.
    pub fn with_chance(seed: u32, chance: f64) -> Self {
        let chance = if chance.is_nan() {
            0.0
        } else {
            chance.clamp(0.0, 1.0)
        };
        Self {
            rng: SimpleRng::new(seed),
            chance,
        }
    }

    pub fn chance(&self) -> f64 {
        self.chance
    }

    /// Roll once for this frame.
    ///
    /// Returns a fresh obstacle just above the top edge when the roll succeeds.
    pub fn roll(&mut self) -> Option<Obstacle> {
        if self.rng.next_f64() < self.chance {
            Some(self.make_obstacle())
        } else {
            None
        }
    }

    fn make_obstacle(&mut self) -> Obstacle {
        let x = self.rng.next_f64() * (CANVAS_WIDTH - OBSTACLE_SIZE);
        let speed = OBSTACLE_MIN_SPEED + self.rng.next_f64() * OBSTACLE_SPEED_RANGE;
        Obstacle::new(x, -OBSTACLE_SIZE, speed)
    }

    /// Get the current RNG state (for replaying the remaining stream)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for ObstacleSpawner {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_f64_stays_in_unit_interval() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_spawner_always_spawns_at_full_chance() {
        let mut spawner = ObstacleSpawner::with_chance(42, 1.0);
        for _ in 0..100 {
            let o = spawner.roll().expect("chance 1.0 must spawn");
            assert!(o.x >= 0.0 && o.x < CANVAS_WIDTH - OBSTACLE_SIZE);
            assert_eq!(o.y, -OBSTACLE_SIZE);
            assert_eq!(o.w, OBSTACLE_SIZE);
            assert_eq!(o.h, OBSTACLE_SIZE);
            assert!(o.speed >= OBSTACLE_MIN_SPEED);
            assert!(o.speed < OBSTACLE_MIN_SPEED + OBSTACLE_SPEED_RANGE);
        }
    }

    #[test]
    fn test_spawner_never_spawns_at_zero_chance() {
        let mut spawner = ObstacleSpawner::with_chance(42, 0.0);
        for _ in 0..1000 {
            assert!(spawner.roll().is_none());
        }
    }

    #[test]
    fn test_spawner_chance_is_clamped() {
        assert_eq!(ObstacleSpawner::with_chance(1, 3.0).chance(), 1.0);
        assert_eq!(ObstacleSpawner::with_chance(1, -1.0).chance(), 0.0);
        assert_eq!(ObstacleSpawner::with_chance(1, f64::NAN).chance(), 0.0);
    }

    #[test]
    fn test_default_spawn_rate_is_roughly_one_percent() {
        let mut spawner = ObstacleSpawner::new(2024);
        let spawned = (0..100_000).filter(|_| spawner.roll().is_some()).count();
        // 1000 expected; allow a wide band.
        assert!((700..1300).contains(&spawned), "spawned {}", spawned);
    }

    #[test]
    fn test_spawner_replays_from_seed() {
        let mut a = ObstacleSpawner::with_chance(99, 0.5);
        let mut b = ObstacleSpawner::with_chance(99, 0.5);
        for _ in 0..200 {
            assert_eq!(a.roll(), b.roll());
        }
    }
}
