//! Redraw throttling for screens that are not animating.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::GameSnapshot;
use crate::game_view::Viewport;

/// Decides whether a frame needs to be redrawn.
///
/// While the game runs every frame is drawn. On the idle and game-over
/// screens nothing moves, so a frame is drawn only when its fingerprint
/// changes or the static interval elapses.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - When `animating=true`: always render (no throttling).
    /// - When `animating=false`: render immediately on fingerprint change,
    ///   otherwise at most once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let changed = fingerprint != self.last_fingerprint;
        let due = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if !self.has_rendered || animating || changed || due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        false
    }
}

/// Hash of everything visible on a static screen.
pub fn frame_fingerprint(snap: &GameSnapshot, viewport: Viewport) -> u64 {
    let mut h = DefaultHasher::new();
    snap.phase.hash(&mut h);
    snap.score.hash(&mut h);
    snap.best_score.hash(&mut h);
    snap.episode_id.hash(&mut h);
    snap.frame.hash(&mut h);
    viewport.width.hash(&mut h);
    viewport.height.hash(&mut h);
    h.finish()
}
