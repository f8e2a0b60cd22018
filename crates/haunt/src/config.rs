//! Tunables for the follower and the ghost swarm.

use crate::error::HauntError;

/// Most ghosts alive at once.
pub const MAX_GHOSTS: usize = 5;

/// Milliseconds between spawn attempts.
pub const SPAWN_INTERVAL_MS: f64 = 2000.0;

/// Pixels travelled per step.
pub const GHOST_SPEED: f64 = 2.0;

/// Total width of the per-step heading perturbation, in radians.
/// Each step draws from `[-JITTER / 2, JITTER / 2]`.
pub const HEADING_JITTER: f64 = 0.1;

pub const GHOST_GLYPH: &str = "\u{1F47B}";
pub const GHOST_CLASS: &str = "ghost";
pub const FOLLOWER_ID: &str = "ghost";

#[derive(Clone, Debug, PartialEq)]
pub struct HauntConfig {
    pub max_ghosts: usize,
    pub spawn_interval_ms: f64,
    pub speed: f64,
    pub heading_jitter: f64,
    pub glyph: String,
    pub class_name: String,
    pub follower_id: String,
}

impl Default for HauntConfig {
    fn default() -> Self {
        Self {
            max_ghosts: MAX_GHOSTS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            speed: GHOST_SPEED,
            heading_jitter: HEADING_JITTER,
            glyph: GHOST_GLYPH.into(),
            class_name: GHOST_CLASS.into(),
            follower_id: FOLLOWER_ID.into(),
        }
    }
}

impl HauntConfig {
    /// Reject values the frame loop cannot make sense of.
    pub fn validate(&self) -> Result<(), HauntError> {
        if self.max_ghosts == 0 {
            return Err(HauntError::invalid("max_ghosts", "must be at least 1"));
        }
        if !self.spawn_interval_ms.is_finite() || self.spawn_interval_ms <= 0.0 {
            return Err(HauntError::invalid(
                "spawn_interval_ms",
                "must be finite and positive",
            ));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(HauntError::invalid("speed", "must be finite and non-negative"));
        }
        if !self.heading_jitter.is_finite() || self.heading_jitter < 0.0 {
            return Err(HauntError::invalid(
                "heading_jitter",
                "must be finite and non-negative",
            ));
        }
        Ok(())
    }
}
