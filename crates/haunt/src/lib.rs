//! Cursor-following ghost plus a small swarm of wandering ghosts.

pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod error;
pub mod follower;
pub mod ghost;
pub mod pool;
pub mod spawner;
pub mod stage;
pub mod viewport;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;

use config::HauntConfig;
use error::HauntError;
use follower::Follower;
use ghost::Ghost;
use pool::{GhostId, GhostPool};
use spawner::Spawner;
use stage::{NullStage, Stage};
use viewport::Viewport;

/// What one frame did.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct FrameReport {
    pub spawned: usize,
    pub stepped: usize,
}

/// Owns the follower, the ghost pool and the clock that fills it.
#[derive(Debug)]
pub struct Haunt {
    config: HauntConfig,
    viewport: Viewport,
    follower: Follower,
    pool: GhostPool,
    spawner: Spawner,
    rng: ChaCha8Rng,
}

impl Haunt {
    pub fn new(config: HauntConfig, viewport: Viewport, seed: u64) -> Result<Self, HauntError> {
        config.validate()?;
        Ok(Self {
            pool: GhostPool::with_capacity(config.max_ghosts),
            spawner: Spawner::new(config.spawn_interval_ms),
            viewport,
            follower: Follower::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &HauntConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn follower(&self) -> Follower {
        self.follower
    }

    #[must_use]
    pub fn pool(&self) -> &GhostPool {
        &self.pool
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64, stage: &mut impl Stage) {
        self.follower.pointer_moved(x, y);
        let (x, y) = self.follower.position();
        stage.place_follower(x, y);
    }

    /// Later spawns and reflections use the new bounds; nobody is moved.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!(
            "viewport resized to {}x{}",
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
    }

    /// One spawn tick: add a ghost if the pool has room.
    pub fn spawn_tick(&mut self, stage: &mut impl Stage) -> Option<GhostId> {
        if self.pool.is_full() {
            return None;
        }
        let ghost = Ghost::spawn(&self.viewport, self.config.speed, &mut self.rng);
        let id = self.pool.insert(ghost)?;
        log::debug!(
            "spawned ghost {}:{} at ({:.1}, {:.1}), {} live",
            id.index,
            id.generation,
            ghost.x,
            ghost.y,
            self.pool.len()
        );
        stage.ghost_spawned(id, ghost.x, ghost.y);
        Some(id)
    }

    /// Advance the spawn clock by `dt_ms`, then step every live ghost once.
    pub fn frame(&mut self, dt_ms: f64, stage: &mut impl Stage) -> FrameReport {
        let mut report = FrameReport::default();
        // Ticks beyond the free slots could never spawn anything.
        let due = self.spawner.advance(dt_ms) as usize;
        for _ in 0..due.min(self.pool.free_slots()) {
            if self.spawn_tick(stage).is_some() {
                report.spawned += 1;
            }
        }

        let jitter = self.config.heading_jitter;
        let viewport = self.viewport;
        for (id, ghost) in self.pool.iter_mut() {
            let delta = ghost::sample_delta(&mut self.rng, jitter);
            let bounce = ghost.step(&viewport, delta);
            if bounce.any() {
                log::trace!(
                    "ghost {}:{} bounced at ({:.1}, {:.1}), horizontal={} vertical={}",
                    id.index,
                    id.generation,
                    ghost.x,
                    ghost.y,
                    bounce.horizontal,
                    bounce.vertical
                );
            }
            stage.place_ghost(id, ghost.x, ghost.y);
            report.stepped += 1;
        }
        report
    }

    /// Remove one ghost. Its slot is refilled on a later spawn tick.
    pub fn retire(&mut self, id: GhostId, stage: &mut impl Stage) -> Option<Ghost> {
        let ghost = self.pool.remove(id)?;
        log::debug!("retired ghost {}:{}", id.index, id.generation);
        stage.ghost_retired(id);
        Some(ghost)
    }

    /// Retire every ghost and restart the spawn clock.
    pub fn clear(&mut self, stage: &mut impl Stage) {
        for id in self.pool.ids() {
            self.retire(id, stage);
        }
        self.spawner.reset();
    }
}

/// JS-facing handle for hosts that draw the ghosts themselves.
#[wasm_bindgen]
#[derive(Debug)]
pub struct GhostField {
    haunt: Haunt,
}

#[wasm_bindgen]
impl GhostField {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, seed: u64) -> Result<GhostField, JsValue> {
        let viewport = Viewport::new(width, height)?;
        let haunt = Haunt::new(HauntConfig::default(), viewport, seed)?;
        Ok(Self { haunt })
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.haunt.pointer_moved(x, y, &mut NullStage);
    }

    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.haunt.resize(Viewport::new(width, height)?);
        Ok(())
    }

    /// Returns the number of ghosts spawned during this frame.
    pub fn frame(&mut self, dt_ms: f64) -> usize {
        self.haunt.frame(dt_ms, &mut NullStage).spawned
    }

    pub fn clear(&mut self) {
        self.haunt.clear(&mut NullStage);
    }

    #[must_use]
    pub fn ghost_count(&self) -> usize {
        self.haunt.pool().len()
    }

    #[must_use]
    pub fn follower_x(&self) -> f64 {
        self.haunt.follower().x
    }

    #[must_use]
    pub fn follower_y(&self) -> f64 {
        self.haunt.follower().y
    }

    /// Flattened `[x0, y0, x1, y1, ...]` in pool order.
    #[must_use]
    pub fn positions(&self) -> Vec<f64> {
        self.haunt
            .pool()
            .iter()
            .flat_map(|(_, g)| [g.x, g.y])
            .collect()
    }
}
