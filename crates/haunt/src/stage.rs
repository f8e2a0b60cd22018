//! Presentation seam between the simulation and whatever draws it.

use crate::pool::GhostId;

/// Receives position updates. Implementations swallow their own failures.
pub trait Stage {
    fn place_follower(&mut self, x: f64, y: f64);
    fn ghost_spawned(&mut self, id: GhostId, x: f64, y: f64);
    fn place_ghost(&mut self, id: GhostId, x: f64, y: f64);
    fn ghost_retired(&mut self, id: GhostId);
}

/// Stage that draws nothing.
#[derive(Debug, Default)]
pub struct NullStage;

impl Stage for NullStage {
    fn place_follower(&mut self, _x: f64, _y: f64) {}
    fn ghost_spawned(&mut self, _id: GhostId, _x: f64, _y: f64) {}
    fn place_ghost(&mut self, _id: GhostId, _x: f64, _y: f64) {}
    fn ghost_retired(&mut self, _id: GhostId) {}
}

#[cfg(test)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum StageEvent {
    Follower(f64, f64),
    Spawned(GhostId, f64, f64),
    Moved(GhostId, f64, f64),
    Retired(GhostId),
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingStage {
    pub events: Vec<StageEvent>,
}

#[cfg(test)]
impl RecordingStage {
    pub fn spawned(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, StageEvent::Spawned(..)))
            .count()
    }

    pub fn moves_of(&self, id: GhostId) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, StageEvent::Moved(i, ..) if *i == id))
            .count()
    }
}

#[cfg(test)]
impl Stage for RecordingStage {
    fn place_follower(&mut self, x: f64, y: f64) {
        self.events.push(StageEvent::Follower(x, y));
    }

    fn ghost_spawned(&mut self, id: GhostId, x: f64, y: f64) {
        self.events.push(StageEvent::Spawned(id, x, y));
    }

    fn place_ghost(&mut self, id: GhostId, x: f64, y: f64) {
        self.events.push(StageEvent::Moved(id, x, y));
    }

    fn ghost_retired(&mut self, id: GhostId) {
        self.events.push(StageEvent::Retired(id));
    }
}
