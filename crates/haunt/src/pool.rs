//! Fixed-capacity arena holding the live ghosts.
//!
//! Slots are allocated lowest-index first. Retiring a ghost frees its slot
//! and bumps the slot generation, so an old `GhostId` never resolves to the
//! ghost that later reuses the slot.

use crate::ghost::Ghost;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GhostId {
    pub index: u32,
    pub generation: u32,
}

#[derive(Clone, Debug, Default)]
struct Slot {
    generation: u32,
    ghost: Option<Ghost>,
}

#[derive(Clone, Debug)]
pub struct GhostPool {
    slots: Vec<Slot>,
    live: usize,
}

impl GhostPool {
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            slots: vec![Slot::default(); cap],
            live: 0,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.free_slots() == 0
    }

    #[must_use]
    pub fn free_slots(&self) -> usize {
        self.capacity().saturating_sub(self.live)
    }

    /// Place `ghost` in the first free slot. `None` when the pool is full.
    pub fn insert(&mut self, ghost: Ghost) -> Option<GhostId> {
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.ghost.is_none())?;
        slot.ghost = Some(ghost);
        self.live += 1;
        Some(GhostId {
            index: index as u32,
            generation: slot.generation,
        })
    }

    /// Free the slot behind `id`. Stale or unknown ids return `None`.
    pub fn remove(&mut self, id: GhostId) -> Option<Ghost> {
        let slot = self.slot_mut(id)?;
        let ghost = slot.ghost.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.live -= 1;
        Some(ghost)
    }

    #[must_use]
    pub fn get(&self, id: GhostId) -> Option<&Ghost> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.ghost.as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GhostId, &Ghost)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.ghost.as_ref().map(|ghost| {
                (
                    GhostId {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    ghost,
                )
            })
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (GhostId, &mut Ghost)> {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let generation = slot.generation;
            slot.ghost.as_mut().map(|ghost| {
                (
                    GhostId {
                        index: index as u32,
                        generation,
                    },
                    ghost,
                )
            })
        })
    }

    /// Ids of every live ghost, in slot order.
    #[must_use]
    pub fn ids(&self) -> Vec<GhostId> {
        self.iter().map(|(id, _)| id).collect()
    }

    fn slot_mut(&mut self, id: GhostId) -> Option<&mut Slot> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        Some(slot)
    }
}
