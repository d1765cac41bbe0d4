//! Spawn placement.
//!
//! New units (summons, faint leftovers, bought units) enter a side through
//! [`Arena::spawn`]. A side already holding `capacity` live units drops the
//! spawn.
//!
//! In battle the unit is inserted at the target index, clamped to the list
//! length. In the shop the roster has fixed slots:
//!
//! 1. an empty target slot is filled directly
//! 2. otherwise the nearest empty slot to the left is found, the units
//!    between it and the target shift one step left, and the unit goes in
//!    at the target
//! 3. otherwise the same to the right, shifting right
//!
//! Afterwards every other unit on the side sees `FriendSummoned`.

use tracing::{debug, warn};

use crate::core::{Side, UnitId};
use crate::triggers::{EventArgs, EventKind, SummonArgs};
use crate::units::Unit;

use super::arena::Mode;
use super::Arena;

impl Arena<'_> {
    /// Place `unit` on `side` near `index`.
    ///
    /// Returns the id it was given, or `None` if the side was full.
    ///
    /// # Panics
    ///
    /// Panics in shop mode if the roster has no empty slot even though the
    /// live count is under capacity.
    pub fn spawn(&mut self, side: Side, unit: Unit, index: usize) -> Option<UnitId> {
        if self.live_count(side) >= self.capacity() {
            warn!(%side, species = %unit.species, "side full, spawn dropped");
            return None;
        }

        let unit = self.tagged(unit);
        let id = unit.id;
        debug!(%side, species = %unit.species, index, "spawn");

        match self.mode() {
            Mode::Battle => {
                let slots = &mut self.sides[side];
                let index = index.min(slots.len());
                slots.insert(index, unit);
            }
            Mode::Shop => place_in_slots(&mut self.sides[side], unit, index),
        }

        let args = EventArgs::Summon(SummonArgs { summoned: id });
        for friend in self.roll_call(side) {
            if friend.id != id && self.position(side, friend.id).is_some() {
                self.fire(side, &friend, EventKind::FriendSummoned, &args);
            }
        }

        Some(id)
    }
}

fn place_in_slots(slots: &mut Vec<Unit>, unit: Unit, index: usize) {
    let index = index.min(slots.len().saturating_sub(1));

    if slots[index].is_placeholder() {
        slots[index] = unit;
        return;
    }

    let free = (0..index)
        .rev()
        .find(|&i| slots[i].is_placeholder())
        .or_else(|| (index + 1..slots.len()).find(|&i| slots[i].is_placeholder()));

    let Some(free) = free else {
        panic!("no empty slot for a spawn with {} live units", slots.len());
    };

    // Removing the free slot shifts the block between it and the target by
    // one toward it; the target position is then open for insertion.
    slots.remove(free);
    slots.insert(index, unit);
}
