//! Fixed-capacity shop rosters.
//!
//! Between battles a team is a row of `MAX_TEAM_SIZE` slots. Empty slots
//! hold a placeholder unit (`Species::None`) so positions are stable while
//! the player rearranges the team. The battle engine strips placeholders
//! when it clones a roster into an arena.
//!
//! Rosters encode to a compact `bincode` blob for opponent storage.
//!
//! ```
//! use pet_battler::units::{Roster, Species, Unit};
//!
//! let roster = Roster::from_units([Unit::new(Species::Ant), Unit::new(Species::Fish)]);
//! assert_eq!(roster.len(), 2);
//! assert!(roster[4].is_placeholder());
//!
//! let bytes = roster.encode().unwrap();
//! assert_eq!(Roster::decode(&bytes).unwrap(), roster);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::core::config::MAX_TEAM_SIZE;
use crate::core::CodecError;

use super::Unit;

/// A team of units in fixed slots, rear (0) to front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    slots: Vec<Unit>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// An empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: (0..MAX_TEAM_SIZE).map(|_| Unit::placeholder()).collect(),
        }
    }

    /// Fill slots from the rear with the given units.
    ///
    /// # Panics
    ///
    /// Panics if more than `MAX_TEAM_SIZE` units are given.
    #[must_use]
    pub fn from_units(units: impl IntoIterator<Item = Unit>) -> Self {
        let mut roster = Self::new();
        for (slot, unit) in units.into_iter().enumerate() {
            assert!(slot < MAX_TEAM_SIZE, "roster holds at most {MAX_TEAM_SIZE} units");
            roster.slots[slot] = unit;
        }
        roster
    }

    /// Wrap exactly `MAX_TEAM_SIZE` slots.
    ///
    /// # Panics
    ///
    /// Panics if the slot count is wrong.
    #[must_use]
    pub fn from_slots(slots: Vec<Unit>) -> Self {
        assert_eq!(slots.len(), MAX_TEAM_SIZE, "roster slot count");
        Self { slots }
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units().count()
    }

    /// Are all slots empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a slot.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Unit> {
        self.slots.get(slot)
    }

    /// Get a mutable slot.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Unit> {
        self.slots.get_mut(slot)
    }

    /// Put a unit in a slot, returning what was there.
    pub fn set(&mut self, slot: usize, unit: Unit) -> Unit {
        std::mem::replace(&mut self.slots[slot], unit)
    }

    /// Empty a slot, returning what was there.
    pub fn clear(&mut self, slot: usize) -> Unit {
        self.set(slot, Unit::placeholder())
    }

    /// The rearmost empty slot.
    #[must_use]
    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(Unit::is_placeholder)
    }

    /// Occupied slots, rear to front.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.slots.iter().filter(|u| !u.is_placeholder())
    }

    /// All slots including placeholders.
    #[must_use]
    pub fn as_slice(&self) -> &[Unit] {
        &self.slots
    }

    /// All slots including placeholders, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [Unit] {
        &mut self.slots
    }

    /// Consume into the slot vector.
    #[must_use]
    pub fn into_slots(self) -> Vec<Unit> {
        self.slots
    }

    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        Ok(bincode::serialize(&self.slots)?)
    }

    /// Decode from bytes produced by [`Roster::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let slots: Vec<Unit> = bincode::deserialize(bytes)?;
        if slots.len() != MAX_TEAM_SIZE {
            return Err(CodecError::WrongSize {
                found: slots.len(),
                expected: MAX_TEAM_SIZE,
            });
        }
        Ok(Self { slots })
    }
}

impl Index<usize> for Roster {
    type Output = Unit;

    fn index(&self, slot: usize) -> &Self::Output {
        &self.slots[slot]
    }
}

impl IndexMut<usize> for Roster {
    fn index_mut(&mut self, slot: usize) -> &mut Self::Output {
        &mut self.slots[slot]
    }
}
