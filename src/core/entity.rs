//! Unit identification.
//!
//! Units compare by value, so two 2/1 ducks on the same team are equal.
//! Handlers still need to find "this" unit again after the roster has been
//! shuffled by a faint or a spawn, which is what `UnitId` is for.
//!
//! ## ID Allocation
//!
//! IDs are assigned by the arena that owns the units:
//! - `UnitId::UNASSIGNED` (0) for units that have never entered an arena
//! - `1..` allocated sequentially when a roster is loaded or a unit spawns
//!
//! IDs are only unique within a single arena. They are not part of a unit's
//! value equality and carry no meaning once the arena is dropped.
//!
//! ```
//! use pet_battler::core::UnitId;
//!
//! let fresh = UnitId::UNASSIGNED;
//! assert!(!fresh.is_assigned());
//!
//! let id = UnitId::new(7);
//! assert!(id.is_assigned());
//! assert_eq!(id.next(), UnitId::new(8));
//! ```

use serde::{Deserialize, Serialize};

/// Arena-local identifier for a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// The id carried by units that have not been placed in an arena.
    pub const UNASSIGNED: UnitId = UnitId(0);

    /// Create a unit ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check whether an arena has assigned this ID.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }

    /// The ID following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for UnitId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// Sequential allocator for unit IDs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitIdAllocator {
    next: UnitId,
}

impl Default for UnitIdAllocator {
    fn default() -> Self {
        Self { next: UnitId(1) }
    }
}

impl UnitIdAllocator {
    /// Create an allocator starting at `UnitId(1)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next ID.
    pub fn alloc(&mut self) -> UnitId {
        let id = self.next;
        self.next = id.next();
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned() {
        assert!(!UnitId::UNASSIGNED.is_assigned());
        assert_eq!(UnitId::default(), UnitId::UNASSIGNED);
        assert!(UnitId(1).is_assigned());
    }

    #[test]
    fn test_allocator_is_sequential() {
        let mut ids = UnitIdAllocator::new();
        assert_eq!(ids.alloc(), UnitId(1));
        assert_eq!(ids.alloc(), UnitId(2));
        assert_eq!(ids.alloc(), UnitId(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", UnitId(42)), "Unit(42)");
    }
}
