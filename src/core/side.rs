//! Battle sides and per-side data storage.
//!
//! ## Side
//!
//! A battle is always fought between exactly two sides. `Side::A` is the
//! roster passed first to the engine ("self" when reporting the outcome).
//!
//! ## Sides
//!
//! Fixed two-entry storage indexable by `Side`, used for the live unit lists
//! and anything else tracked per side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    /// The first roster given to the engine.
    A,
    /// The second roster given to the engine.
    B,
}

impl Side {
    /// Both sides in resolution order.
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Storage index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "Side A"),
            Side::B => write!(f, "Side B"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ```
/// use pet_battler::core::{Side, Sides};
///
/// let mut hits: Sides<u32> = Sides::with_default();
/// hits[Side::B] += 3;
///
/// assert_eq!(hits[Side::A], 0);
/// assert_eq!(hits[Side::B], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sides<T> {
    data: [T; 2],
}

impl<T> Sides<T> {
    /// Create from explicit values for side A and side B.
    pub fn new(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::default()
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }

    /// Consume into a `(a, b)` tuple.
    pub fn into_pair(self) -> (T, T) {
        let [a, b] = self.data;
        (a, b)
    }
}

impl<T> Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
        assert_eq!(Side::A.opponent().opponent(), Side::A);
    }

    #[test]
    fn test_sides_indexing() {
        let mut sides = Sides::new(vec![1], vec![2, 3]);
        sides[Side::A].push(4);

        assert_eq!(sides[Side::A], vec![1, 4]);
        assert_eq!(sides[Side::B].len(), 2);
    }

    #[test]
    fn test_sides_iter_order() {
        let sides = Sides::new("a", "b");
        let pairs: Vec<_> = sides.iter().collect();
        assert_eq!(pairs, vec![(Side::A, &"a"), (Side::B, &"b")]);
    }
}
