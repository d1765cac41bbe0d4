//! The two-sided field abilities operate on.
//!
//! An `Arena` owns the unit lists for both sides plus borrowed access to the
//! registry, the RNG and (in the shop) the shop collaborator. Every handler
//! receives `&mut Arena`.
//!
//! ## Modes
//!
//! - **Battle**: variable-length lists without placeholders. Fainted units
//!   are removed. Side B is the opponent.
//! - **Shop**: side A is the fixed five-slot roster with placeholders.
//!   Fainted units are replaced by a placeholder. Side B is empty.
//!
//! Units are given fresh `UnitId`s when they enter an arena.

use crate::core::{BattleRng, Side, Sides, UnitId, UnitIdAllocator};
use crate::effects::targeting;
use crate::shop::ShopHooks;
use crate::triggers::AbilityRegistry;
use crate::units::Unit;

/// How the arena treats removals and placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Shop,
    Battle,
}

/// Mutable field for one battle or one shop turn.
pub struct Arena<'a> {
    pub(crate) registry: &'a AbilityRegistry,
    pub(crate) rng: &'a mut BattleRng,
    shop: Option<&'a mut (dyn ShopHooks + 'a)>,
    pub(crate) sides: Sides<Vec<Unit>>,
    mode: Mode,
    capacity: usize,
    ids: UnitIdAllocator,
}

impl<'a> Arena<'a> {
    /// Arena for a battle between two live unit lists.
    ///
    /// Placeholders in the input are dropped.
    pub fn battle(
        registry: &'a AbilityRegistry,
        rng: &'a mut BattleRng,
        a: Vec<Unit>,
        b: Vec<Unit>,
        capacity: usize,
    ) -> Self {
        let mut arena = Self {
            registry,
            rng,
            shop: None,
            sides: Sides::default(),
            mode: Mode::Battle,
            capacity,
            ids: UnitIdAllocator::new(),
        };
        for (side, units) in [(Side::A, a), (Side::B, b)] {
            let tagged: Vec<Unit> = units
                .into_iter()
                .filter(|u| !u.is_placeholder())
                .map(|u| arena.tagged(u))
                .collect();
            arena.sides[side] = tagged;
        }
        arena
    }

    /// Arena for a shop turn over a fixed roster.
    pub fn shop(
        registry: &'a AbilityRegistry,
        rng: &'a mut BattleRng,
        hooks: &'a mut (dyn ShopHooks + 'a),
        slots: Vec<Unit>,
    ) -> Self {
        let capacity = slots.len();
        let mut arena = Self {
            registry,
            rng,
            shop: Some(hooks),
            sides: Sides::default(),
            mode: Mode::Shop,
            capacity,
            ids: UnitIdAllocator::new(),
        };
        let tagged: Vec<Unit> = slots.into_iter().map(|u| arena.tagged(u)).collect();
        arena.sides[Side::A] = tagged;
        arena
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Is this a battle arena?
    #[must_use]
    pub fn is_battle(&self) -> bool {
        self.mode == Mode::Battle
    }

    /// Maximum live units per side.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The ability registry.
    #[must_use]
    pub fn registry(&self) -> &'a AbilityRegistry {
        self.registry
    }

    /// The battle RNG.
    pub fn rng(&mut self) -> &mut BattleRng {
        self.rng
    }

    /// The shop collaborator, in shop mode.
    pub fn hooks(&mut self) -> Option<&mut (dyn ShopHooks + 'a)> {
        self.shop.as_deref_mut()
    }

    /// A side's units, rear to front (placeholders included in shop mode).
    #[must_use]
    pub fn units(&self, side: Side) -> &[Unit] {
        &self.sides[side]
    }

    /// Position of a unit.
    #[must_use]
    pub fn position(&self, side: Side, id: UnitId) -> Option<usize> {
        self.sides[side].iter().position(|u| u.id == id)
    }

    /// Look up a unit by id.
    #[must_use]
    pub fn unit(&self, side: Side, id: UnitId) -> Option<&Unit> {
        self.sides[side].iter().find(|u| u.id == id)
    }

    /// Look up a unit by id, mutably.
    pub fn unit_mut(&mut self, side: Side, id: UnitId) -> Option<&mut Unit> {
        self.sides[side].iter_mut().find(|u| u.id == id)
    }

    /// Number of non-placeholder units on a side.
    #[must_use]
    pub fn live_count(&self, side: Side) -> usize {
        targeting::occupied(&self.sides[side]).count()
    }

    /// Does a side have no units left?
    #[must_use]
    pub fn is_defeated(&self, side: Side) -> bool {
        self.live_count(side) == 0
    }

    /// Index of a side's frontmost unit.
    #[must_use]
    pub fn front(&self, side: Side) -> Option<usize> {
        targeting::frontmost(&self.sides[side])
    }

    /// Copies of a side's units, rear to front, without placeholders.
    ///
    /// "Every ally" events iterate this snapshot and skip units that have
    /// left the arena since it was taken.
    #[must_use]
    pub fn roll_call(&self, side: Side) -> Vec<Unit> {
        self.sides[side]
            .iter()
            .filter(|u| !u.is_placeholder())
            .cloned()
            .collect()
    }

    /// Add permanent stats to a unit if it is still present.
    pub fn buff(&mut self, side: Side, id: UnitId, attack: i32, health: i32) -> bool {
        match self.unit_mut(side, id) {
            Some(unit) => {
                unit.add_stats(attack, health);
                true
            }
            None => false,
        }
    }

    /// Up to `amount` random units of a side, excluding one.
    pub fn random_units(&mut self, side: Side, amount: usize, exclude: Option<UnitId>) -> Vec<UnitId> {
        targeting::random_units(self.rng, &self.sides[side], amount, exclude)
    }

    /// Consume the arena, returning both sides.
    #[must_use]
    pub fn into_sides(self) -> Sides<Vec<Unit>> {
        self.sides
    }

    /// Give a unit a fresh id.
    pub(crate) fn tagged(&mut self, mut unit: Unit) -> Unit {
        unit.id = self.ids.alloc();
        unit
    }
}

impl std::fmt::Debug for Arena<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("mode", &self.mode)
            .field("capacity", &self.capacity)
            .field("sides", &self.sides)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Species;

    #[test]
    fn test_battle_arena_strips_placeholders_and_tags() {
        let registry = AbilityRegistry::new();
        let mut rng = BattleRng::new(1);
        let arena = Arena::battle(
            &registry,
            &mut rng,
            vec![Unit::new(Species::Ant), Unit::placeholder(), Unit::new(Species::Fish)],
            vec![Unit::new(Species::Pig)],
            5,
        );

        assert_eq!(arena.units(Side::A).len(), 2);
        assert_eq!(arena.live_count(Side::B), 1);

        let ids: Vec<_> = arena
            .units(Side::A)
            .iter()
            .chain(arena.units(Side::B))
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![UnitId::new(1), UnitId::new(2), UnitId::new(3)]);
    }

    #[test]
    fn test_buff_missing_unit() {
        let registry = AbilityRegistry::new();
        let mut rng = BattleRng::new(1);
        let mut arena = Arena::battle(&registry, &mut rng, vec![Unit::new(Species::Ant)], vec![], 5);

        let id = arena.units(Side::A)[0].id;
        assert!(arena.buff(Side::A, id, 1, 1));
        assert!(!arena.buff(Side::B, id, 1, 1));
        assert_eq!(arena.units(Side::A)[0].attack, Species::Ant.base_stats().0 + 1);
    }
}
