//! The shop-phase driver.
//!
//! `ShopPhase` owns a team's roster between battles together with the shop
//! collaborator and an RNG. Each operation opens a shop-mode [`Arena`] over
//! the roster, runs the move and its ability cascade, and writes the roster
//! back.
//!
//! ## Turn structure
//!
//! ```text
//! start_turn ─▶ buy / sell / merge / feed / reorder ... ─▶ end_turn ─▶ battle ─▶ record_battle
//! ```
//!
//! ```
//! use pet_battler::core::BattleRng;
//! use pet_battler::shop::{ShopLedger, ShopPhase};
//! use pet_battler::triggers::AbilityRegistry;
//! use pet_battler::units::{Roster, Species, Unit};
//!
//! let registry = AbilityRegistry::standard().unwrap();
//! let mut shop = ShopPhase::new(&registry, Roster::new(), ShopLedger::new(10), BattleRng::new(3));
//!
//! shop.start_turn();
//! shop.buy(Unit::new(Species::Pig), 0).unwrap();
//! shop.sell(0);
//!
//! // one gold for selling a level-1 unit, one more from the pig
//! assert_eq!(shop.hooks().gold, 12);
//! ```

use tracing::debug;

use crate::battle::{Arena, BattleOutcome};
use crate::core::{BattleRng, Side, UnitId};
use crate::triggers::{
    AbilityRegistry, EventArgs, EventKind, FaintArgs, Shape, ShopArgs, SummonArgs,
};
use crate::units::{Roster, Unit};

use super::{Food, ShopHooks};

/// A team's shop turn.
pub struct ShopPhase<'r, H: ShopHooks> {
    registry: &'r AbilityRegistry,
    roster: Roster,
    hooks: H,
    rng: BattleRng,
    last_battle: Option<BattleOutcome>,
}

impl<'r, H: ShopHooks> ShopPhase<'r, H> {
    /// Create a driver over a roster.
    pub fn new(registry: &'r AbilityRegistry, roster: Roster, hooks: H, rng: BattleRng) -> Self {
        Self {
            registry,
            roster,
            hooks,
            rng,
            last_battle: None,
        }
    }

    /// The roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The shop collaborator.
    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// The shop collaborator, mutably.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Outcome of the previous battle, if there was one.
    #[must_use]
    pub fn last_battle(&self) -> Option<BattleOutcome> {
        self.last_battle
    }

    /// Remember a battle result for `EndTurn` abilities.
    pub fn record_battle(&mut self, outcome: BattleOutcome) {
        self.last_battle = Some(outcome);
    }

    /// Consume into roster and collaborator.
    pub fn into_parts(self) -> (Roster, H) {
        (self.roster, self.hooks)
    }

    /// Fire `kind` on the unit in `slot` with default arguments.
    ///
    /// Faint events get the slot as index; summon events name the unit
    /// itself. Empty slots are ignored.
    pub fn fire(&mut self, slot: usize, kind: EventKind) {
        let last_battle = self.last_battle;
        self.with_arena(|arena| {
            let Some(unit) = arena.units(Side::A).get(slot).cloned() else {
                return;
            };
            if unit.is_placeholder() {
                return;
            }
            let args = match kind.shape() {
                Shape::Shop => EventArgs::Shop(ShopArgs::default()),
                Shape::EndTurn => EventArgs::EndTurn(last_battle),
                Shape::Combat => EventArgs::Combat,
                Shape::Faint => EventArgs::Faint(FaintArgs {
                    index: slot,
                    fainted: unit.clone(),
                }),
                Shape::Summon => EventArgs::Summon(SummonArgs { summoned: unit.id }),
            };
            arena.fire(Side::A, &unit, kind, &args);
        });
    }

    /// Start a turn: reset turn counters, drop boosts, fire `TurnStart`.
    pub fn start_turn(&mut self) {
        for unit in self.roster.as_mut_slice() {
            unit.counters.reset_turn();
            unit.clear_boost();
        }
        self.fire_all(EventKind::TurnStart, EventArgs::shop());
    }

    /// End a turn: fire `EndTurn` with the previous battle's outcome.
    pub fn end_turn(&mut self) {
        self.fire_all(EventKind::EndTurn, EventArgs::EndTurn(self.last_battle));
    }

    /// Place a bought unit near `slot`.
    ///
    /// Fires `FriendSummoned`, then `Buy` on the unit, then `FriendBought` on
    /// the rest of the team. Returns the slot the unit ended up in, or
    /// `None` if the team was full.
    pub fn buy(&mut self, unit: Unit, slot: usize) -> Option<usize> {
        debug!(species = %unit.species, slot, "buy");
        self.with_arena(|arena| {
            let id = arena.spawn(Side::A, unit, slot)?;
            if let Some(bought) = arena.unit(Side::A, id).cloned() {
                arena.fire(Side::A, &bought, EventKind::Buy, &EventArgs::shop());
            }

            let args = EventArgs::with_friend(id);
            for friend in arena.roll_call(Side::A) {
                if friend.id != id && arena.position(Side::A, friend.id).is_some() {
                    arena.fire(Side::A, &friend, EventKind::FriendBought, &args);
                }
            }
            arena.position(Side::A, id)
        })
    }

    /// Sell the unit in `slot` for gold equal to its level.
    ///
    /// The unit leaves the roster before its `Sell` abilities run.
    pub fn sell(&mut self, slot: usize) -> Option<Unit> {
        if self.roster.get(slot).map_or(true, Unit::is_placeholder) {
            return None;
        }
        let sold = self.roster.clear(slot);
        debug!(species = %sold.species, slot, "sell");
        self.hooks.add_gold(i32::from(sold.level()));

        // Stale roster ids would alias units of the next arena.
        let mut snapshot = sold.clone();
        snapshot.id = UnitId::UNASSIGNED;
        self.with_arena(|arena| {
            arena.fire(Side::A, &snapshot, EventKind::Sell, &EventArgs::shop());
        });
        Some(sold)
    }

    /// Merge the unit in `from` into the unit in `onto`.
    ///
    /// Returns `true` if the merged unit leveled up, in which case its
    /// `LevelUp` abilities fire and the shop is asked for a linked offer.
    ///
    /// # Panics
    ///
    /// Panics if the slots hold different species or an empty slot.
    pub fn merge(&mut self, from: usize, onto: usize) -> bool {
        assert_ne!(from, onto, "cannot merge a unit into itself");
        assert!(
            !self.roster[from].is_placeholder()
                && self.roster[from].species == self.roster[onto].species,
            "merge needs two units of the same species"
        );

        let absorbed = self.roster.clear(from);
        let leveled = self.roster[onto].combine(absorbed);
        debug!(species = %self.roster[onto].species, leveled, "merge");

        if leveled {
            self.with_arena(|arena| {
                let id = arena.units(Side::A)[onto].id;
                arena.level_up(id);
            });
        }
        leveled
    }

    /// Feed a food to the unit in `slot`.
    ///
    /// Global foods ignore the slot.
    pub fn feed(&mut self, slot: usize, food: Food) {
        self.with_arena(|arena| {
            if food.is_global() {
                arena.serve(food);
                return;
            }
            if let Some(unit) = arena.units(Side::A).get(slot) {
                if !unit.is_placeholder() {
                    let id = unit.id;
                    arena.feed(id, food);
                }
            }
        });
    }

    /// Move the unit in `from` to `to`, shifting the units in between.
    pub fn reorder(&mut self, from: usize, to: usize) {
        let mut slots = std::mem::take(&mut self.roster).into_slots();
        let unit = slots.remove(from);
        slots.insert(to, unit);
        self.roster = Roster::from_slots(slots);
    }

    fn fire_all(&mut self, kind: EventKind, args: EventArgs) {
        self.with_arena(|arena| {
            for unit in arena.roll_call(Side::A) {
                if arena.position(Side::A, unit.id).is_some() {
                    arena.fire(Side::A, &unit, kind, &args);
                }
            }
        });
    }

    fn with_arena<R>(&mut self, f: impl FnOnce(&mut Arena<'_>) -> R) -> R {
        let slots = std::mem::take(&mut self.roster).into_slots();
        let mut arena = Arena::shop(self.registry, &mut self.rng, &mut self.hooks, slots);
        let out = f(&mut arena);
        let (team, _) = arena.into_sides().into_pair();
        self.roster = Roster::from_slots(team);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::ShopLedger;
    use crate::units::Species;

    fn phase(registry: &AbilityRegistry, units: Vec<Unit>) -> ShopPhase<'_, ShopLedger> {
        ShopPhase::new(registry, Roster::from_units(units), ShopLedger::new(0), BattleRng::new(1))
    }

    #[test]
    fn test_reorder() {
        let registry = AbilityRegistry::standard().unwrap();
        let mut shop = phase(
            &registry,
            vec![Unit::new(Species::Ant), Unit::new(Species::Duck), Unit::new(Species::Fish)],
        );

        shop.reorder(0, 2);
        let species: Vec<_> = shop.roster().as_slice().iter().map(|u| u.species).collect();
        assert_eq!(
            species,
            vec![Species::Duck, Species::Fish, Species::Ant, Species::None, Species::None]
        );
    }

    #[test]
    fn test_sell_empty_slot() {
        let registry = AbilityRegistry::standard().unwrap();
        let mut shop = phase(&registry, vec![]);
        assert!(shop.sell(0).is_none());
        assert_eq!(shop.hooks().gold, 0);
    }

    #[test]
    fn test_merge_levels_up_and_links() {
        let registry = AbilityRegistry::standard().unwrap();
        let mut shop = phase(
            &registry,
            vec![Unit::new(Species::Pig).with_experience(2), Unit::new(Species::Pig)],
        );

        assert!(shop.merge(1, 0));
        assert_eq!(shop.roster()[0].level(), 2);
        assert!(shop.roster()[1].is_placeholder());
        assert_eq!(shop.hooks().linked_offers, 1);
    }

    #[test]
    #[should_panic(expected = "same species")]
    fn test_merge_different_species_panics() {
        let registry = AbilityRegistry::standard().unwrap();
        let mut shop = phase(&registry, vec![Unit::new(Species::Pig), Unit::new(Species::Ant)]);
        shop.merge(1, 0);
    }

    #[test]
    fn test_start_turn_clears_boosts_and_turn_counters() {
        let registry = AbilityRegistry::standard().unwrap();
        let mut rabbit = Unit::new(Species::Rabbit);
        rabbit.counters.rabbit_buffs_this_turn = 4;
        rabbit.add_boost(3, 3);
        let mut shop = phase(&registry, vec![rabbit]);

        shop.start_turn();
        assert_eq!(shop.roster()[0].counters.rabbit_buffs_this_turn, 0);
        assert_eq!(shop.roster()[0].boost_attack, 0);
    }
}
