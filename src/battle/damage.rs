//! Attacks, the damage path and the faint cascade.
//!
//! Every point of damage in the engine, from attacks and from abilities,
//! goes through [`Arena::damage`]:
//!
//! 1. the defender's held effect modifies the raw damage
//! 2. health is debited
//! 3. if nothing got through, stop: no hurt events
//! 4. `Hurt` on the defender, `FriendHurt` on its allies
//! 5. if health reached 0 (or the source holds a peanut): faint cascade,
//!    then `KnockOut` on the source
//!
//! The faint cascade removes the unit first and then tells everyone, passing
//! the pre-removal index explicitly.

use tracing::{debug, trace};

use crate::core::{Side, UnitId};
use crate::effects::{resolve_defense, resolve_offense, targeting, Effect};
use crate::triggers::{EventArgs, EventKind, FaintArgs};
use crate::units::{Species, Unit};

use super::arena::Mode;
use super::Arena;

impl Arena<'_> {
    /// `attacker` strikes the front of the opposing side.
    ///
    /// `attacker` is the snapshot taken at the start of the round. An
    /// attacker that fainted during the other side's exchange still strikes
    /// with it.
    pub fn attack(&mut self, side: Side, attacker: &Unit) {
        let enemy = side.opponent();
        let strike = resolve_offense(attacker.attack, attacker.effect);

        let mut source = attacker.clone();
        source.effect = strike.remaining;
        if let Some(live) = self.unit_mut(side, attacker.id) {
            live.effect = strike.remaining;
        }

        self.fire(side, &source, EventKind::BeforeAttack, &EventArgs::Combat);

        let team = self.units(side);
        if targeting::occupied(team).count() > 1 {
            if let Some(friend) = targeting::second_from_front(team).map(|i| team[i].clone()) {
                self.fire(side, &friend, EventKind::FriendAheadAttacks, &EventArgs::Combat);
            }
        }

        let Some(front) = self.front(enemy) else {
            return;
        };
        let defender = self.units(enemy)[front].id;
        let second = targeting::second_from_front(self.units(enemy)).map(|i| self.units(enemy)[i].id);

        trace!(%side, attacker = %source.species, damage = strike.damage, "attack");
        self.damage(enemy, defender, strike.damage, side, &source);

        if let (Some(splash), Some(second)) = (strike.splash, second) {
            if self.position(enemy, second).is_some() {
                self.damage(enemy, second, splash, side, &source);
            }
        }

        self.fire(side, &source, EventKind::AfterAttack, &EventArgs::Combat);
    }

    /// Deal `raw` damage to `target` on `side`, dealt by `source` of
    /// `source_side`. Returns the damage debited after effects.
    pub fn damage(
        &mut self,
        side: Side,
        target: UnitId,
        raw: i32,
        source_side: Side,
        source: &Unit,
    ) -> i32 {
        let Some(defender) = self.unit_mut(side, target) else {
            return 0;
        };

        let hit = resolve_defense(raw, defender.effect);
        defender.effect = hit.remaining;
        defender.take_damage(hit.damage);
        trace!(%side, defender = %defender.species, raw, damage = hit.damage, health = defender.health, "damage");

        if hit.damage == 0 {
            return 0;
        }

        let hurt = defender.clone();
        self.fire(side, &hurt, EventKind::Hurt, &EventArgs::Combat);

        for friend in self.roll_call(side) {
            if friend.id != target && self.position(side, friend.id).is_some() {
                self.fire(side, &friend, EventKind::FriendHurt, &EventArgs::Combat);
            }
        }

        let lethal = source.effect.is_some_and(Effect::is_lethal);
        if let Some(index) = self.position(side, target) {
            if self.units(side)[index].health <= 0 || lethal {
                self.faint(side, index);
                self.fire(source_side, source, EventKind::KnockOut, &EventArgs::Combat);
            }
        }

        hit.damage
    }

    /// Remove the unit at `index` and run the faint cascade.
    ///
    /// Returns the fainted unit.
    pub fn faint(&mut self, side: Side, index: usize) -> Unit {
        let fainted = match self.mode() {
            Mode::Battle => self.sides[side].remove(index),
            Mode::Shop => std::mem::replace(&mut self.sides[side][index], Unit::placeholder()),
        };
        debug!(%side, species = %fainted.species, index, "faint");

        let args = EventArgs::Faint(FaintArgs {
            index,
            fainted: fainted.clone(),
        });
        self.fire(side, &fainted, EventKind::Faint, &args);

        for friend in self.roll_call(side) {
            if self.position(side, friend.id).is_some() {
                self.fire(side, &friend, EventKind::FriendFaints, &args);
            }
        }

        if let Some(behind) = index.checked_sub(1).and_then(|i| self.units(side).get(i)) {
            if !behind.is_placeholder() {
                let behind = behind.clone();
                self.fire(side, &behind, EventKind::FriendAheadFaints, &EventArgs::Combat);
            }
        }

        match fainted.effect {
            Some(Effect::Mushroom) => {
                self.spawn(side, Unit::with_stats(fainted.species, 1, 1), index);
            }
            Some(Effect::Bee) => {
                self.spawn(side, Unit::with_stats(Species::Bee, 1, 1), index);
            }
            _ => {}
        }

        fainted
    }

    /// Lower a unit's health without dealing damage.
    ///
    /// Held effects are ignored, no events fire, and health never drops
    /// below 1.
    pub fn drain(&mut self, side: Side, target: UnitId, amount: i32) {
        if let Some(unit) = self.unit_mut(side, target) {
            let floor = unit.health.min(1);
            unit.set_health((unit.health - amount).max(floor));
        }
    }
}
