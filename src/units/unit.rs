//! Units - runtime combat entities.
//!
//! `Unit` is a value type: attack, health, experience, the held effect, the
//! transient boost, ability counters and the ability bindings. Two units
//! with the same values compare equal regardless of their `id`, which only
//! locates a unit inside an arena.
//!
//! ## Stats
//!
//! Attack and health are clamped to `[MIN, MAX]` on every change. Damage is
//! the one exception on the way down: it saturates health at 0 and the
//! faint cascade takes over from there.
//!
//! ## Experience
//!
//! | experience | level |
//! |---|---|
//! | 1-2 | 1 |
//! | 3-5 | 2 |
//! | 6 | 3 |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::{
    MAX_ATTACK, MAX_EXPERIENCE, MAX_HEALTH, MIN_ATTACK, MIN_EXPERIENCE, MIN_HEALTH,
};
use crate::core::UnitId;
use crate::effects::Effect;
use crate::triggers::Binding;

use super::{AbilityCounters, Species};

/// Inline capacity for bindings. No species binds more than two events.
pub type Bindings = SmallVec<[Binding; 4]>;

/// A combat unit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Unit {
    /// Arena-local id. Not part of value equality.
    #[serde(skip)]
    pub id: UnitId,

    /// What this unit is.
    pub species: Species,

    /// Current attack.
    pub attack: i32,

    /// Current health.
    pub health: i32,

    /// Experience, 1-6.
    pub experience: u8,

    /// The single held effect, if any.
    pub effect: Option<Effect>,

    /// Attack added when the unit is cloned into a battle.
    pub boost_attack: i32,

    /// Health added when the unit is cloned into a battle.
    pub boost_health: i32,

    /// Rate-limit bookkeeping for abilities.
    #[serde(default)]
    pub counters: AbilityCounters,

    /// Event bindings, invoked in order.
    pub bindings: Bindings,
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.species == other.species
            && self.attack == other.attack
            && self.health == other.health
            && self.experience == other.experience
            && self.effect == other.effect
            && self.boost_attack == other.boost_attack
            && self.boost_health == other.boost_health
            && self.counters == other.counters
            && self.bindings == other.bindings
    }
}

impl Eq for Unit {}

impl Unit {
    /// Create a level-1 unit with its species' base stats and abilities.
    ///
    /// Scorpions are created holding a peanut.
    #[must_use]
    pub fn new(species: Species) -> Self {
        let (attack, health) = species.base_stats();
        Self::with_stats(species, attack, health)
    }

    /// Create a level-1 unit with explicit stats.
    ///
    /// ```
    /// use pet_battler::units::{Species, Unit};
    ///
    /// let ant = Unit::with_stats(Species::Ant, 7, 80);
    /// assert_eq!(ant.attack, 7);
    /// assert_eq!(ant.health, 50); // clamped
    /// assert_eq!(ant.level(), 1);
    /// ```
    #[must_use]
    pub fn with_stats(species: Species, attack: i32, health: i32) -> Self {
        Self {
            id: UnitId::UNASSIGNED,
            species,
            attack: attack.clamp(MIN_ATTACK, MAX_ATTACK),
            health: health.clamp(MIN_HEALTH, MAX_HEALTH),
            experience: MIN_EXPERIENCE,
            effect: crate::abilities::innate_effect(species),
            boost_attack: 0,
            boost_health: 0,
            counters: AbilityCounters::default(),
            bindings: crate::abilities::default_bindings(species),
        }
    }

    /// The empty-slot placeholder.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::with_stats(Species::None, 0, 0)
    }

    /// Set the held effect (builder pattern).
    #[must_use]
    pub fn holding(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Set experience (builder pattern).
    #[must_use]
    pub fn with_experience(mut self, experience: u8) -> Self {
        self.experience = experience.clamp(MIN_EXPERIENCE, MAX_EXPERIENCE);
        self
    }

    /// Set experience to the minimum of a level (builder pattern).
    #[must_use]
    pub fn at_level(self, level: u8) -> Self {
        self.with_experience(experience_for_level(level))
    }

    /// Is this an empty slot?
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.species.is_placeholder()
    }

    /// Is this unit still standing?
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Level derived from experience.
    #[must_use]
    pub fn level(&self) -> u8 {
        level_for_experience(self.experience)
    }

    /// Add permanent stats, clamped.
    pub fn add_stats(&mut self, attack: i32, health: i32) {
        self.attack = (self.attack + attack).clamp(MIN_ATTACK, MAX_ATTACK);
        self.health = (self.health + health).clamp(MIN_HEALTH, MAX_HEALTH);
    }

    /// Set health directly, clamped.
    pub fn set_health(&mut self, health: i32) {
        self.health = health.clamp(MIN_HEALTH, MAX_HEALTH);
    }

    /// Debit damage from health, saturating at 0.
    pub fn take_damage(&mut self, damage: i32) {
        self.health = (self.health - damage.max(0)).max(MIN_HEALTH);
    }

    /// Add a transient boost, applied at the next battle.
    pub fn add_boost(&mut self, attack: i32, health: i32) {
        self.boost_attack += attack;
        self.boost_health += health;
    }

    /// Drop any transient boost.
    pub fn clear_boost(&mut self) {
        self.boost_attack = 0;
        self.boost_health = 0;
    }

    /// Fold the boost into permanent stats (battle clone only).
    pub fn apply_boost(&mut self) {
        self.add_stats(self.boost_attack, self.boost_health);
        self.clear_boost();
    }

    /// Take the held effect, leaving none.
    pub fn take_effect(&mut self) -> Option<Effect> {
        self.effect.take()
    }

    /// Add experience. Returns `true` if the level went up.
    pub fn add_experience(&mut self, amount: u8) -> bool {
        let before = self.level();
        self.experience = self
            .experience
            .saturating_add(amount)
            .clamp(MIN_EXPERIENCE, MAX_EXPERIENCE);
        self.level() > before
    }

    /// Merge a same-species unit into this slot.
    ///
    /// Of the two, the one with lower attack+health is absorbed into the
    /// other. The survivor gains `+X/+X` where `X` is the absorbed unit's
    /// experience, and its experience becomes the clamped sum. The survivor
    /// is left in `self`. Returns `true` if the level went up.
    pub fn combine(&mut self, other: Unit) -> bool {
        debug_assert_eq!(self.species, other.species, "combine across species");

        let before = self.level().max(other.level());
        let absorbed = if other.attack + other.health > self.attack + self.health {
            let id = self.id;
            let absorbed = std::mem::replace(self, other);
            self.id = id;
            absorbed
        } else {
            other
        };

        let bonus = i32::from(absorbed.experience);
        self.add_stats(bonus, bonus);
        self.experience = self
            .experience
            .saturating_add(absorbed.experience)
            .clamp(MIN_EXPERIENCE, MAX_EXPERIENCE);
        self.level() > before
    }
}

/// Level for an experience value.
#[must_use]
pub const fn level_for_experience(experience: u8) -> u8 {
    if experience < 3 {
        1
    } else if experience < 6 {
        2
    } else {
        3
    }
}

/// Smallest experience that reaches a level.
#[must_use]
pub const fn experience_for_level(level: u8) -> u8 {
    match level {
        0 | 1 => 1,
        2 => 3,
        _ => 6,
    }
}
