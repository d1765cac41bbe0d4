//! Food and feeding.
//!
//! Most foods are eaten by one unit: they add stats, grant a held effect,
//! add experience, or (pill) make the unit faint. Global foods apply to
//! random team members or to the shop.
//!
//! A cat on the team multiplies stat gains from food by `1 + level`.
//!
//! Every unit that ate fires `AteFood`, and its friends `FriendAteFood`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Side, UnitId};
use crate::effects::Effect;
use crate::triggers::{EventArgs, EventKind};
use crate::units::Species;

use crate::battle::Arena;

/// Everything a unit can be fed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Food {
    Apple,
    Honey,
    Pill,
    MeatBone,
    Cupcake,
    Garlic,
    Pear,
    Chilli,
    Chocolate,
    Steak,
    Melon,
    Mushroom,
    /// Stocked by pigeons.
    BreadCrumb,
    /// Stocked by cows.
    Milk,

    // Global
    SaladBowl,
    CannedFood,
    Sushi,
    Pizza,
}

impl Food {
    /// Does this food apply without a chosen eater?
    #[must_use]
    pub const fn is_global(self) -> bool {
        matches!(
            self,
            Food::SaladBowl | Food::CannedFood | Food::Sushi | Food::Pizza
        )
    }

    /// The held effect this food grants, if any.
    #[must_use]
    pub const fn held_effect(self) -> Option<Effect> {
        match self {
            Food::Honey => Some(Effect::Bee),
            Food::MeatBone => Some(Effect::MeatBone),
            Food::Garlic => Some(Effect::Garlic),
            Food::Chilli => Some(Effect::Chilli),
            Food::Steak => Some(Effect::Steak),
            Food::Melon => Some(Effect::Melon),
            Food::Mushroom => Some(Effect::Mushroom),
            _ => None,
        }
    }

    /// Permanent `(attack, health)` this food adds to its eater.
    #[must_use]
    pub const fn stats(self) -> (i32, i32) {
        match self {
            Food::Apple => (1, 1),
            Food::Pear => (2, 2),
            Food::BreadCrumb => (1, 0),
            Food::Milk => (1, 2),
            _ => (0, 0),
        }
    }
}

impl Arena<'_> {
    /// Stat multiplier from the best cat on side A.
    #[must_use]
    pub fn food_multiplier(&self) -> i32 {
        self.units(Side::A)
            .iter()
            .filter(|u| u.species == Species::Cat)
            .map(|u| 1 + i32::from(u.level()))
            .max()
            .unwrap_or(1)
    }

    /// Feed a single-target food to a unit on side A.
    ///
    /// # Panics
    ///
    /// Panics if `food` is global.
    pub fn feed(&mut self, eater: UnitId, food: Food) {
        assert!(!food.is_global(), "{food:?} has no single eater");
        let multiplier = self.food_multiplier();
        let Some(index) = self.position(Side::A, eater) else {
            return;
        };
        debug!(?food, species = %self.units(Side::A)[index].species, "feed");

        match food {
            Food::Pill => {
                self.faint(Side::A, index);
                return;
            }
            Food::Cupcake => {
                if let Some(unit) = self.unit_mut(Side::A, eater) {
                    unit.add_boost(3 * multiplier, 3 * multiplier);
                }
            }
            Food::Chocolate => {
                let leveled = self
                    .unit_mut(Side::A, eater)
                    .is_some_and(|unit| unit.add_experience(1));
                if leveled {
                    self.level_up(eater);
                }
            }
            _ => {
                if let Some(effect) = food.held_effect() {
                    if let Some(unit) = self.unit_mut(Side::A, eater) {
                        unit.effect = Some(effect);
                    }
                } else {
                    let (attack, health) = food.stats();
                    self.buff(Side::A, eater, attack * multiplier, health * multiplier);
                }
            }
        }

        self.ate(eater);
    }

    /// Apply a global food.
    ///
    /// # Panics
    ///
    /// Panics if `food` is not global.
    pub fn serve(&mut self, food: Food) {
        assert!(food.is_global(), "{food:?} needs an eater");
        let multiplier = self.food_multiplier();
        debug!(?food, "serve");

        let (amount, stat) = match food {
            Food::SaladBowl => (2, 1),
            Food::Sushi => (3, 1),
            Food::Pizza => (2, 2),
            _ => {
                if let Some(hooks) = self.hooks() {
                    for unit in hooks.shop_units_mut() {
                        unit.add_stats(1, 1);
                    }
                    hooks.add_future_stats(1, 1);
                }
                return;
            }
        };

        for id in self.random_units(Side::A, amount, None) {
            self.buff(Side::A, id, stat * multiplier, stat * multiplier);
            self.ate(id);
        }
    }

    /// Fire the level-up reactions for a unit on side A.
    pub(crate) fn level_up(&mut self, id: UnitId) {
        if let Some(hooks) = self.hooks() {
            hooks.create_linked_offer();
        }
        if let Some(unit) = self.unit(Side::A, id).cloned() {
            debug!(species = %unit.species, level = unit.level(), "level up");
            self.fire(Side::A, &unit, EventKind::LevelUp, &EventArgs::shop());
        }
    }

    fn ate(&mut self, eater: UnitId) {
        let Some(unit) = self.unit(Side::A, eater).cloned() else {
            return;
        };
        self.fire(Side::A, &unit, EventKind::AteFood, &EventArgs::shop());

        let args = EventArgs::with_friend(eater);
        for friend in self.roll_call(Side::A) {
            if friend.id != eater && self.position(Side::A, friend.id).is_some() {
                self.fire(Side::A, &friend, EventKind::FriendAteFood, &args);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_classes() {
        assert!(Food::Sushi.is_global());
        assert!(!Food::Apple.is_global());
        assert_eq!(Food::Honey.held_effect(), Some(Effect::Bee));
        assert_eq!(Food::Apple.held_effect(), None);
        assert_eq!(Food::Milk.stats(), (1, 2));
        assert_eq!(Food::Garlic.stats(), (0, 0));
    }
}
