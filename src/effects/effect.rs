//! Held effects.
//!
//! A unit holds at most one effect at a time, granted by food. Effects are
//! one of three kinds:
//!
//! ## Offensive
//!
//! Change the damage a unit deals when it attacks:
//! - `MeatBone`: +3 damage on every attack
//! - `Steak`: one big hit, then consumed
//! - `Chilli`: splash damage to the unit behind the target
//! - `Peanut`: any hit that deals damage knocks the target out
//!
//! ## Defensive
//!
//! Change the damage a unit takes (see `resolve_defense`):
//! - `Melon`: blocks 20 once
//! - `Garlic`: blocks 2, never below 1
//!
//! ## On faint
//!
//! Leave something behind when the holder faints:
//! - `Bee`: a 1/1 bee
//! - `Mushroom`: a 1/1 copy of the holder
//!
//! [`resolve_defense`]: super::resolve_defense

use serde::{Deserialize, Serialize};

/// An effect held by a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Spawns a 1/1 bee on faint.
    Bee,
    /// +3 attack damage.
    MeatBone,
    /// Incoming damage -2, floored at 1.
    Garlic,
    /// 5 splash damage to the second defender.
    Chilli,
    /// Next attack +20, consumed.
    Steak,
    /// Blocks 20 damage once.
    Melon,
    /// Returns as a 1/1 after fainting.
    Mushroom,
    /// Every damaging hit is lethal.
    Peanut,
}

impl Effect {
    /// Does this effect modify outgoing attack damage?
    #[must_use]
    pub const fn is_offensive(self) -> bool {
        matches!(
            self,
            Effect::MeatBone | Effect::Steak | Effect::Chilli | Effect::Peanut
        )
    }

    /// Does this effect modify incoming damage?
    #[must_use]
    pub const fn is_defensive(self) -> bool {
        matches!(self, Effect::Melon | Effect::Garlic)
    }

    /// Does damage from the holder always knock the target out?
    #[must_use]
    pub const fn is_lethal(self) -> bool {
        matches!(self, Effect::Peanut)
    }

    /// Does this effect do something when its holder faints?
    #[must_use]
    pub const fn on_faint(self) -> bool {
        matches!(self, Effect::Bee | Effect::Mushroom)
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Effect::Bee => "bee",
            Effect::MeatBone => "meat bone",
            Effect::Garlic => "garlic",
            Effect::Chilli => "chilli",
            Effect::Steak => "steak",
            Effect::Melon => "melon",
            Effect::Mushroom => "mushroom",
            Effect::Peanut => "peanut",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_kinds_are_disjoint() {
        let all = [
            Effect::Bee,
            Effect::MeatBone,
            Effect::Garlic,
            Effect::Chilli,
            Effect::Steak,
            Effect::Melon,
            Effect::Mushroom,
            Effect::Peanut,
        ];

        for effect in all {
            let kinds = [effect.is_offensive(), effect.is_defensive(), effect.on_faint()];
            assert_eq!(kinds.iter().filter(|&&k| k).count(), 1, "{effect}");
        }
    }

    #[test]
    fn test_only_peanut_is_lethal() {
        assert!(Effect::Peanut.is_lethal());
        assert!(!Effect::Steak.is_lethal());
        assert!(!Effect::Melon.is_lethal());
    }
}
