//! Damage modification by held effects.
//!
//! Two pure functions sit on either side of every hit:
//!
//! - `resolve_offense` turns an attacker's attack stat and held effect into
//!   the outgoing [`Strike`]
//! - `resolve_defense` turns raw incoming damage and the defender's held
//!   effect into the damage actually debited
//!
//! Neither touches a unit. Callers write the returned `remaining` effect
//! back, which is how one-shot effects (melon, steak) get consumed.
//!
//! ```
//! use pet_battler::effects::{resolve_defense, Effect};
//!
//! let hit = resolve_defense(25, Some(Effect::Melon));
//! assert_eq!(hit.damage, 5);
//! assert_eq!(hit.remaining, None);
//!
//! let hit = resolve_defense(2, Some(Effect::Garlic));
//! assert_eq!(hit.damage, 1);
//! assert_eq!(hit.remaining, Some(Effect::Garlic));
//! ```

use crate::core::config::{
    CHILLI_SPLASH, GARLIC_BLOCK, MAX_ATTACK, MEAT_BONE_BONUS, MELON_BLOCK, STEAK_BONUS,
};

use super::Effect;

/// Damage after the defender's effect was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved {
    /// Damage to debit from health.
    pub damage: i32,
    /// Effect the defender holds afterwards.
    pub remaining: Option<Effect>,
}

/// Apply a defender's held effect to incoming damage.
#[must_use]
pub fn resolve_defense(raw: i32, effect: Option<Effect>) -> Resolved {
    match effect {
        Some(Effect::Melon) => Resolved {
            damage: (raw - MELON_BLOCK).max(0),
            remaining: None,
        },
        // Garlic never reduces a hit below 1, even a hit of 0.
        Some(Effect::Garlic) => Resolved {
            damage: (raw - GARLIC_BLOCK).max(1),
            remaining: effect,
        },
        _ => Resolved {
            damage: raw,
            remaining: effect,
        },
    }
}

/// Outgoing attack computed from the attacker's stats and effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strike {
    /// Damage dealt to the frontmost defender.
    pub damage: i32,
    /// Effect the attacker holds afterwards.
    pub remaining: Option<Effect>,
    /// Flat damage for the second defender, if any.
    pub splash: Option<i32>,
}

/// Compute an attack from the attacker's attack stat and held effect.
///
/// ```
/// use pet_battler::effects::{resolve_offense, Effect};
///
/// let strike = resolve_offense(4, Some(Effect::MeatBone));
/// assert_eq!(strike.damage, 7);
/// assert_eq!(strike.remaining, Some(Effect::MeatBone));
/// ```
#[must_use]
pub fn resolve_offense(attack: i32, effect: Option<Effect>) -> Strike {
    let mut strike = Strike {
        damage: attack,
        remaining: effect,
        splash: None,
    };

    match effect {
        Some(Effect::MeatBone) => strike.damage += MEAT_BONE_BONUS,
        Some(Effect::Steak) => {
            // Never below the attack cap.
            strike.damage = (attack + STEAK_BONUS).max(MAX_ATTACK);
            strike.remaining = None;
        }
        Some(Effect::Chilli) => strike.splash = Some(CHILLI_SPLASH),
        _ => {}
    }

    strike
}
