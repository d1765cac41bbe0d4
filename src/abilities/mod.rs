//! The ability catalog.
//!
//! Every species' abilities as `(species, event kind, handler)` entries,
//! grouped by shop tier. [`AbilityRegistry::standard`] binds the catalog and
//! [`Unit::new`] derives a unit's default bindings from it.
//!
//! Abilities scale with the level `L` of their activation. Halves round up:
//! `ceil(0.5 * L * x)`.
//!
//! Two tier-6 species have no handlers. The tiger is read by the dispatcher
//! (it re-runs abilities of the unit in front of it) and the cat by feeding
//! (it multiplies food stats).
//!
//! [`AbilityRegistry::standard`]: crate::triggers::AbilityRegistry::standard
//! [`Unit::new`]: crate::units::Unit::new

mod tier1;
mod tier2;
mod tier3;
mod tier4;
mod tier5;
mod tier6;

use crate::effects::Effect;
use crate::triggers::{Binding, EventKind, Handler};
use crate::units::{Bindings, Species, Unit};

/// One catalog entry.
pub type Entry = (Species, EventKind, Handler);

/// All catalog entries, tier 1 first.
pub fn catalog() -> impl Iterator<Item = &'static Entry> {
    tier1::ENTRIES
        .iter()
        .chain(tier2::ENTRIES)
        .chain(tier3::ENTRIES)
        .chain(tier4::ENTRIES)
        .chain(tier5::ENTRIES)
        .chain(tier6::ENTRIES)
}

/// Bindings a freshly created unit of `species` carries.
///
/// Ordered by event kind, then by catalog order within a kind.
#[must_use]
pub fn default_bindings(species: Species) -> Bindings {
    let mut bindings = Bindings::new();
    for kind in EventKind::ALL {
        let count = catalog()
            .filter(|(s, k, _)| *s == species && *k == kind)
            .count();
        for slot in 0..count {
            bindings.push(Binding::new(kind, species, slot as u8));
        }
    }
    bindings
}

/// Effect a species is created holding.
#[must_use]
pub fn innate_effect(species: Species) -> Option<Effect> {
    match species {
        Species::Scorpion => Some(Effect::Peanut),
        _ => None,
    }
}

/// `ceil(0.5 * level * value)` for non-negative inputs.
#[must_use]
pub(crate) const fn ceil_half(level: i32, value: i32) -> i32 {
    (level * value + 1) / 2
}

/// Up to `amount` occupied indices at or ahead of `index`, nearest first.
///
/// After a faint in battle the unit that was ahead now sits at `index`; in
/// the shop `index` holds the placeholder and is skipped.
pub(crate) fn ahead_of_gap(units: &[Unit], index: usize, amount: usize) -> Vec<usize> {
    (index..units.len())
        .filter(|&i| !units[i].is_placeholder())
        .take(amount)
        .collect()
}

/// Run `f` against a fresh battle arena.
#[cfg(test)]
pub(crate) fn in_battle<R>(
    a: Vec<Unit>,
    b: Vec<Unit>,
    f: impl FnOnce(&mut crate::battle::Arena<'_>) -> R,
) -> R {
    let registry = crate::triggers::AbilityRegistry::standard().unwrap();
    let mut rng = crate::core::BattleRng::new(7);
    let mut arena = crate::battle::Arena::battle(&registry, &mut rng, a, b, 5);
    f(&mut arena)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil_half() {
        assert_eq!(ceil_half(1, 5), 3);
        assert_eq!(ceil_half(1, 4), 2);
        assert_eq!(ceil_half(2, 5), 5);
        assert_eq!(ceil_half(3, 5), 8);
        assert_eq!(ceil_half(1, 0), 0);
    }

    #[test]
    fn test_every_purchasable_species_is_covered() {
        for species in Species::purchasable() {
            let handled = catalog().any(|(s, _, _)| *s == species);
            let passive = matches!(species, Species::Tiger | Species::Cat | Species::Scorpion);
            assert!(handled != passive, "{species}");
        }
    }

    #[test]
    fn test_hidden_species_have_no_abilities() {
        for &species in Species::hidden() {
            assert!(default_bindings(species).is_empty(), "{species}");
        }
    }

    #[test]
    fn test_scorpion_holds_peanut() {
        assert_eq!(Unit::new(Species::Scorpion).effect, Some(Effect::Peanut));
        assert_eq!(Unit::new(Species::Pig).effect, None);
    }
}
