//! Target selection over a unit list.
//!
//! Abilities pick their targets with these helpers. They work on both
//! arena modes: placeholders (shop) are skipped everywhere, so "the friend
//! behind" means the nearest occupied slot behind, not the adjacent slot.
//!
//! Results are `UnitId`s rather than indices. Applying the first buff or
//! hit can reshuffle the list (faints, spawns), and ids survive that.
//!
//! Index 0 is the rear of a team; the last index is the front.

use crate::core::{BattleRng, UnitId};
use crate::units::Unit;

/// Indices of non-placeholder units, rear to front.
pub fn occupied(units: &[Unit]) -> impl DoubleEndedIterator<Item = usize> + '_ {
    units
        .iter()
        .enumerate()
        .filter(|(_, unit)| !unit.is_placeholder())
        .map(|(i, _)| i)
}

/// Index of the frontmost occupied slot.
#[must_use]
pub fn frontmost(units: &[Unit]) -> Option<usize> {
    occupied(units).next_back()
}

/// Index of the occupied slot directly behind the frontmost one.
#[must_use]
pub fn second_from_front(units: &[Unit]) -> Option<usize> {
    let front = frontmost(units)?;
    behind(units, front, 1).first().copied()
}

/// Up to `amount` distinct random units, in roster order.
///
/// `exclude` removes one unit (usually the ability's owner) from the pool.
pub fn random_units(
    rng: &mut BattleRng,
    units: &[Unit],
    amount: usize,
    exclude: Option<UnitId>,
) -> Vec<UnitId> {
    let pool: Vec<UnitId> = occupied(units)
        .map(|i| units[i].id)
        .filter(|id| Some(*id) != exclude)
        .collect();

    rng.sample(pool.len(), amount)
        .into_iter()
        .map(|i| pool[i])
        .collect()
}

/// The unit with the lowest health (rearmost wins ties).
#[must_use]
pub fn lowest_health(units: &[Unit]) -> Option<UnitId> {
    let mut best: Option<&Unit> = None;
    for unit in occupied(units).map(|i| &units[i]) {
        if best.map_or(true, |b| unit.health < b.health) {
            best = Some(unit);
        }
    }
    best.map(|u| u.id)
}

/// The unit with the highest health (rearmost wins ties).
#[must_use]
pub fn highest_health(units: &[Unit]) -> Option<UnitId> {
    let mut best: Option<&Unit> = None;
    for unit in occupied(units).map(|i| &units[i]) {
        if best.map_or(true, |b| unit.health > b.health) {
            best = Some(unit);
        }
    }
    best.map(|u| u.id)
}

/// Indices of up to `amount` occupied slots behind `index`, nearest first.
#[must_use]
pub fn behind(units: &[Unit], index: usize, amount: usize) -> Vec<usize> {
    (0..index.min(units.len()))
        .rev()
        .filter(|&i| !units[i].is_placeholder())
        .take(amount)
        .collect()
}

/// Indices of up to `amount` occupied slots ahead of `index`, nearest first.
#[must_use]
pub fn ahead(units: &[Unit], index: usize, amount: usize) -> Vec<usize> {
    (index.saturating_add(1)..units.len())
        .filter(|&i| !units[i].is_placeholder())
        .take(amount)
        .collect()
}

/// Ids of the given indices.
#[must_use]
pub fn ids(units: &[Unit], indices: &[usize]) -> Vec<UnitId> {
    indices.iter().map(|&i| units[i].id).collect()
}
