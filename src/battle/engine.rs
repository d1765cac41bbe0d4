//! Battle resolution.
//!
//! A battle runs through four phases:
//!
//! - **Init**: clone both rosters, fold boosts into stats, reset per-battle
//!   counters, drop placeholders
//! - **BattleStart**: every unit's `BattleStart` abilities, highest attack
//!   first
//! - **AttackLoop**: fronts trade blows until a side is empty
//! - **Resolved**: outcome from side A's point of view
//!
//! The caller's rosters are never touched; the report hands back the
//! post-battle clones.
//!
//! ```
//! use pet_battler::battle::{resolve_battle, BattleOutcome};
//! use pet_battler::core::BattleRng;
//! use pet_battler::triggers::AbilityRegistry;
//! use pet_battler::units::{Species, Unit};
//!
//! let registry = AbilityRegistry::standard().unwrap();
//! let strong = vec![Unit::with_stats(Species::Pig, 5, 5)];
//! let weak = vec![Unit::with_stats(Species::Pig, 1, 1)];
//!
//! let outcome = resolve_battle(&registry, &strong, &weak, &mut BattleRng::new(0));
//! assert_eq!(outcome, BattleOutcome::Win);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{BattleConfig, BattleRng, Side, Sides, StartOrder, UnitId};
use crate::triggers::{AbilityRegistry, EventArgs, EventKind};
use crate::units::Unit;

use super::Arena;

/// Result of a battle for side A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleOutcome {
    Win,
    Loss,
    Tie,
}

impl BattleOutcome {
    /// The same battle seen from side B.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            BattleOutcome::Win => BattleOutcome::Loss,
            BattleOutcome::Loss => BattleOutcome::Win,
            BattleOutcome::Tie => BattleOutcome::Tie,
        }
    }
}

/// Battle state machine phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Init,
    BattleStart,
    AttackLoop,
    Resolved,
}

/// Everything a finished battle produced.
#[derive(Clone, Debug)]
pub struct BattleReport {
    /// Outcome for side A.
    pub outcome: BattleOutcome,
    /// Attack-loop iterations run.
    pub rounds: u32,
    /// Whether the stalemate guard ended the battle.
    pub stalemate: bool,
    /// Units left standing on each side.
    pub survivors: Sides<Vec<Unit>>,
}

/// Runs battles against a shared registry.
#[derive(Clone, Debug)]
pub struct BattleEngine<'r> {
    registry: &'r AbilityRegistry,
    config: BattleConfig,
}

impl<'r> BattleEngine<'r> {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new(registry: &'r AbilityRegistry) -> Self {
        Self {
            registry,
            config: BattleConfig::default(),
        }
    }

    /// Set the configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Fight `a` against `b`.
    pub fn run(&self, a: &[Unit], b: &[Unit], rng: &mut BattleRng) -> BattleReport {
        debug!(phase = ?Phase::Init, "battle");
        let mut arena = Arena::battle(
            self.registry,
            rng,
            prepare(a),
            prepare(b),
            self.config.team_size,
        );

        debug!(phase = ?Phase::BattleStart, "battle");
        self.battle_start(&mut arena);

        debug!(phase = ?Phase::AttackLoop, "battle");
        let mut rounds = 0;
        let mut stalemate = false;
        while !arena.is_defeated(Side::A) && !arena.is_defeated(Side::B) {
            if rounds >= self.config.max_rounds {
                warn!(rounds, "no side could finish the other, calling a tie");
                stalemate = true;
                break;
            }
            rounds += 1;
            exchange(&mut arena);
        }

        let outcome = if stalemate {
            BattleOutcome::Tie
        } else {
            match (arena.is_defeated(Side::A), arena.is_defeated(Side::B)) {
                (false, true) => BattleOutcome::Win,
                (true, false) => BattleOutcome::Loss,
                _ => BattleOutcome::Tie,
            }
        };
        debug!(phase = ?Phase::Resolved, ?outcome, rounds, "battle");

        BattleReport {
            outcome,
            rounds,
            stalemate,
            survivors: arena.into_sides(),
        }
    }

    fn battle_start(&self, arena: &mut Arena<'_>) {
        let mut order: Vec<(i32, Side, UnitId)> = Side::BOTH
            .into_iter()
            .flat_map(|side| arena.units(side).iter().map(move |u| (u.attack, side, u.id)))
            .collect();

        if self.config.start_order == StartOrder::Shuffled {
            arena.rng().shuffle(&mut order);
        }
        order.sort_by(|x, y| y.0.cmp(&x.0));

        for (_, side, id) in order {
            if arena.is_defeated(side.opponent()) {
                continue;
            }
            if let Some(unit) = arena.unit(side, id).cloned() {
                arena.fire(side, &unit, EventKind::BattleStart, &EventArgs::Combat);
            }
        }
    }
}

/// Clone a roster for battle.
fn prepare(roster: &[Unit]) -> Vec<Unit> {
    roster
        .iter()
        .filter(|u| !u.is_placeholder())
        .cloned()
        .map(|mut unit| {
            unit.apply_boost();
            unit.counters.reset_battle();
            unit
        })
        .collect()
}

/// One round: both fronts attack, A first.
fn exchange(arena: &mut Arena<'_>) {
    let fronts: Vec<(Side, Unit)> = Side::BOTH
        .into_iter()
        .filter_map(|side| arena.front(side).map(|i| (side, arena.units(side)[i].clone())))
        .collect();

    for (side, attacker) in fronts {
        if arena.is_defeated(side.opponent()) {
            continue;
        }
        arena.attack(side, &attacker);
    }
}

/// Fight `a` against `b` with the default configuration.
pub fn resolve_battle(
    registry: &AbilityRegistry,
    a: &[Unit],
    b: &[Unit],
    rng: &mut BattleRng,
) -> BattleOutcome {
    BattleEngine::new(registry).run(a, b, rng).outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Species;

    fn pigs(stats: &[(i32, i32)]) -> Vec<Unit> {
        stats
            .iter()
            .map(|&(a, h)| Unit::with_stats(Species::Pig, a, h))
            .collect()
    }

    #[test]
    fn test_outcomes() {
        let registry = AbilityRegistry::standard().unwrap();
        let mut rng = BattleRng::new(0);

        assert_eq!(
            resolve_battle(&registry, &pigs(&[(3, 3)]), &pigs(&[(1, 1)]), &mut rng),
            BattleOutcome::Win
        );
        assert_eq!(
            resolve_battle(&registry, &pigs(&[(1, 1)]), &pigs(&[(3, 3)]), &mut rng),
            BattleOutcome::Loss
        );
        assert_eq!(
            resolve_battle(&registry, &pigs(&[(2, 2)]), &pigs(&[(2, 2)]), &mut rng),
            BattleOutcome::Tie
        );
        assert_eq!(
            resolve_battle(&registry, &[], &[], &mut rng),
            BattleOutcome::Tie
        );
    }

    #[test]
    fn test_stalemate_guard() {
        let registry = AbilityRegistry::standard().unwrap();
        let engine = BattleEngine::new(&registry)
            .with_config(BattleConfig::default().with_max_rounds(7));

        let report = engine.run(&pigs(&[(0, 5)]), &pigs(&[(0, 5)]), &mut BattleRng::new(0));

        assert!(report.stalemate);
        assert_eq!(report.rounds, 7);
        assert_eq!(report.outcome, BattleOutcome::Tie);
    }

    #[test]
    fn test_boost_applies_in_battle_only() {
        let registry = AbilityRegistry::standard().unwrap();
        let mut boosted = Unit::with_stats(Species::Pig, 1, 1);
        boosted.add_boost(3, 3);
        let roster = vec![boosted];

        let report = BattleEngine::new(&registry).run(&roster, &pigs(&[(4, 4)]), &mut BattleRng::new(0));

        assert_eq!(report.outcome, BattleOutcome::Tie);
        assert_eq!(roster[0].attack, 1);
        assert_eq!(roster[0].boost_attack, 3);
    }

    #[test]
    fn test_flipped() {
        assert_eq!(BattleOutcome::Win.flipped(), BattleOutcome::Loss);
        assert_eq!(BattleOutcome::Tie.flipped(), BattleOutcome::Tie);
    }
}
