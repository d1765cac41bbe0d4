//! Repeated battles between the same two rosters.
//!
//! Random abilities make a single battle a sample. `BattleSeries` runs the
//! same pairing many times, each on its own forked RNG stream, and tallies
//! the outcomes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::BattleRng;
use crate::units::Unit;

use super::{BattleEngine, BattleOutcome};

/// Outcome counts for side A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesTally {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl SeriesTally {
    /// Record one outcome.
    pub fn record(&mut self, outcome: BattleOutcome) {
        match outcome {
            BattleOutcome::Win => self.wins += 1,
            BattleOutcome::Loss => self.losses += 1,
            BattleOutcome::Tie => self.ties += 1,
        }
    }

    /// Battles recorded.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Fraction of battles won, 0 when empty.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.wins) / f64::from(total),
        }
    }
}

/// Runs a pairing `battles` times.
#[derive(Clone, Debug)]
pub struct BattleSeries<'r> {
    engine: BattleEngine<'r>,
    battles: u32,
}

impl<'r> BattleSeries<'r> {
    /// Create a series of `battles` runs.
    #[must_use]
    pub fn new(engine: BattleEngine<'r>, battles: u32) -> Self {
        Self { engine, battles }
    }

    /// Run every battle, each on a fork of `rng`.
    pub fn run(&self, a: &[Unit], b: &[Unit], rng: &mut BattleRng) -> SeriesTally {
        let mut tally = SeriesTally::default();
        for _ in 0..self.battles {
            let mut stream = rng.fork();
            tally.record(self.engine.run(a, b, &mut stream).outcome);
        }
        debug!(?tally, "series finished");
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triggers::AbilityRegistry;
    use crate::units::Species;

    #[test]
    fn test_series_tallies_every_battle() {
        let registry = AbilityRegistry::standard().unwrap();
        let series = BattleSeries::new(BattleEngine::new(&registry), 20);

        let a = vec![Unit::with_stats(Species::Pig, 3, 3)];
        let b = vec![Unit::with_stats(Species::Pig, 1, 1)];
        let tally = series.run(&a, &b, &mut BattleRng::new(5));

        assert_eq!(tally.total(), 20);
        assert_eq!(tally.wins, 20);
        assert!((tally.win_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_series_is_reproducible() {
        let registry = AbilityRegistry::standard().unwrap();
        let series = BattleSeries::new(BattleEngine::new(&registry), 30);

        let a = vec![Unit::new(Species::Mosquito), Unit::new(Species::Mosquito)];
        let b = vec![Unit::new(Species::Ant), Unit::new(Species::Fish)];

        let first = series.run(&a, &b, &mut BattleRng::new(11));
        let second = series.run(&a, &b, &mut BattleRng::new(11));
        assert_eq!(first, second);
    }
}
