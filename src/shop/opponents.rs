//! Opponent selection.
//!
//! Where enemy rosters come from (recorded teams, matchmaking) is up to the
//! caller. The engine only needs an `OpponentSource`.

use crate::core::BattleRng;
use crate::units::{Roster, Species, Unit};

/// Supplies the enemy roster for a turn.
pub trait OpponentSource {
    /// The roster to fight in `round` (1-based).
    fn opponent(&mut self, round: u32, rng: &mut BattleRng) -> Roster;
}

/// A fixed baseline: three pigs that grow by `round - 1` each round.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptedOpponents;

impl OpponentSource for ScriptedOpponents {
    fn opponent(&mut self, round: u32, _rng: &mut BattleRng) -> Roster {
        let bonus = i32::try_from(round.saturating_sub(1)).unwrap_or(i32::MAX);
        Roster::from_units((0..3).map(|_| {
            let mut pig = Unit::new(Species::Pig);
            pig.add_stats(bonus, bonus);
            pig
        }))
    }
}

/// Rosters recorded from earlier runs, picked at random.
///
/// The pick draws from a per-round context stream, so choosing an opponent
/// leaves the caller's battle stream where it was.
///
/// Falls back to [`ScriptedOpponents`] when nothing was recorded for a round.
#[derive(Clone, Debug, Default)]
pub struct RecordedOpponents {
    rounds: Vec<Vec<Vec<u8>>>,
}

impl RecordedOpponents {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an encoded roster for `round`.
    pub fn record(&mut self, round: u32, roster: &Roster) -> Result<(), crate::core::CodecError> {
        let index = round.saturating_sub(1) as usize;
        if self.rounds.len() <= index {
            self.rounds.resize_with(index + 1, Vec::new);
        }
        self.rounds[index].push(roster.encode()?);
        Ok(())
    }

    /// Number of rosters stored for `round`.
    #[must_use]
    pub fn count(&self, round: u32) -> usize {
        self.rounds
            .get(round.saturating_sub(1) as usize)
            .map_or(0, Vec::len)
    }
}

impl OpponentSource for RecordedOpponents {
    fn opponent(&mut self, round: u32, rng: &mut BattleRng) -> Roster {
        let mut picker = rng.for_context(&format!("opponent-{round}"));
        let stored = self
            .rounds
            .get(round.saturating_sub(1) as usize)
            .and_then(|pool| picker.choose(pool))
            .and_then(|bytes| Roster::decode(bytes).ok());

        stored.unwrap_or_else(|| ScriptedOpponents.opponent(round, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pig_team_scales() {
        let mut rng = BattleRng::new(0);
        let first = ScriptedOpponents.opponent(1, &mut rng);
        let fourth = ScriptedOpponents.opponent(4, &mut rng);

        assert_eq!(first.len(), 3);
        assert_eq!(first[0].attack, Species::Pig.base_stats().0);
        assert_eq!(fourth[2].attack, Species::Pig.base_stats().0 + 3);
        assert_eq!(fourth[2].health, Species::Pig.base_stats().1 + 3);
    }

    #[test]
    fn test_recorded_falls_back() {
        let mut rng = BattleRng::new(0);
        let mut store = RecordedOpponents::new();

        let ducks = Roster::from_units([Unit::new(Species::Duck)]);
        store.record(2, &ducks).unwrap();

        assert_eq!(store.count(2), 1);
        assert_eq!(store.opponent(2, &mut rng), ducks);
        assert_eq!(store.opponent(1, &mut rng).len(), 3);
    }
}
