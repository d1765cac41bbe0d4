//! Units and rosters.
//!
//! - `Species`: static identity, tier and base stats
//! - `Unit`: mutable combat entity
//! - `AbilityCounters`: rate-limit state with explicit resets
//! - `Roster`: fixed five-slot team with placeholders

mod counters;
mod roster;
mod species;
mod unit;

pub use counters::AbilityCounters;
pub use roster::Roster;
pub use species::Species;
pub use unit::{experience_for_level, level_for_experience, Bindings, Unit};
