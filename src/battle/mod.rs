//! Battle resolution.
//!
//! - `Arena`: the mutable two-sided field, shared with the shop phase
//! - `Arena::attack` / `damage` / `faint`: the damage path and faint cascade
//! - `Arena::spawn`: spawn placement
//! - `BattleEngine`: the Init, BattleStart, AttackLoop, Resolved state machine
//! - `BattleSeries`: repeated battles on forked RNG streams

mod arena;
mod damage;
mod engine;
mod series;
mod spawn;

pub use arena::{Arena, Mode};
pub use engine::{resolve_battle, BattleEngine, BattleOutcome, BattleReport, Phase};
pub use series::{BattleSeries, SeriesTally};
