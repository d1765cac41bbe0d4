//! The shop phase between battles.
//!
//! - `ShopHooks`: the narrow interface to the shop collaborator
//! - `ShopPhase`: buy, sell, merge, feed and turn events over a roster
//! - `Food`: single-target and global foods
//! - `OpponentSource`: where enemy rosters come from

mod food;
mod hooks;
mod opponents;
mod phase;

pub use food::Food;
pub use hooks::{ShopHooks, ShopLedger};
pub use opponents::{OpponentSource, RecordedOpponents, ScriptedOpponents};
pub use phase::ShopPhase;
