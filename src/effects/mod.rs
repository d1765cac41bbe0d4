//! Held effects and the damage rules they imply.
//!
//! - `Effect`: the closed set of one-shot and persistent effects
//! - `resolve_offense` / `resolve_defense`: pure damage modifiers
//! - `targeting`: target selection helpers shared by abilities

mod effect;
mod resolver;
pub mod targeting;

pub use effect::Effect;
pub use resolver::{resolve_defense, resolve_offense, Resolved, Strike};
