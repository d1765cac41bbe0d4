//! Core engine types: unit IDs, sides, RNG, configuration, errors.
//!
//! Everything here is independent of species and abilities.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod side;

pub use config::{BattleConfig, StartOrder};
pub use entity::{UnitId, UnitIdAllocator};
pub use error::{CodecError, RegistryError};
pub use rng::{BattleRng, BattleRngState};
pub use side::{Side, Sides};
