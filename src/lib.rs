//! # pet-battler
//!
//! A deterministic auto-battler engine: two teams of up to five units line
//! up, fire their start-of-battle abilities, then trade blows front to front
//! until one side is empty. Between battles a shop phase buys, sells, merges
//! and feeds units.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness flows through one seeded
//!    `BattleRng`. Same seed, same rosters, same battle.
//!
//! 2. **Value Rosters**: units are plain values. A battle works on clones and
//!    never touches the caller's rosters.
//!
//! 3. **Abilities as Data**: every ability is a `(species, event, handler)`
//!    entry. The registry checks handler shapes once, at construction.
//!
//! ## Orientation
//!
//! Index 0 of a team is the rear; the last index is the front. The front
//! unit attacks and is attacked.
//!
//! ## Modules
//!
//! - `core`: configuration, unit ids, sides, RNG, errors
//! - `units`: species, units, rosters
//! - `effects`: held effects, the damage resolver, target selection
//! - `triggers`: events, the ability registry, the dispatcher
//! - `abilities`: the ability catalog, tiers 1 to 6
//! - `battle`: arena, damage and faint cascade, spawning, the battle engine
//! - `shop`: the shop phase, foods, opponent sources
//!
//! ## Example
//!
//! ```
//! use pet_battler::{resolve_battle, AbilityRegistry, BattleOutcome, BattleRng, Species, Unit};
//!
//! let registry = AbilityRegistry::standard().unwrap();
//! let team = vec![Unit::new(Species::Cricket), Unit::new(Species::Fish)];
//! let enemy = vec![Unit::new(Species::Pig)];
//!
//! let mut rng = BattleRng::new(42);
//! let outcome = resolve_battle(&registry, &team, &enemy, &mut rng);
//! assert!(matches!(outcome, BattleOutcome::Win | BattleOutcome::Loss | BattleOutcome::Tie));
//! ```

pub mod abilities;
pub mod battle;
pub mod core;
pub mod effects;
pub mod shop;
pub mod triggers;
pub mod units;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, StartOrder,
    UnitId, Side, Sides,
    BattleRng, BattleRngState,
    CodecError, RegistryError,
};

pub use crate::units::{AbilityCounters, Roster, Species, Unit};

pub use crate::effects::{Effect, resolve_defense, resolve_offense};

pub use crate::triggers::{
    AbilityRegistry, Activation, Binding, EventArgs, EventKind, Handler, Shape,
};

pub use crate::battle::{
    resolve_battle, Arena, BattleEngine, BattleOutcome, BattleReport,
    BattleSeries, SeriesTally,
};

pub use crate::shop::{Food, OpponentSource, ShopHooks, ShopLedger, ShopPhase};
