//! Ability triggers.
//!
//! - `EventKind` and `Shape`: what happened, and what arguments handlers get
//! - `AbilityRegistry`: `(species, kind)` to ordered handlers, shape checked
//! - `Arena::fire`: the dispatcher, including the tiger amplifier re-run
//!
//! ## Example
//!
//! ```
//! use pet_battler::battle::Arena;
//! use pet_battler::core::{BattleRng, Side};
//! use pet_battler::triggers::{AbilityRegistry, EventArgs, EventKind};
//! use pet_battler::units::{Species, Unit};
//!
//! let registry = AbilityRegistry::standard().unwrap();
//! let mut rng = BattleRng::new(1);
//! let mut arena = Arena::battle(
//!     &registry,
//!     &mut rng,
//!     vec![Unit::new(Species::Peacock)],
//!     vec![Unit::new(Species::Ant)],
//!     5,
//! );
//!
//! let peacock = arena.units(Side::A)[0].clone();
//! arena.fire(Side::A, &peacock, EventKind::Hurt, &EventArgs::Combat);
//!
//! assert_eq!(arena.units(Side::A)[0].attack, peacock.attack + 4);
//! ```

mod dispatcher;
mod event;
mod registry;

pub use event::{EventArgs, EventKind, FaintArgs, Shape, ShopArgs, SummonArgs};
pub use registry::{
    AbilityRef, AbilityRegistry, Activation, Binding, CombatHandler, EndTurnHandler,
    FaintHandler, Handler, ShopHandler, SummonHandler, MAX_HANDLERS_PER_EVENT,
};
