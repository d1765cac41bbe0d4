//! Ability registry.
//!
//! The registry maps `(species, event kind)` to an ordered list of handlers.
//! Units carry `Binding`s that point into it: a binding names the event it
//! reacts to and which handler slot of which species runs. Pointing at a
//! species rather than at the unit's own species is what lets a parrot run
//! the abilities it copied.
//!
//! Handlers are plain function pointers tagged by argument [`Shape`]. The
//! shape is checked once in [`AbilityRegistry::bind`]; after that the
//! dispatcher can rely on every bound handler accepting its event's
//! arguments.
//!
//! The registry is built once and shared by reference:
//!
//! ```
//! use pet_battler::triggers::{AbilityRegistry, EventKind};
//! use pet_battler::units::Species;
//!
//! let registry = AbilityRegistry::standard().unwrap();
//! assert_eq!(registry.handlers(Species::Ant, EventKind::Faint).len(), 1);
//! assert!(registry.handlers(Species::Ant, EventKind::Hurt).is_empty());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::battle::{Arena, BattleOutcome};
use crate::core::error::Result;
use crate::core::{RegistryError, Side, UnitId};
use crate::units::{Bindings, Species, Unit};

use super::event::{EventKind, FaintArgs, Shape, ShopArgs, SummonArgs};

/// Maximum handlers one species may bind to one event kind.
pub const MAX_HANDLERS_PER_EVENT: usize = 4;

/// Reference to one registered handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityRef {
    /// Species whose handler list is consulted.
    pub species: Species,
    /// Position in that list.
    pub slot: u8,
}

/// An event binding carried by a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Binding {
    /// Event this binding reacts to.
    pub kind: EventKind,
    /// Handler to run.
    pub ability: AbilityRef,
}

impl Binding {
    /// Create a binding.
    #[must_use]
    pub const fn new(kind: EventKind, species: Species, slot: u8) -> Self {
        Self {
            kind,
            ability: AbilityRef { species, slot },
        }
    }
}

/// One handler invocation.
#[derive(Clone, Debug)]
pub struct Activation {
    /// Side of the unit whose ability runs.
    pub side: Side,
    /// The unit as it was when the handler was invoked.
    pub unit: Unit,
    /// Level the ability runs at.
    ///
    /// The unit's own level, or the tiger's level on an amplified re-run.
    pub level: u8,
    /// Is this the amplified re-run?
    pub amplified: bool,
}

impl Activation {
    /// Id of the unit whose ability runs.
    #[must_use]
    pub fn id(&self) -> UnitId {
        self.unit.id
    }

    /// Level as `i32`, for stat arithmetic.
    #[must_use]
    pub fn level(&self) -> i32 {
        i32::from(self.level)
    }
}

/// Handler for shop-phase events.
pub type ShopHandler = fn(&mut Arena<'_>, &Activation, &ShopArgs);
/// Handler for end of turn.
pub type EndTurnHandler = fn(&mut Arena<'_>, &Activation, Option<BattleOutcome>);
/// Handler for argument-less battle events.
pub type CombatHandler = fn(&mut Arena<'_>, &Activation);
/// Handler for faint events.
pub type FaintHandler = fn(&mut Arena<'_>, &Activation, &FaintArgs);
/// Handler for summon events.
pub type SummonHandler = fn(&mut Arena<'_>, &Activation, &SummonArgs);

/// A handler tagged by the argument shape it accepts.
#[derive(Clone, Copy)]
pub enum Handler {
    Shop(ShopHandler),
    EndTurn(EndTurnHandler),
    Combat(CombatHandler),
    Faint(FaintHandler),
    Summon(SummonHandler),
}

impl Handler {
    /// The argument shape this handler accepts.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Handler::Shop(_) => Shape::Shop,
            Handler::EndTurn(_) => Shape::EndTurn,
            Handler::Combat(_) => Shape::Combat,
            Handler::Faint(_) => Shape::Faint,
            Handler::Summon(_) => Shape::Summon,
        }
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Handler::{:?}", self.shape())
    }
}

/// Immutable table of ability handlers.
#[derive(Clone, Debug, Default)]
pub struct AbilityRegistry {
    handlers: FxHashMap<(Species, EventKind), SmallVec<[Handler; 2]>>,
}

impl AbilityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry with every species' abilities.
    pub fn standard() -> Result<Self> {
        let mut registry = Self::new();
        for &(species, kind, handler) in crate::abilities::catalog() {
            registry.bind(species, kind, handler)?;
        }
        Ok(registry)
    }

    /// Append a handler for `(species, kind)`.
    ///
    /// Fails if the handler's shape does not match the event kind, or if the
    /// list is already full. Returns the reference a `Binding` should use.
    pub fn bind(&mut self, species: Species, kind: EventKind, handler: Handler) -> Result<AbilityRef> {
        if handler.shape() != kind.shape() {
            return Err(RegistryError::ShapeMismatch {
                species,
                kind,
                expected: kind.shape(),
                found: handler.shape(),
            });
        }

        let list = self.handlers.entry((species, kind)).or_default();
        if list.len() >= MAX_HANDLERS_PER_EVENT {
            return Err(RegistryError::TooManyHandlers {
                species,
                kind,
                max: MAX_HANDLERS_PER_EVENT,
            });
        }

        list.push(handler);
        Ok(AbilityRef {
            species,
            slot: (list.len() - 1) as u8,
        })
    }

    /// Handlers registered for `(species, kind)`, in order.
    #[must_use]
    pub fn handlers(&self, species: Species, kind: EventKind) -> &[Handler] {
        self.handlers
            .get(&(species, kind))
            .map_or(&[], |list| list.as_slice())
    }

    /// Resolve a binding to its handler.
    #[must_use]
    pub fn resolve(&self, binding: Binding) -> Option<Handler> {
        self.handlers(binding.ability.species, binding.kind)
            .get(usize::from(binding.ability.slot))
            .copied()
    }

    /// Bindings for every handler a species has, in event order.
    #[must_use]
    pub fn bindings_for(&self, species: Species) -> Bindings {
        let mut bindings = Bindings::new();
        for kind in EventKind::ALL {
            for slot in 0..self.handlers(species, kind).len() {
                bindings.push(Binding::new(kind, species, slot as u8));
            }
        }
        bindings
    }

    /// Total number of handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.values().map(SmallVec::len).sum()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_combat(_: &mut Arena<'_>, _: &Activation) {}
    fn noop_faint(_: &mut Arena<'_>, _: &Activation, _: &FaintArgs) {}

    #[test]
    fn test_bind_assigns_slots() {
        let mut registry = AbilityRegistry::new();

        let first = registry
            .bind(Species::Ant, EventKind::Hurt, Handler::Combat(noop_combat))
            .unwrap();
        let second = registry
            .bind(Species::Ant, EventKind::Hurt, Handler::Combat(noop_combat))
            .unwrap();

        assert_eq!(first.slot, 0);
        assert_eq!(second.slot, 1);
        assert_eq!(registry.len(), 2);
        assert!(registry
            .resolve(Binding::new(EventKind::Hurt, Species::Ant, 1))
            .is_some());
        assert!(registry
            .resolve(Binding::new(EventKind::Hurt, Species::Ant, 2))
            .is_none());
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let mut registry = AbilityRegistry::new();
        let err = registry
            .bind(Species::Ant, EventKind::Faint, Handler::Combat(noop_combat))
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::ShapeMismatch {
                species: Species::Ant,
                kind: EventKind::Faint,
                expected: Shape::Faint,
                found: Shape::Combat,
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_too_many_handlers() {
        let mut registry = AbilityRegistry::new();
        for _ in 0..MAX_HANDLERS_PER_EVENT {
            registry
                .bind(Species::Ant, EventKind::Faint, Handler::Faint(noop_faint))
                .unwrap();
        }

        let err = registry
            .bind(Species::Ant, EventKind::Faint, Handler::Faint(noop_faint))
            .unwrap_err();
        assert!(matches!(err, RegistryError::TooManyHandlers { max: 4, .. }));
    }

    #[test]
    fn test_standard_registry_builds() {
        let registry = AbilityRegistry::standard().unwrap();
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_default_bindings_resolve() {
        let registry = AbilityRegistry::standard().unwrap();

        for species in Species::purchasable().chain(Species::hidden().iter().copied()) {
            let unit = Unit::new(species);
            for binding in &unit.bindings {
                assert!(
                    registry.resolve(*binding).is_some(),
                    "{species} binding {binding:?} does not resolve"
                );
            }
            assert_eq!(unit.bindings, registry.bindings_for(species), "{species}");
        }
    }
}
