//! Error types.
//!
//! Only registry construction can fail at runtime. Everything the battle
//! engine does is total over valid rosters; broken invariants (a shop spawn
//! with no free slot) panic instead of surfacing here.

use thiserror::Error;

use crate::triggers::{EventKind, Shape};
use crate::units::Species;

/// Configuration errors detected while building an `AbilityRegistry`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{species:?} handler for {kind:?} takes {found:?} arguments, but {kind:?} requires {expected:?}")]
    ShapeMismatch {
        species: Species,
        kind: EventKind,
        expected: Shape,
        found: Shape,
    },

    #[error("{species:?} has more than {max} handlers bound to {kind:?}")]
    TooManyHandlers {
        species: Species,
        kind: EventKind,
        max: usize,
    },
}

/// Errors from encoding or decoding stored rosters.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("roster codec failed: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("decoded roster has {found} slots, expected {expected}")]
    WrongSize { found: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
