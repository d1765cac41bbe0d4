//! Event kinds and their argument shapes.
//!
//! Every ability reacts to exactly one `EventKind`. Each kind has a fixed
//! argument `Shape`; handlers are tagged with the shape they accept and the
//! registry refuses to bind a handler to a kind of a different shape.
//!
//! ## Shapes
//!
//! | shape | arguments | kinds |
//! |---|---|---|
//! | `Shop` | optional friend | sell, buy, turn start, level up, friend bought, ate food, friend ate food |
//! | `EndTurn` | last battle outcome | end turn |
//! | `Combat` | none | battle start, before/after attack, friend ahead attacks, hurt, friend hurt, knock out, friend ahead faints |
//! | `Faint` | index + fainted unit | faint, friend faints |
//! | `Summon` | summoned unit | friend summoned |

use serde::{Deserialize, Serialize};

use crate::battle::BattleOutcome;
use crate::core::UnitId;
use crate::units::Unit;

/// The events a unit can react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKind {
    // Shop phase
    Sell,
    Buy,
    TurnStart,
    EndTurn,
    LevelUp,
    FriendBought,
    AteFood,
    FriendAteFood,

    // Battle
    BattleStart,
    BeforeAttack,
    AfterAttack,
    FriendAheadAttacks,
    Hurt,
    FriendHurt,
    KnockOut,

    // Either
    Faint,
    FriendFaints,
    FriendAheadFaints,
    FriendSummoned,
}

impl EventKind {
    /// All event kinds.
    pub const ALL: [EventKind; 19] = [
        EventKind::Sell,
        EventKind::Buy,
        EventKind::TurnStart,
        EventKind::EndTurn,
        EventKind::LevelUp,
        EventKind::FriendBought,
        EventKind::AteFood,
        EventKind::FriendAteFood,
        EventKind::BattleStart,
        EventKind::BeforeAttack,
        EventKind::AfterAttack,
        EventKind::FriendAheadAttacks,
        EventKind::Hurt,
        EventKind::FriendHurt,
        EventKind::KnockOut,
        EventKind::Faint,
        EventKind::FriendFaints,
        EventKind::FriendAheadFaints,
        EventKind::FriendSummoned,
    ];

    /// The argument shape handlers for this kind receive.
    #[must_use]
    pub const fn shape(self) -> Shape {
        match self {
            EventKind::Sell
            | EventKind::Buy
            | EventKind::TurnStart
            | EventKind::LevelUp
            | EventKind::FriendBought
            | EventKind::AteFood
            | EventKind::FriendAteFood => Shape::Shop,
            EventKind::EndTurn => Shape::EndTurn,
            EventKind::BattleStart
            | EventKind::BeforeAttack
            | EventKind::AfterAttack
            | EventKind::FriendAheadAttacks
            | EventKind::Hurt
            | EventKind::FriendHurt
            | EventKind::KnockOut
            | EventKind::FriendAheadFaints => Shape::Combat,
            EventKind::Faint | EventKind::FriendFaints => Shape::Faint,
            EventKind::FriendSummoned => Shape::Summon,
        }
    }

    /// Can a tiger behind the unit repeat this event's abilities in battle?
    #[must_use]
    pub const fn is_amplifiable(self) -> bool {
        matches!(
            self,
            EventKind::BattleStart
                | EventKind::Hurt
                | EventKind::Faint
                | EventKind::BeforeAttack
                | EventKind::AfterAttack
                | EventKind::FriendAheadAttacks
                | EventKind::FriendHurt
                | EventKind::FriendFaints
                | EventKind::FriendAheadFaints
                | EventKind::FriendSummoned
                | EventKind::KnockOut
        )
    }
}

/// Argument shape of a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Shop,
    EndTurn,
    Combat,
    Faint,
    Summon,
}

/// Arguments for shop-phase events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShopArgs {
    /// The other unit involved (the friend bought or fed), if any.
    pub friend: Option<UnitId>,
}

/// Arguments for faint events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaintArgs {
    /// Position the fainted unit occupied before removal.
    pub index: usize,
    /// The fainted unit as it was when it fainted.
    pub fainted: Unit,
}

/// Arguments for summon events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummonArgs {
    /// The unit that was just placed.
    pub summoned: UnitId,
}

/// Arguments passed to the dispatcher, one variant per shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventArgs {
    Shop(ShopArgs),
    EndTurn(Option<BattleOutcome>),
    Combat,
    Faint(FaintArgs),
    Summon(SummonArgs),
}

impl EventArgs {
    /// The shape these arguments satisfy.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            EventArgs::Shop(_) => Shape::Shop,
            EventArgs::EndTurn(_) => Shape::EndTurn,
            EventArgs::Combat => Shape::Combat,
            EventArgs::Faint(_) => Shape::Faint,
            EventArgs::Summon(_) => Shape::Summon,
        }
    }

    /// Shop arguments with no friend.
    #[must_use]
    pub const fn shop() -> Self {
        EventArgs::Shop(ShopArgs { friend: None })
    }

    /// Shop arguments naming a friend.
    #[must_use]
    pub const fn with_friend(friend: UnitId) -> Self {
        EventArgs::Shop(ShopArgs {
            friend: Some(friend),
        })
    }

    /// The pre-removal index for faint events.
    #[must_use]
    pub fn faint_index(&self) -> Option<usize> {
        match self {
            EventArgs::Faint(args) => Some(args.index),
            _ => None,
        }
    }
}
