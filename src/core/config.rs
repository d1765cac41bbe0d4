//! Global constants and battle configuration.
//!
//! Stat bounds are global: every attack/health mutation is clamped to them.
//! `BattleConfig` carries the knobs the engine reads per battle.

use serde::{Deserialize, Serialize};

/// Maximum number of units on a team.
pub const MAX_TEAM_SIZE: usize = 5;

/// Lowest attack a unit can have (placeholders sit at this value).
pub const MIN_ATTACK: i32 = 0;
/// Highest attack a unit can have.
pub const MAX_ATTACK: i32 = 50;

/// Lowest health a unit can have.
pub const MIN_HEALTH: i32 = 0;
/// Highest health a unit can have.
pub const MAX_HEALTH: i32 = 50;

/// Experience of a freshly bought unit.
pub const MIN_EXPERIENCE: u8 = 1;
/// Experience cap (level 3).
pub const MAX_EXPERIENCE: u8 = 6;

/// Highest shop tier.
pub const MAX_TIER: u8 = 6;

/// Flat bonus from MEAT_BONE.
pub const MEAT_BONE_BONUS: i32 = 3;
/// Flat bonus from STEAK before the attack cap is applied.
pub const STEAK_BONUS: i32 = 20;
/// Damage MELON absorbs.
pub const MELON_BLOCK: i32 = 20;
/// Damage GARLIC absorbs.
pub const GARLIC_BLOCK: i32 = 2;
/// Splash damage CHILLI deals to the second defender.
pub const CHILLI_SPLASH: i32 = 5;

/// Ordering of `ON_BATTLE_START` triggers among units with equal attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartOrder {
    /// Side A before side B, each from rear to front.
    #[default]
    Stable,
    /// Ties are broken by the battle RNG.
    Shuffled,
}

/// Battle engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Maximum live units per side (spawns beyond this are dropped).
    pub team_size: usize,

    /// Attack-loop iterations before the battle is called a tie.
    /// Guards against boards that cannot damage each other (0-attack units).
    pub max_rounds: u32,

    /// Tie-break policy for battle-start ordering.
    pub start_order: StartOrder,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            team_size: MAX_TEAM_SIZE,
            max_rounds: 200,
            start_order: StartOrder::Stable,
        }
    }
}

impl BattleConfig {
    /// Set the team capacity.
    #[must_use]
    pub fn with_team_size(mut self, team_size: usize) -> Self {
        self.team_size = team_size;
        self
    }

    /// Set the stalemate guard.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Set the battle-start tie-break policy.
    #[must_use]
    pub fn with_start_order(mut self, start_order: StartOrder) -> Self {
        self.start_order = start_order;
        self
    }
}
