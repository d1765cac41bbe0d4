//! Named per-ability counters.
//!
//! Some abilities are rate limited ("at most 4 times per turn") or carry
//! state between two of their own triggers (a whale remembers what it
//! swallowed). The counters live on the unit and are reset explicitly:
//!
//! - per turn by `ShopPhase::start_turn`
//! - per battle when the battle engine clones the rosters

use serde::{Deserialize, Serialize};

use super::Species;

/// Mutable bookkeeping for rate-limited abilities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityCounters {
    /// Rabbit buffs granted this turn.
    pub rabbit_buffs_this_turn: u8,
    /// Ox activations this turn.
    pub ox_buffs_this_turn: u8,

    /// Zombie flies spawned by a fly this battle.
    pub zombie_flies_spawned: u8,
    /// Friend-hurt events seen by a wolverine this battle.
    pub wolverine_hurt_count: u8,
    /// Melon shields a gorilla gained this battle.
    pub gorilla_shields_used: u8,
    /// Species a whale swallowed at battle start.
    pub swallowed: Option<Species>,
}

impl AbilityCounters {
    /// Clear the per-turn counters.
    pub fn reset_turn(&mut self) {
        self.rabbit_buffs_this_turn = 0;
        self.ox_buffs_this_turn = 0;
    }

    /// Clear the per-battle counters.
    pub fn reset_battle(&mut self) {
        self.zombie_flies_spawned = 0;
        self.wolverine_hurt_count = 0;
        self.gorilla_shields_used = 0;
        self.swallowed = None;
    }
}
