//! Species - the static identity of a unit.
//!
//! A `Species` fixes a unit's shop tier, its base stats, and (through the
//! ability catalog) which events it reacts to. Everything that changes during
//! play lives on `Unit`.
//!
//! ## Hidden species
//!
//! Some species never appear in a shop. They are only created by abilities
//! or held effects (`Bee`, `Ram`, `ZombieFly`, ...). They report tier 0.
//!
//! `Species::None` is the placeholder occupying empty shop slots.

use serde::{Deserialize, Serialize};

/// Every species the engine knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    /// Empty roster slot.
    None,

    // Tier 1
    Duck,
    Beaver,
    Pigeon,
    Otter,
    Pig,
    Ant,
    Mosquito,
    Fish,
    Cricket,
    Horse,

    // Tier 2
    Snail,
    Crab,
    Swan,
    Rat,
    Hedgehog,
    Peacock,
    Flamingo,
    Worm,
    Kangaroo,
    Spider,

    // Tier 3
    Dodo,
    Badger,
    Dolphin,
    Giraffe,
    Elephant,
    Camel,
    Rabbit,
    Ox,
    Dog,
    Sheep,

    // Tier 4
    Skunk,
    Hippo,
    Bison,
    Blowfish,
    Turtle,
    Squirrel,
    Penguin,
    Deer,
    Whale,
    Parrot,

    // Tier 5
    Scorpion,
    Crocodile,
    Rhino,
    Monkey,
    Armadillo,
    Cow,
    Seal,
    Rooster,
    Shark,
    Turkey,

    // Tier 6
    Leopard,
    Boar,
    Tiger,
    Wolverine,
    Gorilla,
    Dragon,
    Mammoth,
    Cat,
    Snake,
    Fly,

    // Hidden
    Bee,
    CricketSpawn,
    RatSpawn,
    Ram,
    Bus,
    ZombieFly,
    Chick,
}

const TIER_1: [Species; 10] = [
    Species::Duck,
    Species::Beaver,
    Species::Pigeon,
    Species::Otter,
    Species::Pig,
    Species::Ant,
    Species::Mosquito,
    Species::Fish,
    Species::Cricket,
    Species::Horse,
];

const TIER_2: [Species; 10] = [
    Species::Snail,
    Species::Crab,
    Species::Swan,
    Species::Rat,
    Species::Hedgehog,
    Species::Peacock,
    Species::Flamingo,
    Species::Worm,
    Species::Kangaroo,
    Species::Spider,
];

const TIER_3: [Species; 10] = [
    Species::Dodo,
    Species::Badger,
    Species::Dolphin,
    Species::Giraffe,
    Species::Elephant,
    Species::Camel,
    Species::Rabbit,
    Species::Ox,
    Species::Dog,
    Species::Sheep,
];

const TIER_4: [Species; 10] = [
    Species::Skunk,
    Species::Hippo,
    Species::Bison,
    Species::Blowfish,
    Species::Turtle,
    Species::Squirrel,
    Species::Penguin,
    Species::Deer,
    Species::Whale,
    Species::Parrot,
];

const TIER_5: [Species; 10] = [
    Species::Scorpion,
    Species::Crocodile,
    Species::Rhino,
    Species::Monkey,
    Species::Armadillo,
    Species::Cow,
    Species::Seal,
    Species::Rooster,
    Species::Shark,
    Species::Turkey,
];

const TIER_6: [Species; 10] = [
    Species::Leopard,
    Species::Boar,
    Species::Tiger,
    Species::Wolverine,
    Species::Gorilla,
    Species::Dragon,
    Species::Mammoth,
    Species::Cat,
    Species::Snake,
    Species::Fly,
];

const HIDDEN: [Species; 7] = [
    Species::Bee,
    Species::CricketSpawn,
    Species::RatSpawn,
    Species::Ram,
    Species::Bus,
    Species::ZombieFly,
    Species::Chick,
];

impl Species {
    /// Species that can be offered by a shop, grouped by tier.
    #[must_use]
    pub fn of_tier(tier: u8) -> &'static [Species] {
        match tier {
            1 => &TIER_1,
            2 => &TIER_2,
            3 => &TIER_3,
            4 => &TIER_4,
            5 => &TIER_5,
            6 => &TIER_6,
            _ => &[],
        }
    }

    /// Spawn-only species.
    #[must_use]
    pub fn hidden() -> &'static [Species] {
        &HIDDEN
    }

    /// Every purchasable species, tier 1 first.
    pub fn purchasable() -> impl Iterator<Item = Species> {
        (1..=crate::core::config::MAX_TIER).flat_map(|tier| Species::of_tier(tier).iter().copied())
    }

    /// Shop tier (1-6), or 0 for hidden species and the placeholder.
    #[must_use]
    pub fn tier(self) -> u8 {
        (1..=crate::core::config::MAX_TIER)
            .find(|&tier| Species::of_tier(tier).contains(&self))
            .unwrap_or(0)
    }

    /// Is this the empty-slot placeholder?
    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Species::None)
    }

    /// Is this a spawn-only species?
    #[must_use]
    pub fn is_hidden(self) -> bool {
        HIDDEN.contains(&self)
    }

    /// Base `(attack, health)` of a freshly created unit.
    #[must_use]
    pub const fn base_stats(self) -> (i32, i32) {
        match self {
            Species::None => (0, 0),

            Species::Duck => (2, 3),
            Species::Beaver => (3, 2),
            Species::Pigeon => (3, 1),
            Species::Otter => (1, 3),
            Species::Pig => (4, 1),
            Species::Ant => (2, 2),
            Species::Mosquito => (2, 2),
            Species::Fish => (2, 2),
            Species::Cricket => (1, 2),
            Species::Horse => (2, 1),

            Species::Snail => (2, 2),
            Species::Crab => (4, 1),
            Species::Swan => (1, 2),
            Species::Rat => (4, 5),
            Species::Hedgehog => (3, 2),
            Species::Peacock => (2, 5),
            Species::Flamingo => (4, 2),
            Species::Worm => (3, 3),
            Species::Kangaroo => (2, 3),
            Species::Spider => (2, 2),

            Species::Dodo => (4, 2),
            Species::Badger => (6, 3),
            Species::Dolphin => (4, 3),
            Species::Giraffe => (1, 3),
            Species::Elephant => (3, 7),
            Species::Camel => (2, 4),
            Species::Rabbit => (1, 2),
            Species::Ox => (1, 3),
            Species::Dog => (3, 2),
            Species::Sheep => (2, 2),

            Species::Skunk => (3, 5),
            Species::Hippo => (4, 5),
            Species::Bison => (4, 4),
            Species::Blowfish => (3, 5),
            Species::Turtle => (1, 2),
            Species::Squirrel => (2, 5),
            Species::Penguin => (1, 1),
            Species::Deer => (1, 1),
            Species::Whale => (3, 8),
            Species::Parrot => (4, 2),

            Species::Scorpion => (1, 1),
            Species::Crocodile => (8, 4),
            Species::Rhino => (5, 8),
            Species::Monkey => (1, 2),
            Species::Armadillo => (2, 6),
            Species::Cow => (4, 6),
            Species::Seal => (3, 8),
            Species::Rooster => (5, 3),
            Species::Shark => (4, 4),
            Species::Turkey => (3, 4),

            Species::Leopard => (10, 4),
            Species::Boar => (10, 6),
            Species::Tiger => (4, 3),
            Species::Wolverine => (5, 4),
            Species::Gorilla => (6, 9),
            Species::Dragon => (6, 8),
            Species::Mammoth => (3, 10),
            Species::Cat => (4, 5),
            Species::Snake => (6, 6),
            Species::Fly => (5, 5),

            Species::Bee => (1, 1),
            Species::CricketSpawn => (1, 1),
            Species::RatSpawn => (1, 1),
            Species::Ram => (2, 2),
            Species::Bus => (5, 5),
            Species::ZombieFly => (4, 4),
            Species::Chick => (1, 1),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_has_ten_species() {
        for tier in 1..=6 {
            assert_eq!(Species::of_tier(tier).len(), 10, "tier {tier}");
        }
        assert_eq!(Species::purchasable().count(), 60);
    }

    #[test]
    fn test_tier_lookup() {
        assert_eq!(Species::Duck.tier(), 1);
        assert_eq!(Species::Dodo.tier(), 3);
        assert_eq!(Species::Tiger.tier(), 6);
        assert_eq!(Species::Bee.tier(), 0);
        assert_eq!(Species::None.tier(), 0);
    }

    #[test]
    fn test_hidden_species() {
        assert!(Species::Ram.is_hidden());
        assert!(!Species::Sheep.is_hidden());
        assert!(!Species::None.is_hidden());
        assert!(Species::None.is_placeholder());
    }

    #[test]
    fn test_base_stats_within_bounds() {
        for species in Species::purchasable().chain(Species::hidden().iter().copied()) {
            let (attack, health) = species.base_stats();
            assert!(attack >= 1 && attack <= 50, "{species}");
            assert!(health >= 1 && health <= 50, "{species}");
        }
    }
}
