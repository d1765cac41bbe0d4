//! Tier 2: snail, crab, swan, rat, hedgehog, peacock, flamingo, worm,
//! kangaroo, spider.

use crate::battle::{Arena, BattleOutcome};
use crate::effects::targeting;
use crate::shop::Food;
use crate::triggers::{Activation, EventKind, FaintArgs, Handler, ShopArgs};
use crate::units::{Species, Unit};

use super::{ceil_half, Entry};

pub(super) static ENTRIES: &[Entry] = &[
    (Species::Snail, EventKind::EndTurn, Handler::EndTurn(snail)),
    (Species::Crab, EventKind::BattleStart, Handler::Combat(crab)),
    (Species::Swan, EventKind::TurnStart, Handler::Shop(swan)),
    (Species::Rat, EventKind::Faint, Handler::Faint(rat)),
    (Species::Hedgehog, EventKind::Faint, Handler::Faint(hedgehog)),
    (Species::Peacock, EventKind::Hurt, Handler::Combat(peacock)),
    (Species::Flamingo, EventKind::Faint, Handler::Faint(flamingo)),
    (Species::Worm, EventKind::TurnStart, Handler::Shop(worm)),
    (Species::Kangaroo, EventKind::FriendAheadAttacks, Handler::Combat(kangaroo)),
    (Species::Spider, EventKind::Faint, Handler::Faint(spider)),
];

fn snail(arena: &mut Arena<'_>, act: &Activation, last: Option<BattleOutcome>) {
    if last != Some(BattleOutcome::Loss) {
        return;
    }
    for friend in arena.roll_call(act.side) {
        if friend.id != act.id() {
            arena.buff(act.side, friend.id, act.level(), act.level());
        }
    }
}

/// Copy half the health of the healthiest other friend.
fn crab(arena: &mut Arena<'_>, act: &Activation) {
    let best = arena
        .units(act.side)
        .iter()
        .filter(|u| u.id != act.id() && !u.is_placeholder())
        .map(|u| u.health)
        .max();

    if let (Some(health), Some(crab)) = (best, arena.unit_mut(act.side, act.id())) {
        crab.set_health(ceil_half(i32::from(act.level), health));
    }
}

fn swan(arena: &mut Arena<'_>, act: &Activation, _: &ShopArgs) {
    if let Some(hooks) = arena.hooks() {
        hooks.add_gold(act.level());
    }
}

/// Give the enemy L 1/1 rats at its front.
fn rat(arena: &mut Arena<'_>, act: &Activation, _: &FaintArgs) {
    if !arena.is_battle() {
        return;
    }
    let enemy = act.side.opponent();
    for _ in 0..act.level {
        let front = arena.units(enemy).len();
        arena.spawn(enemy, Unit::with_stats(Species::RatSpawn, 1, 1), front);
    }
}

/// 2L damage to every unit on both sides.
fn hedgehog(arena: &mut Arena<'_>, act: &Activation, _: &FaintArgs) {
    let damage = 2 * act.level();
    for side in [act.side, act.side.opponent()] {
        for unit in arena.roll_call(side) {
            arena.damage(side, unit.id, damage, act.side, &act.unit);
        }
    }
}

fn peacock(arena: &mut Arena<'_>, act: &Activation) {
    arena.buff(act.side, act.id(), 4 * act.level(), 0);
}

/// The two friends behind the gap gain L/L.
fn flamingo(arena: &mut Arena<'_>, act: &Activation, args: &FaintArgs) {
    let units = arena.units(act.side);
    let targets = targeting::ids(units, &targeting::behind(units, args.index, 2));
    for id in targets {
        arena.buff(act.side, id, act.level(), act.level());
    }
}

fn worm(arena: &mut Arena<'_>, _act: &Activation, _: &ShopArgs) {
    if let Some(hooks) = arena.hooks() {
        hooks.stock_food(Food::Apple);
    }
}

fn kangaroo(arena: &mut Arena<'_>, act: &Activation) {
    arena.buff(act.side, act.id(), act.level(), act.level());
}

/// Summon a random tier-3 species as a 2/2 at the spider's level.
fn spider(arena: &mut Arena<'_>, act: &Activation, args: &FaintArgs) {
    let Some(&species) = arena.rng().choose(Species::of_tier(3)) else {
        return;
    };
    let spawn = Unit::with_stats(species, 2, 2).at_level(act.level);
    arena.spawn(act.side, spawn, args.index);
}

#[cfg(test)]
mod tests {
    use super::super::in_battle;
    use crate::core::Side;
    use crate::triggers::{EventArgs, EventKind};
    use crate::units::{Species, Unit};

    #[test]
    fn test_crab_copies_half_health() {
        let a = vec![
            Unit::with_stats(Species::Pig, 1, 9),
            Unit::new(Species::Crab).at_level(2),
        ];
        in_battle(a, vec![Unit::new(Species::Ant)], |arena| {
            let crab = arena.units(Side::A)[1].clone();
            arena.fire(Side::A, &crab, EventKind::BattleStart, &EventArgs::Combat);
            assert_eq!(arena.units(Side::A)[1].health, 9);
        });
    }

    #[test]
    fn test_hedgehog_hits_everyone() {
        let a = vec![
            Unit::with_stats(Species::Pig, 1, 5),
            Unit::with_stats(Species::Hedgehog, 3, 2),
        ];
        let b = vec![Unit::with_stats(Species::Pig, 1, 2), Unit::with_stats(Species::Pig, 1, 3)];
        in_battle(a, b, |arena| {
            arena.faint(Side::A, 1);
            assert_eq!(arena.units(Side::A)[0].health, 3);
            assert_eq!(arena.units(Side::B).len(), 1);
            assert_eq!(arena.units(Side::B)[0].health, 1);
        });
    }

    #[test]
    fn test_rat_feeds_the_enemy_front() {
        let a = vec![Unit::new(Species::Rat).at_level(2)];
        let b = vec![Unit::with_stats(Species::Pig, 3, 10)];
        in_battle(a, b, |arena| {
            arena.faint(Side::A, 0);
            let enemy: Vec<Species> = arena.units(Side::B).iter().map(|u| u.species).collect();
            assert_eq!(enemy, [Species::Pig, Species::RatSpawn, Species::RatSpawn]);
        });
    }

    #[test]
    fn test_spider_summons_tier_three() {
        let a = vec![Unit::with_stats(Species::Spider, 2, 1)];
        let b = vec![Unit::with_stats(Species::Pig, 3, 10)];
        in_battle(a, b, |arena| {
            arena.faint(Side::A, 0);
            let summoned = &arena.units(Side::A)[0];
            assert_eq!(summoned.species.tier(), 3);
            assert_eq!((summoned.attack, summoned.health), (2, 2));
        });
    }
}
