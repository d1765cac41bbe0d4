//! Tier 1: duck, beaver, pigeon, otter, pig, ant, mosquito, fish, cricket,
//! horse.

use crate::battle::Arena;
use crate::triggers::{Activation, EventKind, FaintArgs, Handler, ShopArgs, SummonArgs};
use crate::units::{Species, Unit};

use crate::shop::Food;

use super::Entry;

pub(super) static ENTRIES: &[Entry] = &[
    (Species::Duck, EventKind::Sell, Handler::Shop(duck)),
    (Species::Beaver, EventKind::Sell, Handler::Shop(beaver)),
    (Species::Pigeon, EventKind::Sell, Handler::Shop(pigeon)),
    (Species::Otter, EventKind::Buy, Handler::Shop(otter)),
    (Species::Pig, EventKind::Sell, Handler::Shop(pig)),
    (Species::Ant, EventKind::Faint, Handler::Faint(ant)),
    (Species::Mosquito, EventKind::BattleStart, Handler::Combat(mosquito)),
    (Species::Fish, EventKind::LevelUp, Handler::Shop(fish)),
    (Species::Cricket, EventKind::Faint, Handler::Faint(cricket)),
    (Species::Horse, EventKind::FriendSummoned, Handler::Summon(horse)),
];

/// Shop units gain L health.
fn duck(arena: &mut Arena<'_>, act: &Activation, _: &ShopArgs) {
    if let Some(hooks) = arena.hooks() {
        for unit in hooks.shop_units_mut() {
            unit.add_stats(0, act.level());
        }
    }
}

/// Two random friends gain L attack.
fn beaver(arena: &mut Arena<'_>, act: &Activation, _: &ShopArgs) {
    for id in arena.random_units(act.side, 2, Some(act.id())) {
        arena.buff(act.side, id, act.level(), 0);
    }
}

/// Stock L bread crumbs.
fn pigeon(arena: &mut Arena<'_>, act: &Activation, _: &ShopArgs) {
    if let Some(hooks) = arena.hooks() {
        for _ in 0..act.level {
            hooks.stock_food(Food::BreadCrumb);
        }
    }
}

/// L random friends gain 1 health.
fn otter(arena: &mut Arena<'_>, act: &Activation, _: &ShopArgs) {
    for id in arena.random_units(act.side, usize::from(act.level), Some(act.id())) {
        arena.buff(act.side, id, 0, 1);
    }
}

/// Gain L extra gold.
fn pig(arena: &mut Arena<'_>, act: &Activation, _: &ShopArgs) {
    if let Some(hooks) = arena.hooks() {
        hooks.add_gold(act.level());
    }
}

/// A random friend gains L/L.
fn ant(arena: &mut Arena<'_>, act: &Activation, _: &FaintArgs) {
    for id in arena.random_units(act.side, 1, Some(act.id())) {
        arena.buff(act.side, id, act.level(), act.level());
    }
}

/// 1 damage to L random enemies.
fn mosquito(arena: &mut Arena<'_>, act: &Activation) {
    let enemy = act.side.opponent();
    for id in arena.random_units(enemy, usize::from(act.level), None) {
        arena.damage(enemy, id, 1, act.side, &act.unit);
    }
}

/// Two random friends gain (L-1)/(L-1). Runs after the level-up.
fn fish(arena: &mut Arena<'_>, act: &Activation, _: &ShopArgs) {
    let bonus = act.level() - 1;
    for id in arena.random_units(act.side, 2, Some(act.id())) {
        arena.buff(act.side, id, bonus, bonus);
    }
}

/// Summon an L/L cricket in its place.
fn cricket(arena: &mut Arena<'_>, act: &Activation, args: &FaintArgs) {
    let spawn = Unit::with_stats(Species::CricketSpawn, act.level(), act.level());
    arena.spawn(act.side, spawn, args.index);
}

/// The summoned friend gains L attack (until the end of the next battle
/// when summoned in the shop).
fn horse(arena: &mut Arena<'_>, act: &Activation, args: &SummonArgs) {
    let in_battle = arena.is_battle();
    if let Some(friend) = arena.unit_mut(act.side, args.summoned) {
        if in_battle {
            friend.add_stats(act.level(), 0);
        } else {
            friend.add_boost(act.level(), 0);
        }
    }
}
