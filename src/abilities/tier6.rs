//! Tier 6: leopard, boar, wolverine, gorilla, dragon, mammoth, snake, fly.
//!
//! Tiger and cat are passive (see the module docs of `abilities`).

use crate::battle::Arena;
use crate::effects::Effect;
use crate::triggers::{Activation, EventKind, FaintArgs, Handler, ShopArgs};
use crate::units::{Species, Unit};

use super::Entry;

/// Friend-hurt events per wolverine strike.
const WOLVERINE_PERIOD: u8 = 4;

/// Zombie flies a fly can summon per battle.
const ZOMBIE_FLY_LIMIT: u8 = 3;

pub(super) static ENTRIES: &[Entry] = &[
    (Species::Leopard, EventKind::BattleStart, Handler::Combat(leopard)),
    (Species::Boar, EventKind::BeforeAttack, Handler::Combat(boar)),
    (Species::Wolverine, EventKind::FriendHurt, Handler::Combat(wolverine)),
    (Species::Gorilla, EventKind::Hurt, Handler::Combat(gorilla)),
    (Species::Dragon, EventKind::FriendBought, Handler::Shop(dragon)),
    (Species::Mammoth, EventKind::Faint, Handler::Faint(mammoth)),
    (Species::Snake, EventKind::FriendAheadAttacks, Handler::Combat(snake)),
    (Species::Fly, EventKind::FriendFaints, Handler::Faint(fly)),
];

/// Half the leopard's attack to L random enemies.
fn leopard(arena: &mut Arena<'_>, act: &Activation) {
    let enemy = act.side.opponent();
    let damage = (act.unit.attack + 1) / 2;
    for id in arena.random_units(enemy, usize::from(act.level), None) {
        arena.damage(enemy, id, damage, act.side, &act.unit);
    }
}

fn boar(arena: &mut Arena<'_>, act: &Activation) {
    arena.buff(act.side, act.id(), 4 * act.level(), 2 * act.level());
}

/// Every fourth friend hurt, all enemies lose 3L health. Never kills.
fn wolverine(arena: &mut Arena<'_>, act: &Activation) {
    let Some(wolverine) = arena.unit_mut(act.side, act.id()) else {
        return;
    };
    wolverine.counters.wolverine_hurt_count += 1;
    if wolverine.counters.wolverine_hurt_count % WOLVERINE_PERIOD != 0 {
        return;
    }

    let enemy = act.side.opponent();
    for unit in arena.roll_call(enemy) {
        arena.drain(enemy, unit.id, 3 * act.level());
    }
}

/// Gain a melon, at most L times a battle.
fn gorilla(arena: &mut Arena<'_>, act: &Activation) {
    let level = act.level;
    if let Some(gorilla) = arena.unit_mut(act.side, act.id()) {
        if gorilla.counters.gorilla_shields_used < level {
            gorilla.counters.gorilla_shields_used += 1;
            gorilla.effect = Some(Effect::Melon);
        }
    }
}

/// Buying a tier-1 species gives every other friend L/L.
fn dragon(arena: &mut Arena<'_>, act: &Activation, args: &ShopArgs) {
    let bought_tier_one = args
        .friend
        .and_then(|id| arena.unit(act.side, id))
        .is_some_and(|u| u.species.tier() == 1);
    if !bought_tier_one {
        return;
    }
    for friend in arena.roll_call(act.side) {
        if friend.id != act.id() {
            arena.buff(act.side, friend.id, act.level(), act.level());
        }
    }
}

fn mammoth(arena: &mut Arena<'_>, act: &Activation, _: &FaintArgs) {
    for friend in arena.roll_call(act.side) {
        arena.buff(act.side, friend.id, 2 * act.level(), 2 * act.level());
    }
}

/// 5L damage to a random enemy.
fn snake(arena: &mut Arena<'_>, act: &Activation) {
    let enemy = act.side.opponent();
    for id in arena.random_units(enemy, 1, None) {
        arena.damage(enemy, id, 5 * act.level(), act.side, &act.unit);
    }
}

/// A 4L/4L zombie fly where the friend fainted, three per battle.
fn fly(arena: &mut Arena<'_>, act: &Activation, args: &FaintArgs) {
    if args.fainted.species == Species::ZombieFly {
        return;
    }
    let spawned = arena
        .unit(act.side, act.id())
        .map_or(act.unit.counters.zombie_flies_spawned, |u| u.counters.zombie_flies_spawned);
    if spawned >= ZOMBIE_FLY_LIMIT {
        return;
    }

    let stats = 4 * act.level();
    let zombie = Unit::with_stats(Species::ZombieFly, stats, stats);
    if arena.spawn(act.side, zombie, args.index).is_some() {
        if let Some(fly) = arena.unit_mut(act.side, act.id()) {
            fly.counters.zombie_flies_spawned += 1;
        }
    }
}
