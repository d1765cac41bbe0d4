//! Tier 5: crocodile, rhino, monkey, armadillo, cow, seal, rooster, shark,
//! turkey.

use crate::battle::{Arena, BattleOutcome};
use crate::effects::targeting;
use crate::shop::Food;
use crate::triggers::{Activation, EventKind, FaintArgs, Handler, ShopArgs, SummonArgs};
use crate::units::{Species, Unit};

use super::Entry;

pub(super) static ENTRIES: &[Entry] = &[
    (Species::Crocodile, EventKind::BattleStart, Handler::Combat(crocodile)),
    (Species::Rhino, EventKind::KnockOut, Handler::Combat(rhino)),
    (Species::Monkey, EventKind::EndTurn, Handler::EndTurn(monkey)),
    (Species::Armadillo, EventKind::BattleStart, Handler::Combat(armadillo)),
    (Species::Cow, EventKind::Buy, Handler::Shop(cow)),
    (Species::Seal, EventKind::AteFood, Handler::Shop(seal)),
    (Species::Rooster, EventKind::Faint, Handler::Faint(rooster)),
    (Species::Shark, EventKind::FriendFaints, Handler::Faint(shark)),
    (Species::Turkey, EventKind::FriendSummoned, Handler::Summon(turkey)),
];

/// 8 damage to the enemy front, L times.
fn crocodile(arena: &mut Arena<'_>, act: &Activation) {
    let enemy = act.side.opponent();
    for _ in 0..act.level {
        let Some(front) = arena.front(enemy) else {
            break;
        };
        let target = arena.units(enemy)[front].id;
        arena.damage(enemy, target, 8, act.side, &act.unit);
    }
}

/// 4L damage to the enemy front, doubled against tier 1.
fn rhino(arena: &mut Arena<'_>, act: &Activation) {
    let enemy = act.side.opponent();
    let Some(front) = arena.front(enemy) else {
        return;
    };
    let target = &arena.units(enemy)[front];
    let mut damage = 4 * act.level();
    if target.species.tier() == 1 {
        damage *= 2;
    }
    let target = target.id;
    arena.damage(enemy, target, damage, act.side, &act.unit);
}

/// The frontmost other friend gains 2L/2L.
fn monkey(arena: &mut Arena<'_>, act: &Activation, _: Option<BattleOutcome>) {
    let units = arena.units(act.side);
    let front = targeting::occupied(units)
        .rev()
        .map(|i| units[i].id)
        .find(|&id| id != act.id());
    if let Some(id) = front {
        arena.buff(act.side, id, 2 * act.level(), 2 * act.level());
    }
}

/// Every other unit on the field gains L health.
fn armadillo(arena: &mut Arena<'_>, act: &Activation) {
    for side in [act.side, act.side.opponent()] {
        for unit in arena.roll_call(side) {
            if unit.id != act.id() {
                arena.buff(side, unit.id, 0, act.level());
            }
        }
    }
}

/// Replace the food shop with L+1 milks.
fn cow(arena: &mut Arena<'_>, act: &Activation, _: &ShopArgs) {
    let milks = vec![Food::Milk; usize::from(act.level) + 1];
    if let Some(hooks) = arena.hooks() {
        hooks.replace_food(&milks);
    }
}

fn seal(arena: &mut Arena<'_>, act: &Activation, _: &ShopArgs) {
    for id in arena.random_units(act.side, usize::from(act.level), Some(act.id())) {
        arena.buff(act.side, id, 1, 1);
    }
}

/// L chicks with half the rooster's attack and 1 health.
fn rooster(arena: &mut Arena<'_>, act: &Activation, args: &FaintArgs) {
    let attack = (args.fainted.attack + 1) / 2;
    for _ in 0..act.level {
        arena.spawn(act.side, Unit::with_stats(Species::Chick, attack, 1), args.index);
    }
}

fn shark(arena: &mut Arena<'_>, act: &Activation, _: &FaintArgs) {
    arena.buff(act.side, act.id(), act.level(), 2 * act.level());
}

fn turkey(arena: &mut Arena<'_>, act: &Activation, args: &SummonArgs) {
    arena.buff(act.side, args.summoned, 3 * act.level(), 3 * act.level());
}
