//! Tier 3: dodo, badger, dolphin, giraffe, elephant, camel, rabbit, ox, dog,
//! sheep.

use crate::battle::{Arena, BattleOutcome};
use crate::core::{Side, UnitId};
use crate::effects::{targeting, Effect};
use crate::triggers::{Activation, EventKind, FaintArgs, Handler, ShopArgs, SummonArgs};
use crate::units::{Species, Unit};

use super::{ahead_of_gap, ceil_half, Entry};

/// Rabbit buffs allowed per turn.
const RABBIT_LIMIT: u8 = 4;

pub(super) static ENTRIES: &[Entry] = &[
    (Species::Dodo, EventKind::BattleStart, Handler::Combat(dodo)),
    (Species::Badger, EventKind::Faint, Handler::Faint(badger)),
    (Species::Dolphin, EventKind::BattleStart, Handler::Combat(dolphin)),
    (Species::Giraffe, EventKind::EndTurn, Handler::EndTurn(giraffe)),
    (Species::Elephant, EventKind::AfterAttack, Handler::Combat(elephant)),
    (Species::Camel, EventKind::Hurt, Handler::Combat(camel)),
    (Species::Rabbit, EventKind::FriendAteFood, Handler::Shop(rabbit)),
    (Species::Ox, EventKind::FriendAheadFaints, Handler::Combat(ox)),
    (Species::Dog, EventKind::FriendSummoned, Handler::Summon(dog)),
    (Species::Sheep, EventKind::Faint, Handler::Faint(sheep)),
];

/// Ids of up to `amount` friends ahead of the activating unit.
fn friends_ahead(arena: &Arena<'_>, act: &Activation, amount: usize) -> Vec<UnitId> {
    let units = arena.units(act.side);
    match arena.position(act.side, act.id()) {
        Some(index) => targeting::ids(units, &targeting::ahead(units, index, amount)),
        None => Vec::new(),
    }
}

/// Ids of up to `amount` friends behind the activating unit.
fn friends_behind(arena: &Arena<'_>, act: &Activation, amount: usize) -> Vec<UnitId> {
    let units = arena.units(act.side);
    match arena.position(act.side, act.id()) {
        Some(index) => targeting::ids(units, &targeting::behind(units, index, amount)),
        None => Vec::new(),
    }
}

/// The friend ahead gains half the dodo's attack.
fn dodo(arena: &mut Arena<'_>, act: &Activation) {
    let bonus = ceil_half(act.level(), act.unit.attack);
    for id in friends_ahead(arena, act, 1) {
        arena.buff(act.side, id, bonus, 0);
    }
}

/// Hit the units on both sides of the gap. A badger that was frontmost
/// hits the enemy front instead of the friend ahead.
fn badger(arena: &mut Arena<'_>, act: &Activation, args: &FaintArgs) {
    let damage = ceil_half(act.level(), args.fainted.attack);
    let units = arena.units(act.side);

    let mut targets: Vec<(Side, UnitId)> = targeting::behind(units, args.index, 1)
        .into_iter()
        .map(|i| (act.side, units[i].id))
        .collect();

    match ahead_of_gap(units, args.index, 1).first() {
        Some(&i) => targets.push((act.side, units[i].id)),
        None => {
            let enemy = act.side.opponent();
            if let Some(front) = arena.front(enemy) {
                targets.push((enemy, arena.units(enemy)[front].id));
            }
        }
    }

    for (side, id) in targets {
        arena.damage(side, id, damage, act.side, &act.unit);
    }
}

/// 3 damage to the lowest-health enemy, L times.
fn dolphin(arena: &mut Arena<'_>, act: &Activation) {
    let enemy = act.side.opponent();
    for _ in 0..act.level {
        let Some(target) = targeting::lowest_health(arena.units(enemy)) else {
            break;
        };
        arena.damage(enemy, target, 3, act.side, &act.unit);
    }
}

fn giraffe(arena: &mut Arena<'_>, act: &Activation, _: Option<BattleOutcome>) {
    for id in friends_ahead(arena, act, usize::from(act.level)) {
        arena.buff(act.side, id, 1, 1);
    }
}

/// 1 damage to the L friends behind.
fn elephant(arena: &mut Arena<'_>, act: &Activation) {
    for id in friends_behind(arena, act, usize::from(act.level)) {
        arena.damage(act.side, id, 1, act.side, &act.unit);
    }
}

fn camel(arena: &mut Arena<'_>, act: &Activation) {
    for id in friends_behind(arena, act, 1) {
        arena.buff(act.side, id, act.level(), 2 * act.level());
    }
}

/// The friend that ate gains L health, at most four times a turn.
fn rabbit(arena: &mut Arena<'_>, act: &Activation, args: &ShopArgs) {
    let Some(eater) = args.friend else {
        return;
    };
    let Some(rabbit) = arena.unit_mut(act.side, act.id()) else {
        return;
    };
    if rabbit.counters.rabbit_buffs_this_turn >= RABBIT_LIMIT {
        return;
    }
    rabbit.counters.rabbit_buffs_this_turn += 1;
    arena.buff(act.side, eater, 0, act.level());
}

/// Gain a melon and L attack, at most L times a turn.
fn ox(arena: &mut Arena<'_>, act: &Activation) {
    let level = act.level;
    let Some(ox) = arena.unit_mut(act.side, act.id()) else {
        return;
    };
    if ox.counters.ox_buffs_this_turn >= level {
        return;
    }
    ox.counters.ox_buffs_this_turn += 1;
    ox.effect = Some(Effect::Melon);
    ox.add_stats(i32::from(level), 0);
}

/// Gain L attack or L health, at random.
fn dog(arena: &mut Arena<'_>, act: &Activation, _: &SummonArgs) {
    let (attack, health) = if arena.rng().gen_bool(0.5) {
        (act.level(), 0)
    } else {
        (0, act.level())
    };
    arena.buff(act.side, act.id(), attack, health);
}

/// Two 2L/2L rams.
fn sheep(arena: &mut Arena<'_>, act: &Activation, args: &FaintArgs) {
    let stats = 2 * act.level();
    for _ in 0..2 {
        arena.spawn(act.side, Unit::with_stats(Species::Ram, stats, stats), args.index);
    }
}

#[cfg(test)]
mod tests {
    use super::super::in_battle;
    use crate::core::Side;
    use crate::effects::Effect;
    use crate::triggers::{EventArgs, EventKind};
    use crate::units::{Species, Unit};

    #[test]
    fn test_dodo_shares_attack_forward() {
        let a = vec![
            Unit::with_stats(Species::Dodo, 5, 3),
            Unit::with_stats(Species::Pig, 1, 1),
        ];
        in_battle(a, vec![Unit::new(Species::Ant)], |arena| {
            let dodo = arena.units(Side::A)[0].clone();
            arena.fire(Side::A, &dodo, EventKind::BattleStart, &EventArgs::Combat);
            assert_eq!(arena.units(Side::A)[1].attack, 4);
        });
    }

    #[test]
    fn test_frontmost_badger_hits_enemy_front() {
        let a = vec![
            Unit::with_stats(Species::Pig, 1, 10),
            Unit::with_stats(Species::Badger, 6, 1),
        ];
        let b = vec![Unit::with_stats(Species::Pig, 1, 10)];
        in_battle(a, b, |arena| {
            arena.faint(Side::A, 1);
            assert_eq!(arena.units(Side::A)[0].health, 7);
            assert_eq!(arena.units(Side::B)[0].health, 7);
        });
    }

    #[test]
    fn test_dolphin_picks_lowest_health() {
        let a = vec![Unit::new(Species::Dolphin).at_level(2)];
        let b = vec![
            Unit::with_stats(Species::Pig, 1, 4),
            Unit::with_stats(Species::Pig, 1, 9),
        ];
        in_battle(a, b, |arena| {
            let dolphin = arena.units(Side::A)[0].clone();
            arena.fire(Side::A, &dolphin, EventKind::BattleStart, &EventArgs::Combat);
            // First shot 4 -> 1, second shot finishes it.
            let healths: Vec<i32> = arena.units(Side::B).iter().map(|u| u.health).collect();
            assert_eq!(healths, [9]);
        });
    }

    #[test]
    fn test_ox_is_rate_limited() {
        let a = vec![Unit::with_stats(Species::Ox, 1, 5), Unit::with_stats(Species::Pig, 1, 1)];
        in_battle(a, vec![Unit::new(Species::Ant)], |arena| {
            let ox = arena.units(Side::A)[0].clone();
            arena.fire(Side::A, &ox, EventKind::FriendAheadFaints, &EventArgs::Combat);
            arena.fire(Side::A, &ox, EventKind::FriendAheadFaints, &EventArgs::Combat);

            let ox = &arena.units(Side::A)[0];
            assert_eq!(ox.effect, Some(Effect::Melon));
            assert_eq!(ox.attack, 2);
            assert_eq!(ox.counters.ox_buffs_this_turn, 1);
        });
    }

    #[test]
    fn test_sheep_leaves_two_rams() {
        let a = vec![Unit::new(Species::Sheep)];
        in_battle(a, vec![Unit::new(Species::Ant)], |arena| {
            arena.faint(Side::A, 0);
            let rams: Vec<(Species, i32)> =
                arena.units(Side::A).iter().map(|u| (u.species, u.attack)).collect();
            assert_eq!(rams, [(Species::Ram, 2), (Species::Ram, 2)]);
        });
    }
}
