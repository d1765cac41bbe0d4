//! Tier 4: skunk, hippo, bison, blowfish, turtle, squirrel, penguin, deer,
//! whale, parrot.

use crate::battle::{Arena, BattleOutcome};
use crate::effects::{targeting, Effect};
use crate::triggers::{Activation, Binding, EventKind, FaintArgs, Handler, ShopArgs};
use crate::units::{Species, Unit};

use super::Entry;

pub(super) static ENTRIES: &[Entry] = &[
    (Species::Skunk, EventKind::BattleStart, Handler::Combat(skunk)),
    (Species::Hippo, EventKind::KnockOut, Handler::Combat(hippo)),
    (Species::Bison, EventKind::EndTurn, Handler::EndTurn(bison)),
    (Species::Blowfish, EventKind::Hurt, Handler::Combat(blowfish)),
    (Species::Turtle, EventKind::Faint, Handler::Faint(turtle)),
    (Species::Squirrel, EventKind::TurnStart, Handler::Shop(squirrel)),
    (Species::Penguin, EventKind::EndTurn, Handler::EndTurn(penguin)),
    (Species::Deer, EventKind::Faint, Handler::Faint(deer)),
    (Species::Whale, EventKind::BattleStart, Handler::Combat(whale_swallow)),
    (Species::Whale, EventKind::Faint, Handler::Faint(whale_release)),
    (Species::Parrot, EventKind::EndTurn, Handler::EndTurn(parrot)),
];

/// The healthiest enemy loses 33% of its health per level, rounded up.
fn skunk(arena: &mut Arena<'_>, act: &Activation) {
    let enemy = act.side.opponent();
    let Some(target) = targeting::highest_health(arena.units(enemy)) else {
        return;
    };
    if let Some(health) = arena.unit(enemy, target).map(|u| u.health) {
        let loss = (health * 33 * act.level() + 99) / 100;
        arena.drain(enemy, target, loss);
    }
}

fn hippo(arena: &mut Arena<'_>, act: &Activation) {
    arena.buff(act.side, act.id(), 2 * act.level(), 2 * act.level());
}

fn bison(arena: &mut Arena<'_>, act: &Activation, _: Option<BattleOutcome>) {
    let veteran = arena
        .units(act.side)
        .iter()
        .any(|u| u.id != act.id() && !u.is_placeholder() && u.level() == 3);
    if veteran {
        arena.buff(act.side, act.id(), act.level(), 2 * act.level());
    }
}

fn blowfish(arena: &mut Arena<'_>, act: &Activation) {
    let enemy = act.side.opponent();
    for id in arena.random_units(enemy, 1, None) {
        arena.damage(enemy, id, 2 * act.level(), act.side, &act.unit);
    }
}

/// L friends behind the gap gain a melon.
fn turtle(arena: &mut Arena<'_>, act: &Activation, args: &FaintArgs) {
    let units = arena.units(act.side);
    let targets = targeting::ids(units, &targeting::behind(units, args.index, usize::from(act.level)));
    for id in targets {
        if let Some(friend) = arena.unit_mut(act.side, id) {
            friend.effect = Some(Effect::Melon);
        }
    }
}

fn squirrel(arena: &mut Arena<'_>, act: &Activation, _: &ShopArgs) {
    if let Some(hooks) = arena.hooks() {
        hooks.discount_food(act.level());
    }
}

/// L random level 2+ friends gain 1/1.
fn penguin(arena: &mut Arena<'_>, act: &Activation, _: Option<BattleOutcome>) {
    let pool: Vec<_> = arena
        .units(act.side)
        .iter()
        .filter(|u| u.id != act.id() && !u.is_placeholder() && u.level() >= 2)
        .map(|u| u.id)
        .collect();

    for i in arena.rng().sample(pool.len(), usize::from(act.level)) {
        arena.buff(act.side, pool[i], 1, 1);
    }
}

/// A 5L/5L bus holding chilli.
fn deer(arena: &mut Arena<'_>, act: &Activation, args: &FaintArgs) {
    let stats = 5 * act.level();
    let bus = Unit::with_stats(Species::Bus, stats, stats).holding(Effect::Chilli);
    arena.spawn(act.side, bus, args.index);
}

/// Swallow the friend ahead.
fn whale_swallow(arena: &mut Arena<'_>, act: &Activation) {
    let Some(index) = arena.position(act.side, act.id()) else {
        return;
    };
    let Some(&ahead) = targeting::ahead(arena.units(act.side), index, 1).first() else {
        return;
    };
    let species = arena.units(act.side)[ahead].species;
    if let Some(whale) = arena.unit_mut(act.side, act.id()) {
        whale.counters.swallowed = Some(species);
    }
    arena.faint(act.side, ahead);
}

/// Release the swallowed species at the whale's level.
fn whale_release(arena: &mut Arena<'_>, act: &Activation, args: &FaintArgs) {
    if let Some(species) = args.fainted.counters.swallowed {
        arena.spawn(act.side, Unit::new(species).at_level(act.level), args.index);
    }
}

/// Copy the abilities of the friend ahead, then re-append the parrot's own
/// turn abilities so the copy repeats next turn.
fn parrot(arena: &mut Arena<'_>, act: &Activation, _: Option<BattleOutcome>) {
    let Some(index) = arena.position(act.side, act.id()) else {
        return;
    };
    let units = arena.units(act.side);
    let Some(&ahead) = targeting::ahead(units, index, 1).first() else {
        return;
    };
    let copied = units[ahead].bindings.clone();

    if let Some(parrot) = arena.unit_mut(act.side, act.id()) {
        parrot.bindings.retain(|b| is_own_turn_binding(b));
        let own = std::mem::replace(&mut parrot.bindings, copied);
        parrot.bindings.extend(own);
    }
}

fn is_own_turn_binding(binding: &Binding) -> bool {
    binding.ability.species == Species::Parrot
        && matches!(binding.kind, EventKind::EndTurn | EventKind::TurnStart)
}

#[cfg(test)]
mod tests {
    use super::super::in_battle;
    use crate::core::Side;
    use crate::triggers::{EventArgs, EventKind};
    use crate::units::{Species, Unit};

    #[test]
    fn test_skunk_never_kills() {
        let a = vec![Unit::new(Species::Skunk).at_level(3)];
        let b = vec![
            Unit::with_stats(Species::Pig, 1, 3),
            Unit::with_stats(Species::Pig, 1, 20),
        ];
        in_battle(a, b, |arena| {
            let skunk = arena.units(Side::A)[0].clone();
            arena.fire(Side::A, &skunk, EventKind::BattleStart, &EventArgs::Combat);
            let healths: Vec<i32> = arena.units(Side::B).iter().map(|u| u.health).collect();
            assert_eq!(healths, [3, 1]);
        });
    }

    #[test]
    fn test_skunk_rounds_up() {
        let a = vec![Unit::new(Species::Skunk)];
        in_battle(a, vec![Unit::with_stats(Species::Pig, 1, 10)], |arena| {
            let skunk = arena.units(Side::A)[0].clone();
            arena.fire(Side::A, &skunk, EventKind::BattleStart, &EventArgs::Combat);
            // 33% of 10 is 3.3, rounded up to 4.
            assert_eq!(arena.units(Side::B)[0].health, 6);
        });
    }

    #[test]
    fn test_whale_swallows_and_releases() {
        let a = vec![
            Unit::with_stats(Species::Whale, 3, 1).at_level(2),
            Unit::with_stats(Species::Ant, 9, 9),
        ];
        in_battle(a, vec![Unit::new(Species::Pig)], |arena| {
            let whale = arena.units(Side::A)[0].clone();
            arena.fire(Side::A, &whale, EventKind::BattleStart, &EventArgs::Combat);
            assert_eq!(arena.units(Side::A).len(), 1);

            arena.faint(Side::A, 0);
            let released = &arena.units(Side::A)[0];
            assert_eq!(released.species, Species::Ant);
            assert_eq!(released.level(), 2);
            assert_eq!(
                (released.attack, released.health),
                Species::Ant.base_stats()
            );
        });
    }

    #[test]
    fn test_deer_bus_holds_chilli() {
        let a = vec![Unit::new(Species::Deer)];
        in_battle(a, vec![Unit::new(Species::Pig)], |arena| {
            arena.faint(Side::A, 0);
            let bus = &arena.units(Side::A)[0];
            assert_eq!(bus.species, Species::Bus);
            assert_eq!((bus.attack, bus.health), (5, 5));
            assert_eq!(bus.effect, Some(crate::effects::Effect::Chilli));
        });
    }
}
