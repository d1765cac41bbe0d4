//! Battle engine integration tests.
//!
//! These tests run whole battles through the public API and check outcomes,
//! round counts, survivors and the battle-start ordering.

use pet_battler::battle::{resolve_battle, Arena, BattleEngine, BattleOutcome, BattleSeries};
use pet_battler::core::{BattleConfig, BattleRng, Side, StartOrder};
use pet_battler::effects::Effect;
use pet_battler::triggers::{AbilityRegistry, EventArgs, EventKind};
use pet_battler::units::{Roster, Species, Unit};

fn registry() -> AbilityRegistry {
    AbilityRegistry::standard().unwrap()
}

fn pigs(count: usize, attack: i32, health: i32) -> Vec<Unit> {
    (0..count)
        .map(|_| Unit::with_stats(Species::Pig, attack, health))
        .collect()
}

// =============================================================================
// Outcome Tests
// =============================================================================

/// Five 2/1 units against a lone 1/50: the lone unit takes 10 and wins.
#[test]
fn test_five_against_one_tank() {
    let registry = registry();
    let report = BattleEngine::new(&registry).run(
        &pigs(5, 2, 1),
        &pigs(1, 1, 50),
        &mut BattleRng::new(0),
    );

    assert_eq!(report.outcome, BattleOutcome::Loss);
    assert_eq!(report.rounds, 5);
    assert!(report.survivors[Side::A].is_empty());
    assert_eq!(report.survivors[Side::B][0].health, 40);
}

/// With 1/8 the five-unit side wins in four rounds.
#[test]
fn test_five_against_one_wins_in_four() {
    let registry = registry();
    let report = BattleEngine::new(&registry).run(
        &pigs(5, 2, 1),
        &pigs(1, 1, 8),
        &mut BattleRng::new(0),
    );

    assert_eq!(report.outcome, BattleOutcome::Win);
    assert_eq!(report.rounds, 4);
    // The defeated front still strikes back in the round it falls.
    assert_eq!(report.survivors[Side::A].len(), 1);
    assert!(!report.stalemate);
}

/// Simultaneous kills end in a tie.
#[test]
fn test_mutual_knockout_is_tie() {
    let registry = registry();
    let outcome = resolve_battle(
        &registry,
        &pigs(1, 3, 3),
        &pigs(1, 3, 3),
        &mut BattleRng::new(1),
    );
    assert_eq!(outcome, BattleOutcome::Tie);
}

/// A scorpion's innate peanut takes down any defender it damages.
#[test]
fn test_scorpion_trades_with_anything() {
    let registry = registry();
    let scorpion = vec![Unit::with_stats(Species::Scorpion, 1, 1)];
    let outcome = resolve_battle(&registry, &scorpion, &pigs(1, 1, 50), &mut BattleRng::new(0));
    assert_eq!(outcome, BattleOutcome::Tie);
}

/// Input rosters come back untouched.
#[test]
fn test_inputs_not_mutated() {
    let registry = registry();
    let a = vec![
        Unit::new(Species::Cricket),
        Unit::new(Species::Hedgehog),
        Unit::new(Species::Mosquito).holding(Effect::Garlic),
    ];
    let b = vec![Unit::new(Species::Sheep), Unit::new(Species::Dolphin)];
    let (a_before, b_before) = (a.clone(), b.clone());

    let _ = resolve_battle(&registry, &a, &b, &mut BattleRng::new(3));

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

/// Placeholders in a roster never reach the battle.
#[test]
fn test_roster_placeholders_are_skipped() {
    let registry = registry();
    let roster = Roster::from_units([Unit::with_stats(Species::Pig, 5, 5)]);
    assert_eq!(roster.capacity(), 5);

    let report = BattleEngine::new(&registry).run(
        roster.as_slice(),
        &pigs(1, 1, 1),
        &mut BattleRng::new(0),
    );
    assert_eq!(report.outcome, BattleOutcome::Win);
    assert_eq!(report.survivors[Side::A].len(), 1);
}

/// Same seed, same battle.
#[test]
fn test_battles_are_deterministic() {
    let registry = registry();
    let a = vec![
        Unit::new(Species::Mosquito),
        Unit::new(Species::Mosquito),
        Unit::new(Species::Ant),
        Unit::new(Species::Beaver),
    ];
    let b = vec![
        Unit::new(Species::Leopard),
        Unit::new(Species::Spider),
        Unit::new(Species::Blowfish),
    ];
    let engine = BattleEngine::new(&registry);

    let first = engine.run(&a, &b, &mut BattleRng::new(99));
    let second = engine.run(&a, &b, &mut BattleRng::new(99));

    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.rounds, second.rounds);
    assert_eq!(first.survivors, second.survivors);
}

// =============================================================================
// Battle Start Tests
// =============================================================================

/// The higher-attack unit fires first, whichever side it is on.
#[test]
fn test_battle_start_by_attack() {
    let registry = registry();
    let slow = vec![Unit::with_stats(Species::Mosquito, 1, 1)];
    let fast = vec![Unit::with_stats(Species::Mosquito, 2, 5)];

    let report = BattleEngine::new(&registry).run(&slow, &fast, &mut BattleRng::new(0));
    assert_eq!(report.outcome, BattleOutcome::Loss);
    assert_eq!(report.rounds, 0);
    assert_eq!(report.survivors[Side::B][0].health, 5);

    let report = BattleEngine::new(&registry).run(&fast, &slow, &mut BattleRng::new(0));
    assert_eq!(report.outcome, BattleOutcome::Win);
    assert_eq!(report.survivors[Side::A][0].health, 5);
}

/// Equal attack: side A fires before side B by default.
#[test]
fn test_battle_start_stable_ties() {
    let registry = registry();
    let a = vec![Unit::with_stats(Species::Mosquito, 1, 1)];
    let b = vec![Unit::with_stats(Species::Mosquito, 1, 1)];

    for seed in 0..8 {
        let outcome = resolve_battle(&registry, &a, &b, &mut BattleRng::new(seed));
        assert_eq!(outcome, BattleOutcome::Win);
    }
}

/// Shuffled tie-breaking lets either side go first.
#[test]
fn test_battle_start_shuffled_ties() {
    let registry = registry();
    let engine = BattleEngine::new(&registry)
        .with_config(BattleConfig::default().with_start_order(StartOrder::Shuffled));
    let a = vec![Unit::with_stats(Species::Mosquito, 1, 1)];
    let b = vec![Unit::with_stats(Species::Mosquito, 1, 1)];

    let outcomes: Vec<BattleOutcome> = (0..64)
        .map(|seed| engine.run(&a, &b, &mut BattleRng::new(seed)).outcome)
        .collect();

    assert!(outcomes.contains(&BattleOutcome::Win));
    assert!(outcomes.contains(&BattleOutcome::Loss));
}

// =============================================================================
// Amplifier Tests
// =============================================================================

/// A tiger behind a unit re-runs its ability at the tiger's level.
#[test]
fn test_tiger_amplifies_at_its_level() {
    let registry = registry();
    let mut rng = BattleRng::new(4);
    let a = vec![
        Unit::with_stats(Species::Tiger, 4, 3).at_level(2),
        Unit::new(Species::Mosquito),
    ];
    let mut arena = Arena::battle(&registry, &mut rng, a, pigs(3, 1, 1), 5);

    let mosquito = arena.units(Side::A)[1].clone();
    arena.fire(Side::A, &mosquito, EventKind::BattleStart, &EventArgs::Combat);

    // One shot of its own, two more at the tiger's level 2.
    assert!(arena.is_defeated(Side::B));
}

/// The tiger must sit directly behind.
#[test]
fn test_tiger_needs_adjacency() {
    let registry = registry();
    let mut rng = BattleRng::new(4);
    let a = vec![
        Unit::with_stats(Species::Tiger, 4, 3).at_level(3),
        Unit::with_stats(Species::Pig, 1, 1),
        Unit::new(Species::Mosquito),
    ];
    let mut arena = Arena::battle(&registry, &mut rng, a, pigs(3, 1, 1), 5);

    let mosquito = arena.units(Side::A)[2].clone();
    arena.fire(Side::A, &mosquito, EventKind::BattleStart, &EventArgs::Combat);

    assert_eq!(arena.live_count(Side::B), 2);
}

/// A fainting unit is amplified by the tiger behind its old slot.
#[test]
fn test_tiger_amplifies_faint() {
    let registry = registry();
    let mut rng = BattleRng::new(0);
    let a = vec![
        Unit::with_stats(Species::Tiger, 4, 3),
        Unit::with_stats(Species::Cricket, 1, 1),
    ];
    let mut arena = Arena::battle(&registry, &mut rng, a, pigs(1, 1, 1), 5);

    arena.faint(Side::A, 1);

    let crickets = arena
        .units(Side::A)
        .iter()
        .filter(|u| u.species == Species::CricketSpawn)
        .count();
    assert_eq!(crickets, 2);
}

// =============================================================================
// Configuration and Series Tests
// =============================================================================

/// Units that cannot hurt each other hit the round limit.
#[test]
fn test_stalemate_is_reported() {
    let registry = registry();
    let engine = BattleEngine::new(&registry)
        .with_config(BattleConfig::default().with_max_rounds(20));

    let report = engine.run(&pigs(2, 0, 5), &pigs(2, 0, 5), &mut BattleRng::new(0));

    assert_eq!(report.outcome, BattleOutcome::Tie);
    assert!(report.stalemate);
    assert_eq!(report.rounds, 20);
}

/// A smaller team size drops spawns earlier.
#[test]
fn test_team_size_limits_spawns() {
    let registry = registry();
    let engine = BattleEngine::new(&registry)
        .with_config(BattleConfig::default().with_team_size(1));

    // Only the first of the two rams fits.
    let report = engine.run(
        &[Unit::with_stats(Species::Sheep, 1, 1)],
        &[Unit::with_stats(Species::Pig, 1, 50)],
        &mut BattleRng::new(0),
    );
    assert_eq!(report.outcome, BattleOutcome::Loss);
    assert_eq!(report.rounds, 3);
    assert_eq!(report.survivors[Side::B][0].health, 45);
}

/// A series tallies every battle.
#[test]
fn test_series_tally() {
    let registry = registry();
    let series = BattleSeries::new(BattleEngine::new(&registry), 25);
    let a = vec![Unit::new(Species::Mosquito), Unit::new(Species::Ant)];
    let b = vec![Unit::new(Species::Beaver), Unit::new(Species::Fish)];

    let tally = series.run(&a, &b, &mut BattleRng::new(8));

    assert_eq!(tally.total(), 25);
    assert!((0.0..=1.0).contains(&tally.win_rate()));
}

/// Battles log through whatever subscriber the caller installs.
#[test]
fn test_battle_under_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("pet_battler=trace"))
        .with_test_writer()
        .try_init();

    let registry = registry();
    let a = vec![Unit::new(Species::Sheep), Unit::new(Species::Cricket)];
    let b = pigs(3, 2, 3);

    let report = BattleEngine::new(&registry).run(&a, &b, &mut BattleRng::new(4));

    assert!(report.rounds > 0);
}
