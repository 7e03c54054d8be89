//! Integration test: engine facade lifecycle
//!
//! Drives the public Arena API the way an embedding layer would:
//! boot, champion selection, battle ticks, item handling, and the
//! error taxonomy a UI has to render.

use arena::core::constants::PICK_LIST_SIZE;
use arena::core::engine::Arena;
use arena::core::roster::Side;
use arena::core::state::RunPhase;
use arena::core::talents::TalentBranch;
use arena::core::tick::{TickEvent, TickMode};
use arena::error::EngineError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn boot(seed: u64) -> (Arena, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let arena = Arena::new(&mut rng);
    (arena, rng)
}

/// Boot and start a hero run with the first champion on the list.
fn hero_run(seed: u64) -> (Arena, ChaCha8Rng) {
    let (mut arena, rng) = boot(seed);
    let class = arena.pick_list(Side::Heroes)[0].clone();
    arena.start_run("Rex", &class, Side::Heroes).unwrap();
    (arena, rng)
}

// =============================================================================
// Boot and Selection
// =============================================================================

#[test]
fn test_boot_prepares_selection_screen() {
    let (arena, _) = boot(42);

    assert_eq!(arena.phase(), RunPhase::Selection);
    assert!(arena.player().is_none());
    assert_eq!(arena.pick_list(Side::Heroes).len(), PICK_LIST_SIZE);
    assert_eq!(arena.pick_list(Side::Creatures).len(), PICK_LIST_SIZE);
    assert!(!arena.shop().is_empty(), "shop opens stocked");
}

#[test]
fn test_pick_lists_hold_distinct_entries() {
    let (arena, _) = boot(7);
    for side in [Side::Heroes, Side::Creatures] {
        let list = arena.pick_list(side);
        for (i, a) in list.iter().enumerate() {
            for b in &list[i + 1..] {
                assert_ne!(a, b, "pick list must not repeat champions");
            }
        }
    }
}

#[test]
fn test_start_run_moves_to_battle() {
    let (arena, _) = hero_run(42);

    assert_eq!(arena.phase(), RunPhase::Battle);
    assert_eq!(arena.wave(), 1);
    let player = arena.player().unwrap();
    assert_eq!(player.name, "Rex");
    assert_eq!(player.level, 1);
    assert!(player.special_ready());
}

#[test]
fn test_start_run_rejects_invalid_input() {
    let (mut arena, _) = boot(42);
    let class = arena.pick_list(Side::Heroes)[0].clone();

    // Unlisted champion
    assert!(matches!(
        arena.start_run("Rex", "NotARealChampion", Side::Heroes),
        Err(EngineError::InvalidSelection(_))
    ));
    // Listed for the other side only
    let creature = arena.pick_list(Side::Creatures)[0].clone();
    assert!(matches!(
        arena.start_run("Rex", &creature, Side::Heroes),
        Err(EngineError::InvalidSelection(_))
    ));
    // Bad names
    for name in ["", "    ", "WayTooLongNameForAChampion", "Rex?!"] {
        assert!(
            matches!(
                arena.start_run(name, &class, Side::Heroes),
                Err(EngineError::InvalidSelection(_))
            ),
            "name {name:?} should be rejected"
        );
    }

    assert_eq!(arena.phase(), RunPhase::Selection, "failed starts change nothing");
}

#[test]
fn test_battle_actions_require_a_run() {
    let (mut arena, mut rng) = boot(42);

    assert_eq!(
        arena.tick_wave(TickMode::Attack, &mut rng).unwrap_err(),
        EngineError::NoActiveRun
    );
    assert_eq!(arena.derived_stats().unwrap_err(), EngineError::NoActiveRun);
    assert_eq!(
        arena.allocate_talent(TalentBranch::Offense).unwrap_err(),
        EngineError::NoActiveRun
    );
    assert_eq!(arena.shop_refresh(&mut rng).unwrap_err(), EngineError::NoActiveRun);
}

// =============================================================================
// Battle Ticks
// =============================================================================

#[test]
fn test_first_wave_clears_and_pays_out() {
    let (mut arena, mut rng) = hero_run(42);

    let result = arena.tick_wave(TickMode::Attack, &mut rng).unwrap();

    assert!(!result.outcome.defeated, "a fresh champion survives wave 1");
    assert!(result
        .events
        .iter()
        .any(|e| matches!(e, TickEvent::WaveCleared { wave: 1, .. })));
    assert!(result.outcome.xp_gained > 0);
    assert!(result.outcome.gold_gained > 0);
    assert_eq!(arena.wave(), 2);
    assert!(arena.player().unwrap().gold > 0);
    assert!(
        !arena.inventory().bag().is_empty(),
        "every cleared wave drops at least one item"
    );
}

#[test]
fn test_special_cooldown_cycle_via_facade() {
    let (mut arena, mut rng) = hero_run(42);

    arena.tick_wave(TickMode::Special, &mut rng).unwrap();
    let cooldown = arena.player().unwrap().special_cooldown;
    assert!(cooldown > 0);

    let err = arena.tick_wave(TickMode::Special, &mut rng).unwrap_err();
    assert_eq!(err, EngineError::SpecialOnCooldown { remaining: cooldown });

    // Plain attacks tick it back down to ready
    for _ in 0..cooldown {
        arena.tick_wave(TickMode::Attack, &mut rng).unwrap();
    }
    assert!(arena.player().unwrap().special_ready());
}

// =============================================================================
// Items Through the Facade
// =============================================================================

#[test]
fn test_drop_to_equip_to_sell_pipeline() {
    let (mut arena, mut rng) = hero_run(42);

    // Fight until some gear is in the bag
    while arena.inventory().bag().iter().all(|i| i.is_potion()) {
        arena.tick_wave(TickMode::Attack, &mut rng).unwrap();
    }
    let gear = arena
        .inventory()
        .bag()
        .iter()
        .find(|i| !i.is_potion())
        .cloned()
        .unwrap();
    let slot = gear.slot().unwrap();

    arena.equip(gear.id).unwrap();
    assert_eq!(
        arena
            .player()
            .unwrap()
            .equipment
            .get(slot)
            .as_ref()
            .map(|i| i.id),
        Some(gear.id)
    );

    arena.unequip(slot).unwrap();
    let gold_before = arena.player().unwrap().gold;
    let credit = arena.sell(gear.id).unwrap();
    assert_eq!(credit, gear.sale_value());
    assert_eq!(arena.player().unwrap().gold, gold_before + credit);
}

#[test]
fn test_lock_blocks_sale_until_unlocked() {
    let (mut arena, mut rng) = hero_run(42);
    arena.tick_wave(TickMode::Attack, &mut rng).unwrap();

    let id = arena.inventory().bag()[0].id;
    assert!(arena.toggle_lock(id).unwrap());
    assert_eq!(arena.sell(id).unwrap_err(), EngineError::ItemLocked);

    assert!(!arena.toggle_lock(id).unwrap());
    arena.sell(id).unwrap();
}

#[test]
fn test_stash_survives_a_new_run() {
    let (mut arena, mut rng) = hero_run(42);
    arena.tick_wave(TickMode::Attack, &mut rng).unwrap();

    let id = arena.inventory().bag()[0].id;
    arena.stash(id).unwrap();
    assert!(arena.inventory().bag().iter().all(|i| i.id != id));

    // Die or not, the next champion inherits the stash
    let class = arena.pick_list(Side::Creatures)[0].clone();
    arena.start_run("Fang", &class, Side::Creatures).unwrap();
    assert!(arena.inventory().stash().iter().any(|i| i.id == id));

    arena.unstash(id).unwrap();
    assert!(arena.inventory().bag().iter().any(|i| i.id == id));
}

// =============================================================================
// Talents Through the Facade
// =============================================================================

#[test]
fn test_talent_points_arrive_with_levels() {
    let (mut arena, mut rng) = hero_run(42);
    assert_eq!(arena.unspent_talent_points().unwrap(), 0);

    // The first three waves always carry a level-1 champion to level 2
    while arena.player().unwrap().level < 2 {
        let result = arena.tick_wave(TickMode::Attack, &mut rng).unwrap();
        assert!(!result.outcome.defeated, "early waves cannot kill a fresh champion");
    }
    assert_eq!(arena.unspent_talent_points().unwrap(), 1);

    let atk_before = arena.derived_stats().unwrap().atk;
    arena.allocate_talent(TalentBranch::Offense).unwrap();
    assert_eq!(
        arena.allocate_talent(TalentBranch::Defense).unwrap_err(),
        EngineError::InsufficientTalentPoints
    );

    let talents = &arena.player().unwrap().talents;
    assert_eq!(talents.offense, 1);
    assert!(
        arena.derived_stats().unwrap().atk >= atk_before,
        "offense talent never lowers attack"
    );
}
