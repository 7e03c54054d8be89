//! Integration test: gold economy
//!
//! Shop pricing, the paid-refresh ladder, featured discounts, selling,
//! and the buyback shelf, all driven through the public Arena facade.
//! Wallet and bag contents are forged through snapshot/restore so each
//! scenario starts from an exact gold figure.

use arena::core::constants::{
    BUYBACK_LIMIT, SHOP_ITEMS_PER_CATEGORY_SMALL, SHOP_POTION_COUNT, SHOP_REFRESH_BASE_COST,
};
use arena::core::engine::Arena;
use arena::core::roster::Side;
use arena::error::EngineError;
use arena::items::types::{Item, ItemKind, ItemSlot, Rarity, StatBlock};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

fn hero_run(seed: u64) -> (Arena, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut arena = Arena::new(&mut rng);
    let class = arena.pick_list(Side::Heroes)[0].clone();
    arena.start_run("Rex", &class, Side::Heroes).unwrap();
    (arena, rng)
}

/// Rewrite the champion's wallet to an exact figure.
fn set_gold(arena: &mut Arena, rng: &mut ChaCha8Rng, gold: u64) {
    let mut save = arena.snapshot();
    save.player.as_mut().unwrap().gold = gold;
    arena.restore(save, rng).unwrap();
}

/// Drop an item straight into the bag.
fn grant(arena: &mut Arena, rng: &mut ChaCha8Rng, item: Item) {
    let mut save = arena.snapshot();
    save.inventory.add(item);
    arena.restore(save, rng).unwrap();
}

fn priced_gear(slot: ItemSlot, price: u64) -> Item {
    Item {
        id: Uuid::new_v4(),
        name: "Trophy".to_string(),
        kind: ItemKind::Equipment(slot),
        rarity: Rarity::Normal,
        base: StatBlock { atk: 1, def: 0, hp: 0 },
        affixes: vec![],
        set_key: None,
        price,
        locked: false,
    }
}

// =============================================================================
// Refresh Pricing
// =============================================================================

#[test]
fn test_refresh_blocked_below_base_cost() {
    let (mut arena, mut rng) = hero_run(7);
    set_gold(&mut arena, &mut rng, 10);

    assert_eq!(arena.shop().refresh_cost(), SHOP_REFRESH_BASE_COST);
    let before: Vec<Uuid> = arena.shop().weapons.iter().map(|i| i.id).collect();

    assert_eq!(
        arena.shop_refresh(&mut rng),
        Err(EngineError::InsufficientGold { needed: 20, have: 10 })
    );

    let after: Vec<Uuid> = arena.shop().weapons.iter().map(|i| i.id).collect();
    assert_eq!(arena.player().unwrap().gold, 10, "failed refresh is free");
    assert_eq!(before, after, "failed refresh must not touch stock");
    assert_eq!(arena.shop().restock_id(), 0);
}

#[test]
fn test_refresh_ladder_climbs_by_ten() {
    let (mut arena, mut rng) = hero_run(8);
    set_gold(&mut arena, &mut rng, 90);

    assert_eq!(arena.shop_refresh(&mut rng).unwrap(), 20);
    assert_eq!(arena.player().unwrap().gold, 70);
    assert_eq!(arena.shop().refresh_cost(), 30);

    assert_eq!(arena.shop_refresh(&mut rng).unwrap(), 30);
    assert_eq!(arena.shop_refresh(&mut rng).unwrap(), 40);
    assert_eq!(arena.player().unwrap().gold, 0);
    assert_eq!(arena.shop().restock_id(), 3);
}

#[test]
fn test_paid_refresh_stocks_small_shelves() {
    let (mut arena, mut rng) = hero_run(9);
    set_gold(&mut arena, &mut rng, 20);

    arena.shop_refresh(&mut rng).unwrap();

    let shop = arena.shop();
    assert_eq!(shop.potions.len(), SHOP_POTION_COUNT);
    for shelf in [&shop.weapons, &shop.armor, &shop.trinkets] {
        assert_eq!(shelf.len(), SHOP_ITEMS_PER_CATEGORY_SMALL);
    }
}

// =============================================================================
// Buying
// =============================================================================

#[test]
fn test_buy_potion_rings_exact_price() {
    let (mut arena, mut rng) = hero_run(10);
    set_gold(&mut arena, &mut rng, 50);

    // Boot stock rolls at item level 1, so potions ring up 25 + 2.
    let potion_id = arena.shop().potions[0].id;
    let shelf_before = arena.shop().potions.len();

    assert_eq!(arena.shop_buy(potion_id).unwrap(), 27);
    assert_eq!(arena.player().unwrap().gold, 23);
    assert_eq!(arena.shop().potions.len(), shelf_before - 1);
    assert!(arena.inventory().find(potion_id).is_some());
}

#[test]
fn test_featured_discount_applies_at_register() {
    let (mut arena, mut rng) = hero_run(11);

    let featured = arena.shop().featured().expect("boot stock tags a deal").clone();
    let discounted = featured.price * 7 / 10;
    assert_eq!(arena.shop().price_of(featured.id), Some(discounted));

    set_gold(&mut arena, &mut rng, discounted);
    assert_eq!(arena.shop_buy(featured.id).unwrap(), discounted);
    assert_eq!(arena.player().unwrap().gold, 0);
    assert!(arena.inventory().find(featured.id).is_some());
    assert!(arena.shop().featured().is_none(), "deal leaves with the item");
}

#[test]
fn test_buy_without_funds_keeps_shelf_intact() {
    let (mut arena, mut rng) = hero_run(12);
    set_gold(&mut arena, &mut rng, 0);

    let id = arena.shop().weapons[1].id;
    assert!(matches!(
        arena.shop_buy(id),
        Err(EngineError::InsufficientGold { .. })
    ));
    assert!(arena.shop().find(id).is_some(), "shelf keeps the item");
    assert!(arena.inventory().bag().is_empty());
}

// =============================================================================
// Selling and Buyback
// =============================================================================

#[test]
fn test_sell_credits_half_and_buyback_restores() {
    let (mut arena, mut rng) = hero_run(13);
    let trophy = priced_gear(ItemSlot::Weapon, 80);
    let id = trophy.id;
    grant(&mut arena, &mut rng, trophy);
    set_gold(&mut arena, &mut rng, 0);

    assert_eq!(arena.sell(id).unwrap(), 40);
    assert_eq!(arena.player().unwrap().gold, 40);
    assert!(arena.inventory().bag().is_empty());
    assert_eq!(arena.inventory().buyback().len(), 1);

    assert_eq!(arena.buy_back(id).unwrap(), 40);
    assert_eq!(arena.player().unwrap().gold, 0);
    assert_eq!(arena.inventory().bag()[0].id, id, "same item comes back");
    assert!(arena.inventory().buyback().is_empty());
}

#[test]
fn test_buyback_needs_gold_too() {
    let (mut arena, mut rng) = hero_run(14);
    let trophy = priced_gear(ItemSlot::Boots, 80);
    let id = trophy.id;
    grant(&mut arena, &mut rng, trophy);

    arena.sell(id).unwrap();
    set_gold(&mut arena, &mut rng, 39);

    assert_eq!(
        arena.buy_back(id),
        Err(EngineError::InsufficientGold { needed: 40, have: 39 })
    );
    assert_eq!(arena.inventory().buyback().len(), 1, "shelf keeps it");
}

#[test]
fn test_buyback_shelf_drops_oldest_beyond_cap() {
    let (mut arena, mut rng) = hero_run(15);

    let mut ids = Vec::new();
    for _ in 0..BUYBACK_LIMIT + 1 {
        let item = priced_gear(ItemSlot::Trinket, 10);
        ids.push(item.id);
        grant(&mut arena, &mut rng, item);
    }
    for id in &ids {
        arena.sell(*id).unwrap();
    }

    let shelf = arena.inventory().buyback();
    assert_eq!(shelf.len(), BUYBACK_LIMIT);
    assert!(!shelf.iter().any(|i| i.id == ids[0]), "oldest sale rolls off");
    assert!(shelf.iter().any(|i| i.id == ids[BUYBACK_LIMIT]));
}

#[test]
fn test_locked_item_refuses_to_sell() {
    let (mut arena, mut rng) = hero_run(16);
    let trophy = priced_gear(ItemSlot::Headgear, 60);
    let id = trophy.id;
    grant(&mut arena, &mut rng, trophy);
    set_gold(&mut arena, &mut rng, 0);

    assert!(arena.toggle_lock(id).unwrap());
    assert_eq!(arena.sell(id), Err(EngineError::ItemLocked));
    assert_eq!(arena.player().unwrap().gold, 0);

    assert!(!arena.toggle_lock(id).unwrap());
    assert_eq!(arena.sell(id).unwrap(), 30);
}
