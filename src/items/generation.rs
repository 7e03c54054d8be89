use super::names::{equipment_name, potion_name};
use super::types::{Affix, AffixType, Item, ItemKind, ItemSet, ItemSlot, Rarity, StatBlock};
use crate::core::constants::{ILVL_SCALING_DIVISOR, POTION_HEAL_PCT, SET_DROP_CHANCE};
use rand::Rng;
use uuid::Uuid;

/// Each budget point spent on HP grants this many flat hit points.
const HP_PER_BUDGET_POINT: u32 = 5;

/// Generate a piece of gear with the given slot, rarity, and item level.
/// ilvl determines stat scaling and tracks the wave it dropped on.
pub fn generate_item(slot: ItemSlot, rarity: Rarity, ilvl: u32, rng: &mut impl Rng) -> Item {
    let set_key = roll_set_key(rarity, rng);
    let base = roll_base_stats(slot, rarity, ilvl, rng);
    let affixes = roll_affixes(rarity, ilvl, rng);
    let name = equipment_name(slot, rarity, set_key, rng);
    let price = price_for(&base, &affixes, rarity);

    Item {
        id: Uuid::new_v4(),
        name,
        kind: ItemKind::Equipment(slot),
        rarity,
        base,
        affixes,
        set_key,
        price,
        locked: false,
    }
}

/// Generate a healing potion at the given item level.
pub fn generate_potion(ilvl: u32) -> Item {
    Item {
        id: Uuid::new_v4(),
        name: potion_name(ilvl),
        kind: ItemKind::Potion {
            heal_pct: POTION_HEAL_PCT,
        },
        rarity: Rarity::Normal,
        base: StatBlock::default(),
        affixes: vec![],
        set_key: None,
        price: 25 + 2 * ilvl as u64,
        locked: false,
    }
}

/// Calculate the ilvl multiplier for scaling stats.
/// ilvl 1: 1.0x, ilvl 26: 2.0x, ilvl 51: 3.0x
fn ilvl_multiplier(ilvl: u32) -> f64 {
    1.0 + (ilvl.max(1) as f64 - 1.0) / ILVL_SCALING_DIVISOR
}

/// Relative weight of atk/def/hp rolls per slot.
fn slot_weights(slot: ItemSlot) -> [u32; 3] {
    match slot {
        ItemSlot::Weapon => [8, 1, 1],
        ItemSlot::Armor => [1, 5, 4],
        ItemSlot::Trinket => [4, 3, 3],
        ItemSlot::Boots => [2, 4, 4],
        ItemSlot::Headgear => [3, 4, 3],
        ItemSlot::Hands => [5, 4, 1],
    }
}

fn roll_base_stats(slot: ItemSlot, rarity: Rarity, ilvl: u32, rng: &mut impl Rng) -> StatBlock {
    // Budget point ranges at ilvl 1
    let (budget_min, budget_max) = match rarity {
        Rarity::Normal => (2, 4),
        Rarity::Rare => (4, 7),
        Rarity::Epic => (7, 11),
        Rarity::Legendary => (11, 16),
    };

    let multiplier = ilvl_multiplier(ilvl);
    let points = ((rng.gen_range(budget_min..=budget_max) as f64) * multiplier).round() as u32;
    let points = points.max(1);

    let [atk_w, def_w, hp_w] = slot_weights(slot);
    let total_w = atk_w + def_w + hp_w;

    let mut stats = StatBlock::default();
    for _ in 0..points {
        let roll = rng.gen_range(0..total_w);
        if roll < atk_w {
            stats.atk += 1;
        } else if roll < atk_w + def_w {
            stats.def += 1;
        } else {
            stats.hp += HP_PER_BUDGET_POINT;
        }
    }

    stats
}

fn roll_affixes(rarity: Rarity, ilvl: u32, rng: &mut impl Rng) -> Vec<Affix> {
    let count = match rarity {
        Rarity::Normal => 0,
        Rarity::Rare => rng.gen_range(1..=2),
        Rarity::Epic => rng.gen_range(2..=3),
        Rarity::Legendary => rng.gen_range(3..=4),
    };

    // Sample without replacement so an item never doubles up on one kind.
    let mut pool = AffixType::all().to_vec();
    let mut affixes = Vec::with_capacity(count);
    for _ in 0..count {
        let idx = rng.gen_range(0..pool.len());
        let affix_type = pool.swap_remove(idx);
        let value = roll_affix_value(affix_type, rarity, ilvl, rng);
        affixes.push(Affix { affix_type, value });
    }

    affixes
}

fn roll_affix_value(affix_type: AffixType, rarity: Rarity, ilvl: u32, rng: &mut impl Rng) -> u32 {
    let multiplier = ilvl_multiplier(ilvl);

    // Percentage-point ranges at ilvl 1
    let (base_min, base_max) = match rarity {
        Rarity::Normal => (0, 0),
        Rarity::Rare => (2, 4),
        Rarity::Epic => (4, 7),
        Rarity::Legendary => (6, 10),
    };

    match affix_type {
        AffixType::RegenFlat => {
            // Flat per-wave regen uses wider ranges
            let (regen_min, regen_max) = match rarity {
                Rarity::Normal => (0, 0),
                Rarity::Rare => (2, 4),
                Rarity::Epic => (4, 8),
                Rarity::Legendary => (8, 14),
            };
            let base = rng.gen_range(regen_min..=regen_max) as f64;
            (base * multiplier).round() as u32
        }
        _ => {
            let base = rng.gen_range(base_min..=base_max) as f64;
            (base * multiplier).round() as u32
        }
    }
}

fn roll_set_key(rarity: Rarity, rng: &mut impl Rng) -> Option<ItemSet> {
    if rarity >= Rarity::Epic && rng.gen_bool(SET_DROP_CHANCE) {
        let sets = ItemSet::all();
        Some(sets[rng.gen_range(0..sets.len())])
    } else {
        None
    }
}

fn price_for(base: &StatBlock, affixes: &[Affix], rarity: Rarity) -> u64 {
    let stat_value = (base.atk * 3 + base.def * 3 + base.hp) as u64;
    let affix_value: u64 = affixes.iter().map(|a| a.value as u64 * 2).sum();
    let rarity_factor = match rarity {
        Rarity::Normal => 1.0,
        Rarity::Rare => 1.4,
        Rarity::Epic => 2.0,
        Rarity::Legendary => 3.0,
    };
    ((stat_value + affix_value) as f64 * rarity_factor).round() as u64 + 5
}
