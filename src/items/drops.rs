use super::generation::{generate_item, generate_potion};
use super::types::{Item, ItemSlot, Rarity};
use crate::core::constants::BONUS_POTION_CHANCE;
use crate::core::waves::Wave;
use rand::Rng;

/// Roll item rarity for a wave's loot. Elite, boss and super waves shift
/// weight away from Normal and enforce a minimum tier.
pub fn roll_rarity(is_elite: bool, is_boss: bool, is_super: bool, rng: &mut impl Rng) -> Rarity {
    let roll = rng.gen::<f64>();

    let mut bonus: f64 = 0.0;
    if is_elite {
        bonus += 0.10;
    }
    if is_boss {
        bonus += 0.18;
    }
    if is_super {
        bonus += 0.30;
    }

    // Base distribution: 62% Normal, 28% Rare, 8.5% Epic, 1.5% Legendary.
    // Bonuses shift Normal down and spread across higher tiers.
    let normal_threshold = (0.62 - bonus).max(0.10);
    let rare_threshold = normal_threshold + 0.28;
    let epic_threshold = rare_threshold + 0.085 + bonus * 0.5;
    // Legendary is the remainder

    let rolled = if roll < normal_threshold {
        Rarity::Normal
    } else if roll < rare_threshold {
        Rarity::Rare
    } else if roll < epic_threshold {
        Rarity::Epic
    } else {
        Rarity::Legendary
    };

    let floor = if is_super {
        Rarity::Epic
    } else if is_boss || is_elite {
        Rarity::Rare
    } else {
        Rarity::Normal
    };

    rolled.max(floor)
}

pub fn roll_random_slot(rng: &mut impl Rng) -> ItemSlot {
    match rng.gen_range(0..6) {
        0 => ItemSlot::Weapon,
        1 => ItemSlot::Armor,
        2 => ItemSlot::Trinket,
        3 => ItemSlot::Boots,
        4 => ItemSlot::Headgear,
        5 => ItemSlot::Hands,
        _ => unreachable!(),
    }
}

/// Roll the loot bundle for a cleared wave. One guaranteed piece of gear,
/// extra pieces for elite/boss/super waves, plus a chance at a bonus potion.
/// Item level tracks the wave number.
pub fn roll_wave_loot(wave: &Wave, rng: &mut impl Rng) -> Vec<Item> {
    let mut count = 1;
    if wave.is_elite {
        count += 1;
    }
    if wave.is_boss {
        count += 1;
    }
    if wave.is_super {
        count += 2;
    }

    let ilvl = wave.number;
    let mut loot = Vec::with_capacity(count + 1);
    for _ in 0..count {
        let rarity = roll_rarity(wave.is_elite, wave.is_boss, wave.is_super, rng);
        let slot = roll_random_slot(rng);
        loot.push(generate_item(slot, rarity, ilvl, rng));
    }

    if rng.gen_bool(BONUS_POTION_CHANCE) {
        loot.push(generate_potion(ilvl));
    }

    loot
}
