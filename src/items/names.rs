//! Flavor name generation for dropped and stocked items.

use crate::items::types::{ItemSet, ItemSlot, Rarity};
use rand::Rng;

const WEAPON_NAMES: &[&str] = &[
    "Blade", "Greatsword", "Warhammer", "Spear", "Cleaver", "Saber", "Maul", "Longbow",
];

const ARMOR_NAMES: &[&str] = &[
    "Breastplate", "Chainmail", "Cuirass", "Scale Vest", "Hauberk", "Plate Harness", "Brigandine",
];

const TRINKET_NAMES: &[&str] = &[
    "Amulet", "Ring", "Talisman", "Charm", "Idol", "Medallion", "Totem",
];

const BOOTS_NAMES: &[&str] = &[
    "Greaves", "Sabatons", "Treads", "Striders", "Warboots", "Stompers",
];

const HEADGEAR_NAMES: &[&str] = &[
    "Helm", "Crown", "Hood", "Circlet", "Greathelm", "Warhelm", "Visage",
];

const HANDS_NAMES: &[&str] = &[
    "Gauntlets", "Grips", "Handguards", "Fists", "Knuckles", "Clutches",
];

const PREFIXES: &[&str] = &[
    "Savage", "Gilded", "Vicious", "Stalwart", "Runed", "Grim", "Blessed", "Thundering",
    "Molten", "Frozen", "Ancient", "Spectral",
];

const SUFFIXES: &[&str] = &[
    "of Fury", "of the Colossus", "of Greed", "of the Bulwark", "of Embers", "of the Depths",
    "of Ruin", "of the Hunt", "of Dawn", "of the Fallen", "of Storms", "of Thorns",
];

fn base_name(slot: ItemSlot, rng: &mut impl Rng) -> &'static str {
    let pool = match slot {
        ItemSlot::Weapon => WEAPON_NAMES,
        ItemSlot::Armor => ARMOR_NAMES,
        ItemSlot::Trinket => TRINKET_NAMES,
        ItemSlot::Boots => BOOTS_NAMES,
        ItemSlot::Headgear => HEADGEAR_NAMES,
        ItemSlot::Hands => HANDS_NAMES,
    };
    pool[rng.gen_range(0..pool.len())]
}

/// Builds a display name for a piece of gear. Set pieces always carry the
/// set name up front; otherwise Rare and better gear picks up a random
/// prefix or suffix.
pub fn equipment_name(
    slot: ItemSlot,
    rarity: Rarity,
    set_key: Option<ItemSet>,
    rng: &mut impl Rng,
) -> String {
    let base = base_name(slot, rng);

    if let Some(set) = set_key {
        return format!("{} {}", set.name(), base);
    }

    if rarity >= Rarity::Rare {
        if rng.gen_bool(0.5) {
            let prefix = PREFIXES[rng.gen_range(0..PREFIXES.len())];
            format!("{} {}", prefix, base)
        } else {
            let suffix = SUFFIXES[rng.gen_range(0..SUFFIXES.len())];
            format!("{} {}", base, suffix)
        }
    } else {
        base.to_string()
    }
}

/// Potion names scale with the item level they were stocked or dropped at.
pub fn potion_name(ilvl: u32) -> String {
    let tier = if ilvl < 10 {
        "Minor"
    } else if ilvl < 25 {
        "Standard"
    } else {
        "Greater"
    };
    format!("{} Healing Potion", tier)
}
