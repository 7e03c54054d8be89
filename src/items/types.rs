use crate::core::constants::{SELL_CREDIT_DEN, SELL_CREDIT_NUM};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Equipment slots a player can fill, one item each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemSlot {
    Weapon,
    Armor,
    Trinket,
    Boots,
    Headgear,
    Hands,
}

impl ItemSlot {
    pub fn all() -> [ItemSlot; 6] {
        [
            ItemSlot::Weapon,
            ItemSlot::Armor,
            ItemSlot::Trinket,
            ItemSlot::Boots,
            ItemSlot::Headgear,
            ItemSlot::Hands,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemSlot::Weapon => "Weapon",
            ItemSlot::Armor => "Armor",
            ItemSlot::Trinket => "Trinket",
            ItemSlot::Boots => "Boots",
            ItemSlot::Headgear => "Headgear",
            ItemSlot::Hands => "Hands",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Normal = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Normal => "Normal",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    pub fn all() -> [Rarity; 4] {
        [Rarity::Normal, Rarity::Rare, Rarity::Epic, Rarity::Legendary]
    }
}

/// Rollable equipment bonuses. Percent kinds are whole percentage points;
/// RegenFlat is flat HP recovered per wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffixType {
    AtkPct,
    DefPct,
    LifestealPct,
    GoldPct,
    RegenFlat,
}

impl AffixType {
    pub fn all() -> [AffixType; 5] {
        [
            AffixType::AtkPct,
            AffixType::DefPct,
            AffixType::LifestealPct,
            AffixType::GoldPct,
            AffixType::RegenFlat,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affix {
    pub affix_type: AffixType,
    pub value: u32,
}

/// Named equipment sets. Wearing enough pieces of one set reduces
/// incoming damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemSet {
    Dragonscale,
    Wolfpack,
    Sunforged,
}

impl ItemSet {
    pub fn all() -> [ItemSet; 3] {
        [ItemSet::Dragonscale, ItemSet::Wolfpack, ItemSet::Sunforged]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemSet::Dragonscale => "Dragonscale",
            ItemSet::Wolfpack => "Wolfpack",
            ItemSet::Sunforged => "Sunforged",
        }
    }
}

/// Flat combat stat contributions carried by an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatBlock {
    pub atk: u32,
    pub def: u32,
    pub hp: u32,
}

impl StatBlock {
    pub fn total(&self) -> u32 {
        self.atk + self.def + self.hp
    }
}

/// What the item is: a piece of gear for a slot, or a consumable potion
/// healing a fraction of max HP.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    Equipment(ItemSlot),
    Potion { heal_pct: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub kind: ItemKind,
    pub rarity: Rarity,
    pub base: StatBlock,
    pub affixes: Vec<Affix>,
    pub set_key: Option<ItemSet>,
    pub price: u64,
    #[serde(default)]
    pub locked: bool,
}

impl Item {
    pub fn slot(&self) -> Option<ItemSlot> {
        match self.kind {
            ItemKind::Equipment(slot) => Some(slot),
            ItemKind::Potion { .. } => None,
        }
    }

    pub fn is_potion(&self) -> bool {
        matches!(self.kind, ItemKind::Potion { .. })
    }

    pub fn heal_pct(&self) -> Option<f64> {
        match self.kind {
            ItemKind::Potion { heal_pct } => Some(heal_pct),
            ItemKind::Equipment(_) => None,
        }
    }

    /// Gold credited when sold, and the buyback price afterwards.
    pub fn sale_value(&self) -> u64 {
        self.price * SELL_CREDIT_NUM / SELL_CREDIT_DEN
    }

    /// Sum of affix values of one kind on this item.
    pub fn affix_value(&self, kind: AffixType) -> u32 {
        self.affixes
            .iter()
            .filter(|a| a.affix_type == kind)
            .map(|a| a.value)
            .sum()
    }
}
