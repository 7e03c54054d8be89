use super::types::{AffixType, Item, ItemSet, ItemSlot, StatBlock};
use crate::core::constants::SET_PIECES_REQUIRED;
use serde::{Deserialize, Serialize};

/// Player equipment slots.
///
/// IMPORTANT: When adding new slots, use `#[serde(default)]` to maintain
/// backward compatibility with old save files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub trinket: Option<Item>,
    pub boots: Option<Item>,
    pub headgear: Option<Item>,
    pub hands: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: ItemSlot) -> &Option<Item> {
        match slot {
            ItemSlot::Weapon => &self.weapon,
            ItemSlot::Armor => &self.armor,
            ItemSlot::Trinket => &self.trinket,
            ItemSlot::Boots => &self.boots,
            ItemSlot::Headgear => &self.headgear,
            ItemSlot::Hands => &self.hands,
        }
    }

    pub fn set(&mut self, slot: ItemSlot, item: Option<Item>) {
        match slot {
            ItemSlot::Weapon => self.weapon = item,
            ItemSlot::Armor => self.armor = item,
            ItemSlot::Trinket => self.trinket = item,
            ItemSlot::Boots => self.boots = item,
            ItemSlot::Headgear => self.headgear = item,
            ItemSlot::Hands => self.hands = item,
        }
    }

    /// Swap an item into its slot, returning whatever was displaced.
    pub fn replace(&mut self, slot: ItemSlot, item: Item) -> Option<Item> {
        let displaced = self.get(slot).clone();
        self.set(slot, Some(item));
        displaced
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [
            &self.weapon,
            &self.armor,
            &self.trinket,
            &self.boots,
            &self.headgear,
            &self.hands,
        ]
        .into_iter()
        .filter_map(|item| item.as_ref())
    }

    /// Sum of flat stats across all equipped gear.
    pub fn total_base(&self) -> StatBlock {
        let mut total = StatBlock::default();
        for item in self.iter_equipped() {
            total.atk += item.base.atk;
            total.def += item.base.def;
            total.hp += item.base.hp;
        }
        total
    }

    /// Sum of one affix kind across all equipped gear.
    pub fn affix_total(&self, kind: AffixType) -> u32 {
        self.iter_equipped().map(|i| i.affix_value(kind)).sum()
    }

    pub fn pieces_of_set(&self, set: ItemSet) -> u32 {
        self.iter_equipped()
            .filter(|i| i.set_key == Some(set))
            .count() as u32
    }

    /// Number of sets with enough equipped pieces to grant their bonus.
    /// Six slots leave room for two active sets at once.
    pub fn active_sets(&self) -> u32 {
        ItemSet::all()
            .iter()
            .filter(|set| self.pieces_of_set(**set) >= SET_PIECES_REQUIRED)
            .count() as u32
    }

    pub fn has_set_bonus(&self) -> bool {
        self.active_sets() > 0
    }
}
