//! The wandering vendor: category shelves, a featured discount, and
//! restock pricing that climbs with every paid refresh.

use crate::core::constants::{
    FEATURED_DISCOUNT_DEN, FEATURED_DISCOUNT_NUM, SHOP_ITEMS_PER_CATEGORY_BIG,
    SHOP_ITEMS_PER_CATEGORY_SMALL, SHOP_POTION_COUNT, SHOP_REFRESH_BASE_COST,
    SHOP_REFRESH_STEP_COST,
};
use crate::error::{EngineError, EngineResult};
use crate::items::drops::roll_rarity;
use crate::items::generation::{generate_item, generate_potion};
use crate::items::types::{Item, ItemSlot};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub potions: Vec<Item>,
    pub weapons: Vec<Item>,
    pub armor: Vec<Item>,
    pub trinkets: Vec<Item>,
    pub boots: Vec<Item>,
    pub headgear: Vec<Item>,
    pub hands: Vec<Item>,
    /// The discounted headline item, always the first piece of gear
    /// placed on the shelves during a stocking.
    featured: Option<Uuid>,
    /// Counts paid refreshes only. Free restocks leave it alone, so
    /// the refresh price never climbs on the house's dime.
    restock_id: u32,
}

impl Shop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restock_id(&self) -> u32 {
        self.restock_id
    }

    pub fn is_empty(&self) -> bool {
        self.potions.is_empty() && self.shelves().iter().all(|shelf| shelf.is_empty())
    }

    /// What the next paid refresh costs.
    pub fn refresh_cost(&self) -> u64 {
        SHOP_REFRESH_BASE_COST + SHOP_REFRESH_STEP_COST * self.restock_id as u64
    }

    /// Restock on the house: initial stocking and the periodic free
    /// restock. Does not move the refresh price.
    pub fn restock_free(&mut self, big: bool, ilvl: u32, rng: &mut impl Rng) {
        self.stock(big, ilvl, rng);
    }

    /// Player-paid refresh. The caller charges [`Self::refresh_cost`]
    /// before calling; this bumps the price for the next one.
    pub fn refresh_paid(&mut self, big: bool, ilvl: u32, rng: &mut impl Rng) {
        self.stock(big, ilvl, rng);
        self.restock_id += 1;
    }

    pub fn featured(&self) -> Option<&Item> {
        let id = self.featured?;
        self.find(id)
    }

    pub fn find(&self, id: Uuid) -> Option<&Item> {
        self.potions
            .iter()
            .chain(self.shelves().into_iter().flatten())
            .find(|i| i.id == id)
    }

    /// Asking price, with the featured discount already applied.
    pub fn price_of(&self, id: Uuid) -> Option<u64> {
        let item = self.find(id)?;
        if self.featured == Some(id) {
            Some(item.price * FEATURED_DISCOUNT_NUM / FEATURED_DISCOUNT_DEN)
        } else {
            Some(item.price)
        }
    }

    /// Remove a purchased item from the shelves. Payment is the
    /// caller's problem.
    pub fn take(&mut self, id: Uuid) -> EngineResult<Item> {
        if let Some(pos) = self.potions.iter().position(|i| i.id == id) {
            return Ok(self.potions.remove(pos));
        }
        for slot in ItemSlot::all() {
            let shelf = self.shelf_mut(slot);
            if let Some(pos) = shelf.iter().position(|i| i.id == id) {
                let item = shelf.remove(pos);
                if self.featured == Some(id) {
                    self.featured = None;
                }
                return Ok(item);
            }
        }
        Err(EngineError::InvalidSelection(format!(
            "not for sale: {id}"
        )))
    }

    fn stock(&mut self, big: bool, ilvl: u32, rng: &mut impl Rng) {
        let per_category = if big {
            SHOP_ITEMS_PER_CATEGORY_BIG
        } else {
            SHOP_ITEMS_PER_CATEGORY_SMALL
        };

        self.potions = (0..SHOP_POTION_COUNT).map(|_| generate_potion(ilvl)).collect();
        self.featured = None;

        for slot in ItemSlot::all() {
            let mut shelf = Vec::with_capacity(per_category);
            for _ in 0..per_category {
                let rarity = roll_rarity(false, false, false, rng);
                shelf.push(generate_item(slot, rarity, ilvl, rng));
            }
            if self.featured.is_none() {
                if let Some(first) = shelf.first() {
                    self.featured = Some(first.id);
                }
            }
            *self.shelf_mut(slot) = shelf;
        }
    }

    fn shelves(&self) -> [&Vec<Item>; 6] {
        [
            &self.weapons,
            &self.armor,
            &self.trinkets,
            &self.boots,
            &self.headgear,
            &self.hands,
        ]
    }

    fn shelf_mut(&mut self, slot: ItemSlot) -> &mut Vec<Item> {
        match slot {
            ItemSlot::Weapon => &mut self.weapons,
            ItemSlot::Armor => &mut self.armor,
            ItemSlot::Trinket => &mut self.trinkets,
            ItemSlot::Boots => &mut self.boots,
            ItemSlot::Headgear => &mut self.headgear,
            ItemSlot::Hands => &mut self.hands,
        }
    }
}
