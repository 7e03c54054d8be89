//! Bag, stash, and buyback containers, and the item movements
//! between them and the equipped slots.

use crate::core::constants::BUYBACK_LIMIT;
use crate::error::{EngineError, EngineResult};
use crate::items::equipment::Equipment;
use crate::items::types::{Item, ItemSlot};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which container an item currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Bag,
    Stash,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    stash: Vec<Item>,
    /// Recently sold items, oldest first. Bounded; the oldest entry
    /// falls off when a sale would overflow it.
    buyback: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bag(&self) -> &[Item] {
        &self.items
    }

    pub fn stash(&self) -> &[Item] {
        &self.stash
    }

    pub fn buyback(&self) -> &[Item] {
        &self.buyback
    }

    /// Drop a new item into the bag.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Look an item up in the bag or stash.
    pub fn find(&self, id: Uuid) -> Option<&Item> {
        self.items
            .iter()
            .chain(self.stash.iter())
            .find(|i| i.id == id)
    }

    /// Remove an item from the bag or stash.
    pub fn remove(&mut self, id: Uuid) -> Option<Item> {
        let container = self.locate(id)?;
        let vec = self.container_mut(container);
        let pos = vec.iter().position(|i| i.id == id)?;
        Some(vec.remove(pos))
    }

    fn locate(&self, id: Uuid) -> Option<Container> {
        if self.items.iter().any(|i| i.id == id) {
            Some(Container::Bag)
        } else if self.stash.iter().any(|i| i.id == id) {
            Some(Container::Stash)
        } else {
            None
        }
    }

    fn container_mut(&mut self, container: Container) -> &mut Vec<Item> {
        match container {
            Container::Bag => &mut self.items,
            Container::Stash => &mut self.stash,
        }
    }

    /// Equip a piece of gear from the bag or stash. Whatever it
    /// displaces returns to the container the new item came from.
    pub fn equip(&mut self, equipment: &mut Equipment, id: Uuid) -> EngineResult<()> {
        let source = self
            .locate(id)
            .ok_or_else(|| EngineError::InvalidSelection(format!("no such item: {id}")))?;

        let slot = {
            let item = self.find(id).ok_or_else(|| {
                EngineError::InvalidSelection(format!("no such item: {id}"))
            })?;
            item.slot().ok_or_else(|| {
                EngineError::InvalidSelection("potions cannot be equipped".to_string())
            })?
        };

        let vec = self.container_mut(source);
        let pos = vec
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| EngineError::InvalidSelection(format!("no such item: {id}")))?;
        let item = vec.remove(pos);

        if let Some(displaced) = equipment.replace(slot, item) {
            self.container_mut(source).push(displaced);
        }
        Ok(())
    }

    /// Take a slot's item off and drop it into the bag.
    pub fn unequip(&mut self, equipment: &mut Equipment, slot: ItemSlot) -> EngineResult<()> {
        match equipment.get(slot).clone() {
            Some(item) => {
                equipment.set(slot, None);
                self.items.push(item);
                Ok(())
            }
            None => Err(EngineError::InvalidSelection(format!(
                "nothing equipped in {}",
                slot.name()
            ))),
        }
    }

    /// Sell an item out of the bag or stash. Locked items refuse.
    /// Returns the gold credit; the item moves to the buyback list at
    /// the same price.
    pub fn sell(&mut self, id: Uuid) -> EngineResult<u64> {
        let locked = self
            .find(id)
            .ok_or_else(|| EngineError::InvalidSelection(format!("no such item: {id}")))?
            .locked;
        if locked {
            return Err(EngineError::ItemLocked);
        }

        let item = self
            .remove(id)
            .ok_or_else(|| EngineError::InvalidSelection(format!("no such item: {id}")))?;
        let credit = item.sale_value();

        if self.buyback.len() >= BUYBACK_LIMIT {
            self.buyback.remove(0);
        }
        self.buyback.push(item);
        Ok(credit)
    }

    /// Price to reclaim a sold item: exactly what the sale paid out.
    pub fn buyback_price(&self, id: Uuid) -> Option<u64> {
        self.buyback
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.sale_value())
    }

    /// Pull a sold item off the buyback list. The caller charges the
    /// gold and decides where it lands.
    pub fn take_buyback(&mut self, id: Uuid) -> EngineResult<Item> {
        let pos = self
            .buyback
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| EngineError::InvalidSelection(format!("not in buyback: {id}")))?;
        Ok(self.buyback.remove(pos))
    }

    /// Flip an item's sell protection. Returns the new locked state.
    pub fn toggle_lock(&mut self, id: Uuid) -> EngineResult<bool> {
        let container = self
            .locate(id)
            .ok_or_else(|| EngineError::InvalidSelection(format!("no such item: {id}")))?;
        let vec = self.container_mut(container);
        let item = vec
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| EngineError::InvalidSelection(format!("no such item: {id}")))?;
        item.locked = !item.locked;
        Ok(item.locked)
    }

    /// Move an item from the bag into the stash.
    pub fn stash_item(&mut self, id: Uuid) -> EngineResult<()> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| EngineError::InvalidSelection(format!("not in bag: {id}")))?;
        let item = self.items.remove(pos);
        self.stash.push(item);
        Ok(())
    }

    /// Move an item from the stash back into the bag.
    pub fn unstash_item(&mut self, id: Uuid) -> EngineResult<()> {
        let pos = self
            .stash
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| EngineError::InvalidSelection(format!("not in stash: {id}")))?;
        let item = self.stash.remove(pos);
        self.items.push(item);
        Ok(())
    }
}
