//! The engine facade. One [`Arena`] owns the whole session and every
//! player action goes through it, so embedding layers (terminal UI,
//! simulator, tests) never touch the state structs directly.

use crate::core::constants::{AUTO_MIN_INTERVAL_MS, PLAYER_NAME_MAX_LENGTH};
use crate::core::roster::{draw_pick_list, theme_for_wave, Side};
use crate::core::state::{AutoPlay, PickLists, Player, RunPhase, RunState};
use crate::core::stats::DerivedStats;
use crate::core::talents::{self, TalentBranch};
use crate::core::tick::{advance_wave, TickMode, TickResult};
use crate::error::{EngineError, EngineResult};
use crate::inventory::Inventory;
use crate::items::types::{Item, ItemSlot};
use crate::shop::Shop;
use crate::snapshot::SaveData;
use rand::Rng;
use uuid::Uuid;

pub struct Arena {
    state: RunState,
}

impl Arena {
    /// Boot a fresh session: draw the champion pick lists for both
    /// sides and put the vendor's opening stock on the shelves.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            state: Self::fresh_state(rng),
        }
    }

    fn fresh_state(rng: &mut impl Rng) -> RunState {
        let mut state = RunState::new();
        state.lists = Self::draw_lists(rng);
        state.shop.restock_free(true, 1, rng);
        state
    }

    fn draw_lists(rng: &mut impl Rng) -> PickLists {
        PickLists {
            heroes: draw_pick_list(Side::Heroes, rng),
            creatures: draw_pick_list(Side::Creatures, rng),
        }
    }

    // ---- views ------------------------------------------------------

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn phase(&self) -> RunPhase {
        self.state.phase
    }

    pub fn wave(&self) -> u32 {
        self.state.wave
    }

    pub fn player(&self) -> Option<&Player> {
        self.state.player.as_ref()
    }

    pub fn pick_list(&self, side: Side) -> &[String] {
        self.state.lists.for_side(side)
    }

    pub fn shop(&self) -> &Shop {
        &self.state.shop
    }

    pub fn inventory(&self) -> &Inventory {
        &self.state.inventory
    }

    pub fn derived_stats(&self) -> EngineResult<DerivedStats> {
        Ok(DerivedStats::compute(self.state.require_player()?))
    }

    pub fn unspent_talent_points(&self) -> EngineResult<u32> {
        Ok(talents::unspent_points(self.state.require_player()?))
    }

    // ---- run control ------------------------------------------------

    /// Start a run with a fresh champion. The bag, stash, and shop
    /// belong to the account and carry over; everything about the
    /// previous champion is discarded.
    pub fn start_run(&mut self, name: &str, class_name: &str, side: Side) -> EngineResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidSelection(
                "a champion needs a name".to_string(),
            ));
        }
        if name.chars().count() > PLAYER_NAME_MAX_LENGTH {
            return Err(EngineError::InvalidSelection(format!(
                "name too long (max {PLAYER_NAME_MAX_LENGTH} characters)"
            )));
        }
        if !name.chars().all(|c| c.is_alphanumeric() || c == ' ') {
            return Err(EngineError::InvalidSelection(
                "name may only use letters, numbers, and spaces".to_string(),
            ));
        }
        if !self
            .state
            .lists
            .for_side(side)
            .iter()
            .any(|c| c == class_name)
        {
            return Err(EngineError::InvalidSelection(format!(
                "{class_name} is not on the {} pick list",
                side.name()
            )));
        }

        self.state.side = Some(side);
        self.state.wave = 1;
        self.state.theme = theme_for_wave(side, 1).to_string();
        self.state.phase = RunPhase::Battle;
        self.state.auto = AutoPlay::default();
        self.state.player = Some(Player::new(name.to_string(), class_name.to_string()));
        Ok(())
    }

    /// Fight the current wave.
    pub fn tick_wave(&mut self, mode: TickMode, rng: &mut impl Rng) -> EngineResult<TickResult> {
        advance_wave(&mut self.state, mode, rng)
    }

    /// Arm or disarm auto-play. Arming schedules the first tick one
    /// interval out rather than firing immediately; intervals below
    /// the floor are clamped up. Returns the new running state.
    pub fn toggle_auto(&mut self, interval_ms: u64, now_ms: u64) -> bool {
        if self.state.auto.running {
            self.state.auto.running = false;
        } else {
            let interval = interval_ms.max(AUTO_MIN_INTERVAL_MS);
            self.state.auto = AutoPlay {
                running: true,
                interval_ms: interval,
                next_due_ms: now_ms + interval,
            };
        }
        self.state.auto.running
    }

    /// Drive auto-play from the embedding layer's clock. Fires at most
    /// one tick per call once the scheduled moment has passed, then
    /// re-arms from the firing time.
    pub fn poll_auto(
        &mut self,
        now_ms: u64,
        rng: &mut impl Rng,
    ) -> EngineResult<Option<TickResult>> {
        if !self.state.auto.running || self.state.phase != RunPhase::Battle {
            return Ok(None);
        }
        if now_ms < self.state.auto.next_due_ms {
            return Ok(None);
        }
        let result = advance_wave(&mut self.state, TickMode::Auto, rng)?;
        self.state.auto.next_due_ms = now_ms + self.state.auto.interval_ms;
        Ok(Some(result))
    }

    // ---- economy ----------------------------------------------------

    /// Pay for a shop reroll. Returns the gold spent; every paid
    /// refresh raises the price of the next one.
    pub fn shop_refresh(&mut self, rng: &mut impl Rng) -> EngineResult<u64> {
        let cost = self.state.shop.refresh_cost();
        {
            let player = self.state.require_player_mut()?;
            if player.gold < cost {
                return Err(EngineError::InsufficientGold {
                    needed: cost,
                    have: player.gold,
                });
            }
            player.gold -= cost;
        }
        let ilvl = self.state.wave;
        self.state.shop.refresh_paid(false, ilvl, rng);
        Ok(cost)
    }

    /// Buy an item off the shelves into the bag. The featured discount
    /// is applied here, at the moment of purchase.
    pub fn shop_buy(&mut self, id: Uuid) -> EngineResult<u64> {
        let price = self
            .state
            .shop
            .price_of(id)
            .ok_or_else(|| EngineError::InvalidSelection(format!("not for sale: {id}")))?;
        {
            let player = self.state.require_player_mut()?;
            if player.gold < price {
                return Err(EngineError::InsufficientGold {
                    needed: price,
                    have: player.gold,
                });
            }
            player.gold -= price;
        }
        let item = self.state.shop.take(id)?;
        self.state.inventory.add(item);
        Ok(price)
    }

    /// Sell an item from the bag or stash for half its sticker price.
    pub fn sell(&mut self, id: Uuid) -> EngineResult<u64> {
        self.state.require_player()?;
        let credit = self.state.inventory.sell(id)?;
        self.state.require_player_mut()?.gold += credit;
        Ok(credit)
    }

    /// Reclaim a sold item for exactly what the sale paid out.
    pub fn buy_back(&mut self, id: Uuid) -> EngineResult<u64> {
        let price = self
            .state
            .inventory
            .buyback_price(id)
            .ok_or_else(|| EngineError::InvalidSelection(format!("not in buyback: {id}")))?;
        {
            let player = self.state.require_player_mut()?;
            if player.gold < price {
                return Err(EngineError::InsufficientGold {
                    needed: price,
                    have: player.gold,
                });
            }
            player.gold -= price;
        }
        let item = self.state.inventory.take_buyback(id)?;
        self.state.inventory.add(item);
        Ok(price)
    }

    // ---- items ------------------------------------------------------

    pub fn equip(&mut self, id: Uuid) -> EngineResult<()> {
        let RunState {
            player, inventory, ..
        } = &mut self.state;
        let player = player.as_mut().ok_or(EngineError::NoActiveRun)?;
        inventory.equip(&mut player.equipment, id)
    }

    pub fn unequip(&mut self, slot: ItemSlot) -> EngineResult<()> {
        let RunState {
            player, inventory, ..
        } = &mut self.state;
        let player = player.as_mut().ok_or(EngineError::NoActiveRun)?;
        inventory.unequip(&mut player.equipment, slot)
    }

    pub fn stash(&mut self, id: Uuid) -> EngineResult<()> {
        self.state.inventory.stash_item(id)
    }

    pub fn unstash(&mut self, id: Uuid) -> EngineResult<()> {
        self.state.inventory.unstash_item(id)
    }

    pub fn toggle_lock(&mut self, id: Uuid) -> EngineResult<bool> {
        self.state.inventory.toggle_lock(id)
    }

    /// Drink a potion from the bag or stash. Heals a fraction of max
    /// HP, capped at full. Returns the HP actually restored.
    pub fn use_potion(&mut self, id: Uuid) -> EngineResult<u32> {
        let max_hp = DerivedStats::compute(self.state.require_player()?).max_hp;
        let heal_pct = self
            .state
            .inventory
            .find(id)
            .and_then(Item::heal_pct)
            .ok_or_else(|| EngineError::InvalidSelection("not a potion".to_string()))?;

        let player = self.state.require_player_mut()?;
        let before = player.hp;
        let heal = (max_hp as f64 * heal_pct).floor() as u32;
        player.hp = (player.hp + heal).min(max_hp);
        let healed = player.hp - before;

        self.state.inventory.remove(id);
        Ok(healed)
    }

    // ---- talents ----------------------------------------------------

    pub fn allocate_talent(&mut self, branch: TalentBranch) -> EngineResult<()> {
        talents::allocate(self.state.require_player_mut()?, branch)
    }

    /// Paid respec: refunds every spent point for gold.
    pub fn respec(&mut self) -> EngineResult<u32> {
        talents::respec(self.state.require_player_mut()?)
    }

    /// Free reset, for when the game itself invalidates a build.
    pub fn reset_talents(&mut self) -> EngineResult<u32> {
        Ok(talents::reset(self.state.require_player_mut()?))
    }

    // ---- persistence ------------------------------------------------

    pub fn snapshot(&self) -> SaveData {
        SaveData::capture(&self.state)
    }

    /// Restore a saved session. A snapshot that fails validation
    /// resets the engine to a fresh boot before the error surfaces,
    /// so the caller always holds a playable state.
    pub fn restore(&mut self, data: SaveData, rng: &mut impl Rng) -> EngineResult<()> {
        match data.into_state() {
            Ok(mut state) => {
                if state.lists.is_empty() {
                    state.lists = Self::draw_lists(rng);
                }
                self.state = state;
                Ok(())
            }
            Err(err) => {
                self.state = Self::fresh_state(rng);
                Err(err)
            }
        }
    }
}
