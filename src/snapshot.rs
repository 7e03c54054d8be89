//! Session snapshots: a serializable image of everything worth
//! keeping, and the validation that turns one back into a live state.
//! Disk framing lives in [`crate::save_manager`]; this module never
//! touches I/O.

use crate::core::constants::SAVE_VERSION;
use crate::core::roster::{theme_for_wave, Side};
use crate::core::state::{AutoPlay, PickLists, Player, RunPhase, RunState};
use crate::core::stats::DerivedStats;
use crate::error::{EngineError, EngineResult};
use crate::inventory::Inventory;
use crate::shop::Shop;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Everything a session carries across a shutdown. The auto-play
/// scheduler is deliberately absent: a restored session always comes
/// back disarmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    /// Unix timestamp of the capture.
    pub saved_at: i64,
    pub side: Option<Side>,
    pub wave: u32,
    pub theme: String,
    pub phase: RunPhase,
    pub player: Option<Player>,
    pub inventory: Inventory,
    pub shop: Shop,
    pub lists: PickLists,
}

impl SaveData {
    /// Photograph a live state.
    pub fn capture(state: &RunState) -> Self {
        Self {
            version: SAVE_VERSION,
            saved_at: Utc::now().timestamp(),
            side: state.side,
            wave: state.wave,
            theme: state.theme.clone(),
            phase: state.phase,
            player: state.player.clone(),
            inventory: state.inventory.clone(),
            shop: state.shop.clone(),
            lists: state.lists.clone(),
        }
    }

    /// Validate the snapshot and rebuild a live state from it.
    ///
    /// Recoverable oddities are repaired in place: the wave counter is
    /// clamped to at least 1, HP is clamped to the champion's real
    /// maximum, and the theme is recomputed from the side and wave.
    /// Structural nonsense is a [`EngineError::CorruptSave`].
    pub fn into_state(self) -> EngineResult<RunState> {
        if self.version != SAVE_VERSION {
            return Err(EngineError::CorruptSave(format!(
                "unsupported save version {} (expected {})",
                self.version, SAVE_VERSION
            )));
        }

        let in_run = self.phase != RunPhase::Selection;
        if in_run && (self.player.is_none() || self.side.is_none()) {
            return Err(EngineError::CorruptSave(
                "run phase recorded without a champion".to_string(),
            ));
        }

        let wave = self.wave.max(1);
        let mut player = self.player;
        if let Some(champion) = player.as_mut() {
            let max_hp = DerivedStats::compute(champion).max_hp;
            champion.hp = champion.hp.min(max_hp);
            if champion.hp == 0 && self.phase == RunPhase::Battle {
                return Err(EngineError::CorruptSave(
                    "champion saved mid-battle with no health".to_string(),
                ));
            }
        }

        let theme = match self.side {
            Some(side) => theme_for_wave(side, wave).to_string(),
            None => self.theme,
        };

        Ok(RunState {
            side: self.side,
            wave,
            theme,
            phase: self.phase,
            auto: AutoPlay::default(),
            player,
            lists: self.lists,
            shop: self.shop,
            inventory: self.inventory,
        })
    }
}

/// Serialize a snapshot to its JSON interchange form.
pub fn encode_snapshot(data: &SaveData) -> EngineResult<String> {
    serde_json::to_string(data).map_err(|e| EngineError::CorruptSave(e.to_string()))
}

/// Parse a snapshot from JSON. Malformed text is a
/// [`EngineError::CorruptSave`]; version checks happen later, in
/// [`SaveData::into_state`].
pub fn decode_snapshot(json: &str) -> EngineResult<SaveData> {
    serde_json::from_str(json).map_err(|e| EngineError::CorruptSave(e.to_string()))
}
