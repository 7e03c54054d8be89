use crate::core::constants::{AUTO_DEFAULT_INTERVAL_MS, BASE_MAX_HP};
use crate::core::roster::Side;
use crate::core::talents::Talents;
use crate::error::{EngineError, EngineResult};
use crate::inventory::Inventory;
use crate::items::equipment::Equipment;
use crate::shop::Shop;
use serde::{Deserialize, Serialize};

/// The player's champion for the current run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub class_name: String,
    pub level: u32,
    pub xp: u64,
    pub gold: u64,
    pub hp: u32,
    pub talents: Talents,
    pub equipment: Equipment,
    /// Waves remaining before the special attack is ready again
    pub special_cooldown: u32,
}

impl Player {
    pub fn new(name: String, class_name: String) -> Self {
        Self {
            name,
            class_name,
            level: 1,
            xp: 0,
            gold: 0,
            hp: BASE_MAX_HP,
            talents: Talents::default(),
            equipment: Equipment::new(),
            special_cooldown: 0,
        }
    }

    pub fn special_ready(&self) -> bool {
        self.special_cooldown == 0
    }
}

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Choosing a side and champion
    Selection,
    /// Fighting waves
    Battle,
    /// Defeated; the run is over until a new champion is chosen
    GameOver,
}

/// Polled auto-play scheduler. Arming records when the next tick is due;
/// polling fires at most one tick per call once that moment passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPlay {
    pub running: bool,
    pub interval_ms: u64,
    pub next_due_ms: u64,
}

impl Default for AutoPlay {
    fn default() -> Self {
        Self {
            running: false,
            interval_ms: AUTO_DEFAULT_INTERVAL_MS,
            next_due_ms: 0,
        }
    }
}

/// Champion selection lists, one draw per side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PickLists {
    pub heroes: Vec<String>,
    pub creatures: Vec<String>,
}

impl PickLists {
    pub fn for_side(&self, side: Side) -> &[String] {
        match side {
            Side::Heroes => &self.heroes,
            Side::Creatures => &self.creatures,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty() && self.creatures.is_empty()
    }
}

/// Everything the engine tracks for one session.
#[derive(Debug, Clone)]
pub struct RunState {
    pub side: Option<Side>,
    pub wave: u32,
    pub theme: String,
    pub phase: RunPhase,
    pub auto: AutoPlay,
    pub player: Option<Player>,
    pub lists: PickLists,
    pub shop: Shop,
    pub inventory: Inventory,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            side: None,
            wave: 1,
            theme: String::new(),
            phase: RunPhase::Selection,
            auto: AutoPlay::default(),
            player: None,
            lists: PickLists::default(),
            shop: Shop::new(),
            inventory: Inventory::new(),
        }
    }

    pub fn require_player(&self) -> EngineResult<&Player> {
        self.player.as_ref().ok_or(EngineError::NoActiveRun)
    }

    pub fn require_player_mut(&mut self) -> EngineResult<&mut Player> {
        self.player.as_mut().ok_or(EngineError::NoActiveRun)
    }

    pub fn require_side(&self) -> EngineResult<Side> {
        self.side.ok_or(EngineError::NoActiveRun)
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new("Rex".to_string(), "Barbarian".to_string());
        assert_eq!(player.level, 1);
        assert_eq!(player.xp, 0);
        assert_eq!(player.gold, 0);
        assert_eq!(player.hp, BASE_MAX_HP);
        assert!(player.special_ready());
        assert_eq!(player.equipment.iter_equipped().count(), 0);
    }

    #[test]
    fn test_fresh_state_is_in_selection() {
        let state = RunState::new();
        assert_eq!(state.phase, RunPhase::Selection);
        assert!(state.side.is_none());
        assert!(state.player.is_none());
        assert_eq!(state.wave, 1);
        assert!(!state.auto.running);
    }

    #[test]
    fn test_require_player_without_run() {
        let mut state = RunState::new();
        assert_eq!(state.require_player().unwrap_err(), EngineError::NoActiveRun);
        assert_eq!(
            state.require_player_mut().unwrap_err(),
            EngineError::NoActiveRun
        );
        assert_eq!(state.require_side().unwrap_err(), EngineError::NoActiveRun);
    }

    #[test]
    fn test_pick_lists_by_side() {
        let lists = PickLists {
            heroes: vec!["Knight".to_string()],
            creatures: vec!["Dragon".to_string()],
        };
        assert_eq!(lists.for_side(Side::Heroes), ["Knight".to_string()]);
        assert_eq!(lists.for_side(Side::Creatures), ["Dragon".to_string()]);
        assert!(!lists.is_empty());
        assert!(PickLists::default().is_empty());
    }

    #[test]
    fn test_auto_play_defaults() {
        let auto = AutoPlay::default();
        assert!(!auto.running);
        assert_eq!(auto.interval_ms, AUTO_DEFAULT_INTERVAL_MS);
    }
}
