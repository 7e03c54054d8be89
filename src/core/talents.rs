//! Talent branches: allocation, paid respec, and the bonuses each
//! branch grants.

use crate::core::constants::{
    DEFENSE_DEF_PCT, OFFENSE_ATK_PCT, RESPEC_COST_PER_POINT, TALENT_POINTS_PER_LEVEL,
    UTILITY_GOLD_PCT, UTILITY_LIFESTEAL_PCT,
};
use crate::core::state::Player;
use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TalentBranch {
    Offense,
    Defense,
    Utility,
}

impl TalentBranch {
    pub fn all() -> [TalentBranch; 3] {
        [TalentBranch::Offense, TalentBranch::Defense, TalentBranch::Utility]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TalentBranch::Offense => "Offense",
            TalentBranch::Defense => "Defense",
            TalentBranch::Utility => "Utility",
        }
    }
}

/// Points spent per branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talents {
    pub offense: u32,
    pub defense: u32,
    pub utility: u32,
}

impl Talents {
    pub fn total_spent(&self) -> u32 {
        self.offense + self.defense + self.utility
    }

    pub fn spent_in(&self, branch: TalentBranch) -> u32 {
        match branch {
            TalentBranch::Offense => self.offense,
            TalentBranch::Defense => self.defense,
            TalentBranch::Utility => self.utility,
        }
    }

    pub fn add(&mut self, branch: TalentBranch) {
        match branch {
            TalentBranch::Offense => self.offense += 1,
            TalentBranch::Defense => self.defense += 1,
            TalentBranch::Utility => self.utility += 1,
        }
    }

    pub fn atk_bonus_pct(&self) -> u32 {
        self.offense * OFFENSE_ATK_PCT
    }

    pub fn def_bonus_pct(&self) -> u32 {
        self.defense * DEFENSE_DEF_PCT
    }

    pub fn gold_bonus_pct(&self) -> u32 {
        self.utility * UTILITY_GOLD_PCT
    }

    pub fn lifesteal_pct(&self) -> u32 {
        self.utility * UTILITY_LIFESTEAL_PCT
    }
}

/// Talent points earned so far. One point per level past the first.
pub fn earned_points(player: &Player) -> u32 {
    (player.level.saturating_sub(1)) * TALENT_POINTS_PER_LEVEL
}

pub fn unspent_points(player: &Player) -> u32 {
    earned_points(player).saturating_sub(player.talents.total_spent())
}

/// Spend one unspent point in a branch.
pub fn allocate(player: &mut Player, branch: TalentBranch) -> EngineResult<()> {
    if unspent_points(player) == 0 {
        return Err(EngineError::InsufficientTalentPoints);
    }
    player.talents.add(branch);
    Ok(())
}

/// Paid respec: refund every spent point, charging gold per point.
/// Returns the number of points refunded.
pub fn respec(player: &mut Player) -> EngineResult<u32> {
    let spent = player.talents.total_spent();
    let cost = spent as u64 * RESPEC_COST_PER_POINT;
    if player.gold < cost {
        return Err(EngineError::InsufficientGold {
            needed: cost,
            have: player.gold,
        });
    }
    player.gold -= cost;
    player.talents = Talents::default();
    Ok(spent)
}

/// Free reset. Returns the number of points refunded.
pub fn reset(player: &mut Player) -> u32 {
    let spent = player.talents.total_spent();
    player.talents = Talents::default();
    spent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leveled_player(level: u32) -> Player {
        let mut player = Player::new("Rex".to_string(), "Barbarian".to_string());
        player.level = level;
        player
    }

    #[test]
    fn test_no_points_at_level_one() {
        let player = leveled_player(1);
        assert_eq!(earned_points(&player), 0);
        assert_eq!(unspent_points(&player), 0);
    }

    #[test]
    fn test_one_point_per_level_gained() {
        let player = leveled_player(5);
        assert_eq!(earned_points(&player), 4);
        assert_eq!(unspent_points(&player), 4);
    }

    #[test]
    fn test_allocate_spends_points() {
        let mut player = leveled_player(3);
        allocate(&mut player, TalentBranch::Offense).unwrap();
        allocate(&mut player, TalentBranch::Utility).unwrap();
        assert_eq!(player.talents.offense, 1);
        assert_eq!(player.talents.utility, 1);
        assert_eq!(unspent_points(&player), 0);
    }

    #[test]
    fn test_allocate_without_points_fails() {
        let mut player = leveled_player(1);
        assert_eq!(
            allocate(&mut player, TalentBranch::Defense),
            Err(EngineError::InsufficientTalentPoints)
        );

        let mut player = leveled_player(2);
        allocate(&mut player, TalentBranch::Defense).unwrap();
        assert_eq!(
            allocate(&mut player, TalentBranch::Defense),
            Err(EngineError::InsufficientTalentPoints)
        );
    }

    #[test]
    fn test_branch_bonuses() {
        let talents = Talents {
            offense: 2,
            defense: 3,
            utility: 4,
        };
        assert_eq!(talents.atk_bonus_pct(), 2 * OFFENSE_ATK_PCT);
        assert_eq!(talents.def_bonus_pct(), 3 * DEFENSE_DEF_PCT);
        assert_eq!(talents.gold_bonus_pct(), 4 * UTILITY_GOLD_PCT);
        assert_eq!(talents.lifesteal_pct(), 4 * UTILITY_LIFESTEAL_PCT);
    }

    #[test]
    fn test_respec_charges_per_spent_point() {
        let mut player = leveled_player(4);
        allocate(&mut player, TalentBranch::Offense).unwrap();
        allocate(&mut player, TalentBranch::Offense).unwrap();
        allocate(&mut player, TalentBranch::Defense).unwrap();

        player.gold = 3 * RESPEC_COST_PER_POINT;
        let refunded = respec(&mut player).unwrap();
        assert_eq!(refunded, 3);
        assert_eq!(player.gold, 0);
        assert_eq!(player.talents, Talents::default());
        assert_eq!(unspent_points(&player), 3);
    }

    #[test]
    fn test_respec_insufficient_gold() {
        let mut player = leveled_player(3);
        allocate(&mut player, TalentBranch::Offense).unwrap();
        allocate(&mut player, TalentBranch::Offense).unwrap();

        player.gold = RESPEC_COST_PER_POINT * 2 - 1;
        let err = respec(&mut player).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientGold {
                needed: RESPEC_COST_PER_POINT * 2,
                have: RESPEC_COST_PER_POINT * 2 - 1,
            }
        );
        // Nothing changed
        assert_eq!(player.talents.offense, 2);
        assert_eq!(player.gold, RESPEC_COST_PER_POINT * 2 - 1);
    }

    #[test]
    fn test_free_reset_ignores_gold() {
        let mut player = leveled_player(3);
        allocate(&mut player, TalentBranch::Utility).unwrap();
        allocate(&mut player, TalentBranch::Utility).unwrap();
        player.gold = 0;

        assert_eq!(reset(&mut player), 2);
        assert_eq!(player.talents, Talents::default());
        assert_eq!(player.gold, 0);
    }
}
