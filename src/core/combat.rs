//! Wave combat resolution. One call resolves the whole exchange:
//! damage out, damage in, kills, healing, and base rewards.

use crate::core::constants::{
    BOSS_GOLD_BONUS, DEFENSE_MITIGATION_FACTOR, ELITE_GOLD_BONUS, GOLD_PER_DIFF, GOLD_WAVE_BASE,
    INCOMING_DIFF_FACTOR, KILL_EFFICIENCY, SPECIAL_DAMAGE_MULT, SPECIAL_FLAT_HEAL,
    SUPER_GOLD_BONUS, XP_PER_DIFF, XP_WAVE_BASE,
};
use crate::core::stats::DerivedStats;
use crate::core::waves::Wave;

/// Everything that happened when a wave was fought.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatOutcome {
    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub kills: u32,
    /// Healing actually applied after the cap at max HP
    pub healed: u32,
    pub hp_after: u32,
    /// XP earned, credited even on a losing exchange
    pub xp_gained: u64,
    /// Gold earned before the gold-find bonus
    pub gold_gained: u64,
    pub used_special: bool,
    pub defeated: bool,
}

/// Resolve one wave of combat. The caller is responsible for only
/// setting `use_special` when the special attack is off cooldown.
pub fn resolve_wave(stats: &DerivedStats, hp: u32, wave: &Wave, use_special: bool) -> CombatOutcome {
    let attack_mult = if use_special { SPECIAL_DAMAGE_MULT } else { 1.0 };
    let damage_dealt = ((stats.atk as f64 * attack_mult).floor() as u32).max(1);

    let kill_bonus = if use_special { 2 } else { 1 };
    let kills = ((stats.atk as f64 * KILL_EFFICIENCY).floor() as u32 + kill_bonus).max(1);

    // Mitigation floors before the set-bonus multiplier shaves the rest
    let mitigated = (wave.difficulty as f64 * INCOMING_DIFF_FACTOR
        - stats.def as f64 * DEFENSE_MITIGATION_FACTOR)
        .max(0.0)
        .floor();
    let damage_taken = (mitigated * stats.incoming_mult).floor() as u32;

    let defeated = damage_taken >= hp;
    let (healed, hp_after) = if defeated {
        (0, 0)
    } else {
        let after_hit = hp - damage_taken;
        let mut potential = kills * stats.lifesteal_pct + stats.regen_flat;
        if use_special {
            potential += SPECIAL_FLAT_HEAL;
        }
        let healed = potential.min(stats.max_hp.saturating_sub(after_hit));
        (healed, after_hit + healed)
    };

    let xp_gained = XP_WAVE_BASE + XP_PER_DIFF * wave.difficulty as u64;
    let mut gold_gained = GOLD_WAVE_BASE + (GOLD_PER_DIFF * wave.difficulty as f64).floor() as u64;
    if wave.is_elite {
        gold_gained += ELITE_GOLD_BONUS;
    }
    if wave.is_boss {
        gold_gained += BOSS_GOLD_BONUS;
    }
    if wave.is_super {
        gold_gained += SUPER_GOLD_BONUS;
    }

    CombatOutcome {
        damage_dealt,
        damage_taken,
        kills,
        healed,
        hp_after,
        xp_gained,
        gold_gained,
        used_special: use_special,
        defeated,
    }
}
