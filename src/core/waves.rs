//! Wave construction: difficulty scaling, boss cadence, and themed
//! enemy groups.

use crate::core::constants::{
    BOSS_DIFF_MULT, BOSS_WAVE_INTERVAL, DIFF_PER_WAVE, DIFF_STEP_BONUS, DIFF_STEP_WAVES,
    ELITE_CHANCE, ELITE_DIFF_MULT, ENEMY_GROUP_BASE, ENEMY_GROUP_MAX, ENEMY_GROUP_WAVE_DIV,
    SUPER_CHANCE, SUPER_DIFF_MULT,
};
use crate::core::roster::{theme_entry_for_wave, Side};
use rand::Rng;

/// One generated wave, ready to be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    pub number: u32,
    pub difficulty: u32,
    pub is_boss: bool,
    pub is_elite: bool,
    pub is_super: bool,
    pub theme: String,
    pub enemies: Vec<String>,
}

/// Base difficulty before wave-kind multipliers: linear growth plus a
/// step bonus for every full block of waves cleared.
pub fn base_difficulty(wave: u32) -> u32 {
    DIFF_PER_WAVE * wave + DIFF_STEP_BONUS * ((wave.max(1) - 1) / DIFF_STEP_WAVES)
}

pub fn is_boss_wave(wave: u32) -> bool {
    wave % BOSS_WAVE_INTERVAL == 0
}

fn enemy_count(wave: u32) -> usize {
    (ENEMY_GROUP_BASE + wave / ENEMY_GROUP_WAVE_DIV).min(ENEMY_GROUP_MAX) as usize
}

/// Roll the next wave for a side. Boss waves follow a fixed cadence;
/// elite and super status are random and stack multiplicatively with it.
pub fn generate_wave(side: Side, wave: u32, rng: &mut impl Rng) -> Wave {
    let is_boss = is_boss_wave(wave);
    let is_elite = rng.gen_bool(ELITE_CHANCE);
    let is_super = rng.gen_bool(SUPER_CHANCE);

    let mut difficulty = base_difficulty(wave) as f64;
    if is_boss {
        difficulty *= BOSS_DIFF_MULT;
    }
    if is_elite {
        difficulty *= ELITE_DIFF_MULT;
    }
    if is_super {
        difficulty *= SUPER_DIFF_MULT;
    }

    let (theme, members) = theme_entry_for_wave(side, wave);
    let count = enemy_count(wave);
    let mut enemies = Vec::with_capacity(count);
    for _ in 0..count {
        enemies.push(members[rng.gen_range(0..members.len())].to_string());
    }

    Wave {
        number: wave,
        difficulty: difficulty.floor() as u32,
        is_boss,
        is_elite,
        is_super,
        theme: theme.to_string(),
        enemies,
    }
}
