//! Level curve and experience banking.

use crate::core::constants::{XP_CURVE_BASE, XP_CURVE_EXPONENT};
use crate::core::state::Player;
use crate::core::stats::DerivedStats;

/// XP required to advance from `level` to the next.
pub fn xp_needed(level: u32) -> u64 {
    (XP_CURVE_BASE * (level.max(1) as f64).powf(XP_CURVE_EXPONENT)).floor() as u64
}

/// Bank XP and resolve any level-ups. Overflow XP carries toward the
/// next level, and a level-up restores the player to full health.
/// Returns the number of levels gained.
pub fn gain_xp(player: &mut Player, amount: u64) -> u32 {
    player.xp += amount;

    let mut gained = 0;
    while player.xp >= xp_needed(player.level) {
        player.xp -= xp_needed(player.level);
        player.level += 1;
        gained += 1;
    }

    if gained > 0 {
        player.hp = DerivedStats::compute(player).max_hp;
    }

    gained
}
