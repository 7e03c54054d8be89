use crate::core::constants::{
    ATK_PER_LEVEL, BASE_ATK, BASE_DEF, BASE_MAX_HP, DEF_PER_LEVEL, HP_PER_LEVEL,
    SET_INCOMING_DAMAGE_MULT,
};
use crate::core::state::Player;
use crate::items::types::AffixType;

/// Effective combat stats after every bonus is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    pub atk: u32,
    pub def: u32,
    pub max_hp: u32,
    pub lifesteal_pct: u32,
    pub gold_pct: u32,
    pub regen_flat: u32,
    pub incoming_mult: f64,
}

impl DerivedStats {
    /// Single source of truth for effective stats: base values, level
    /// growth, equipped gear, talent bonuses, and set bonuses.
    pub fn compute(player: &Player) -> Self {
        let gear = player.equipment.total_base();
        let level_ups = player.level.saturating_sub(1);

        // Flat stats: base + per-level growth + gear
        let flat_atk = BASE_ATK + level_ups * ATK_PER_LEVEL + gear.atk;
        let flat_def = BASE_DEF + level_ups * DEF_PER_LEVEL + gear.def;
        let max_hp = BASE_MAX_HP + level_ups * HP_PER_LEVEL + gear.hp;

        // Percent bonuses from talents and gear affixes
        let atk_pct =
            player.talents.atk_bonus_pct() + player.equipment.affix_total(AffixType::AtkPct);
        let def_pct =
            player.talents.def_bonus_pct() + player.equipment.affix_total(AffixType::DefPct);

        let atk = (flat_atk as f64 * (1.0 + atk_pct as f64 / 100.0)).floor() as u32;
        let def = (flat_def as f64 * (1.0 + def_pct as f64 / 100.0)).floor() as u32;

        let lifesteal_pct =
            player.talents.lifesteal_pct() + player.equipment.affix_total(AffixType::LifestealPct);
        let gold_pct =
            player.talents.gold_bonus_pct() + player.equipment.affix_total(AffixType::GoldPct);
        let regen_flat = player.equipment.affix_total(AffixType::RegenFlat);

        // Each completed set shaves incoming damage multiplicatively
        let incoming_mult = SET_INCOMING_DAMAGE_MULT.powi(player.equipment.active_sets() as i32);

        Self {
            atk: atk.max(1),
            def,
            max_hp: max_hp.max(1),
            lifesteal_pct,
            gold_pct,
            regen_flat,
            incoming_mult,
        }
    }
}
