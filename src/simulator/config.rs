//! Simulation configuration.

use crate::core::roster::Side;

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// A run that clears this wave counts as completed
    pub target_wave: u32,

    /// Which side the simulated champion fights for
    pub side: Side,

    /// Drink potions from the bag when health runs low
    pub use_potions: bool,

    /// Auto-equip strict upgrades as they drop
    pub auto_equip: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run lines)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 500,
            seed: None,
            target_wave: 50,
            side: Side::Heroes,
            use_potions: true,
            auto_equip: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking early-game balance.
    pub fn quick_balance_test(target_wave: u32) -> Self {
        Self {
            num_runs: 100,
            target_wave,
            ..Default::default()
        }
    }

    /// Long-haul config: how far can a run actually go?
    pub fn deep_run_test() -> Self {
        Self {
            num_runs: 25,
            target_wave: 200,
            ..Default::default()
        }
    }

    /// Bare-knuckle config: no potions, no gear swaps. Measures the
    /// raw level curve against the wave curve.
    pub fn naked_curve_test(target_wave: u32) -> Self {
        Self {
            num_runs: 100,
            target_wave,
            use_potions: false,
            auto_equip: false,
            ..Default::default()
        }
    }
}
