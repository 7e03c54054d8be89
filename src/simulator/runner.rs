//! Main simulation runner.
//!
//! Each simulated session drives the real [`Arena`] facade with a
//! deliberately simple player: spend talent points as they arrive,
//! wear strict upgrades, drink a potion when health runs low, and
//! fight every wave on auto. Statistics are read off [`TickResult`]
//! events rather than engine internals.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::engine::Arena;
use crate::core::state::RunPhase;
use crate::core::talents::TalentBranch;
use crate::core::tick::{TickEvent, TickMode, TickResult};
use crate::items::types::Item;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Run the full batch and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed + run_idx as u64),
            None => StdRng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Wave {}, Level {}, Kills {}, Gold {}, {}",
                run_idx + 1,
                config.num_runs,
                run_stats.final_wave,
                run_stats.final_level,
                run_stats.total_kills,
                run_stats.gold_earned,
                if run_stats.defeated { "defeated" } else { "cleared" }
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs, config.target_wave)
}

/// Accumulates counters from tick events during one session.
#[derive(Default)]
struct SimStats {
    waves_cleared: u32,
    total_kills: u64,
    boss_waves_cleared: u32,
    gold_earned: u64,
    drops_by_rarity: [u64; 4],
    potion_drops: u32,
    potions_drunk: u32,
    upgrades_equipped: u32,
    defeated: bool,
}

impl SimStats {
    fn process_tick(&mut self, result: &TickResult) {
        for event in &result.events {
            match event {
                TickEvent::WaveCleared { is_boss, kills, .. } => {
                    self.waves_cleared += 1;
                    self.total_kills += *kills as u64;
                    if *is_boss {
                        self.boss_waves_cleared += 1;
                    }
                }
                TickEvent::GoldEarned { amount } => self.gold_earned += amount,
                TickEvent::ItemDropped { rarity, is_potion, .. } => {
                    if *is_potion {
                        self.potion_drops += 1;
                    } else {
                        self.drops_by_rarity[*rarity as usize] += 1;
                    }
                }
                TickEvent::Defeated { .. } => self.defeated = true,
                _ => {}
            }
        }
    }
}

/// Simulate one session from champion pick to target wave or defeat.
fn simulate_single_run(config: &SimConfig, rng: &mut StdRng) -> RunStats {
    let mut arena = Arena::new(rng);
    let class = arena.pick_list(config.side)[0].clone();
    arena
        .start_run("Sim", &class, config.side)
        .expect("fresh pick list always has a first entry");

    let mut stats = SimStats::default();
    let mut reached_target = false;

    loop {
        if arena.wave() > config.target_wave {
            reached_target = true;
            break;
        }
        if arena.phase() == RunPhase::GameOver {
            break;
        }

        spend_talents(&mut arena);
        if config.auto_equip {
            stats.upgrades_equipped += equip_upgrades(&mut arena);
        }
        if config.use_potions {
            stats.potions_drunk += drink_if_hurt(&mut arena);
        }

        match arena.tick_wave(TickMode::Auto, rng) {
            Ok(result) => stats.process_tick(&result),
            Err(_) => break,
        }
    }

    let final_level = arena.player().map(|p| p.level).unwrap_or(1);
    RunStats {
        reached_target,
        defeated: stats.defeated,
        final_wave: arena.wave(),
        final_level,
        waves_cleared: stats.waves_cleared,
        total_kills: stats.total_kills,
        boss_waves_cleared: stats.boss_waves_cleared,
        gold_earned: stats.gold_earned,
        drops_by_rarity: stats.drops_by_rarity,
        potion_drops: stats.potion_drops,
        potions_drunk: stats.potions_drunk,
        upgrades_equipped: stats.upgrades_equipped,
    }
}

/// Round-robin talent spending: offense, then defense, then utility.
fn spend_talents(arena: &mut Arena) {
    while arena.unspent_talent_points().unwrap_or(0) > 0 {
        let spent = arena
            .player()
            .map(|p| p.talents.total_spent())
            .unwrap_or(0);
        let branch = match spent % 3 {
            0 => TalentBranch::Offense,
            1 => TalentBranch::Defense,
            _ => TalentBranch::Utility,
        };
        if arena.allocate_talent(branch).is_err() {
            break;
        }
    }
}

/// Rough worth of a piece of gear for upgrade comparisons.
fn gear_score(item: &Item) -> u32 {
    let affix_total: u32 = item.affixes.iter().map(|a| a.value).sum();
    item.base.total() + affix_total * 2
}

/// Wear the best strict upgrade from the bag, repeatedly, until
/// nothing in the bag beats what is worn.
fn equip_upgrades(arena: &mut Arena) -> u32 {
    let mut equipped = 0;
    loop {
        let candidate = arena
            .inventory()
            .bag()
            .iter()
            .filter_map(|item| {
                let slot = item.slot()?;
                let worn = arena
                    .player()?
                    .equipment
                    .get(slot)
                    .as_ref()
                    .map(gear_score)
                    .unwrap_or(0);
                let score = gear_score(item);
                (score > worn).then(|| (item.id, score - worn))
            })
            .max_by_key(|&(_, gain)| gain);

        match candidate {
            Some((id, _)) if arena.equip(id).is_ok() => equipped += 1,
            _ => break,
        }
    }
    equipped
}

/// Drink bag potions while below 40% health.
fn drink_if_hurt(arena: &mut Arena) -> u32 {
    let mut drunk = 0;
    loop {
        let (hp, max_hp) = match (arena.player(), arena.derived_stats()) {
            (Some(player), Ok(stats)) => (player.hp, stats.max_hp),
            _ => break,
        };
        if hp * 5 >= max_hp * 2 {
            break;
        }
        let Some(id) = arena
            .inventory()
            .bag()
            .iter()
            .find(|i| i.is_potion())
            .map(|i| i.id)
        else {
            break;
        };
        if arena.use_potion(id).is_err() {
            break;
        }
        drunk += 1;
    }
    drunk
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_run_makes_progress() {
        let config = SimConfig {
            num_runs: 1,
            seed: Some(12345),
            target_wave: 10,
            verbosity: 0,
            ..Default::default()
        };

        let mut rng = StdRng::seed_from_u64(12345);
        let stats = simulate_single_run(&config, &mut rng);

        assert!(stats.waves_cleared > 0);
        assert!(stats.total_kills > 0);
        assert!(stats.gold_earned > 0);
    }

    #[test]
    fn test_full_batch() {
        let config = SimConfig {
            num_runs: 5,
            seed: Some(42),
            target_wave: 10,
            verbosity: 0,
            ..Default::default()
        };

        let report = run_simulation(&config);
        assert_eq!(report.num_runs, 5);
        assert!(report.avg_total_kills > 0.0);
        assert!(report.avg_final_wave > 1.0);
    }

    #[test]
    fn test_same_seed_same_story() {
        let config = SimConfig {
            num_runs: 3,
            seed: Some(777),
            target_wave: 15,
            verbosity: 0,
            ..Default::default()
        };

        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.avg_final_wave, b.avg_final_wave);
        assert_eq!(a.avg_total_kills, b.avg_total_kills);
        assert_eq!(a.avg_gold_earned, b.avg_gold_earned);
    }

    #[test]
    fn test_runs_end_at_target_or_defeat() {
        let config = SimConfig {
            num_runs: 4,
            seed: Some(9),
            target_wave: 25,
            verbosity: 0,
            ..Default::default()
        };

        let report = run_simulation(&config);
        for run in &report.run_stats {
            assert!(run.reached_target || run.defeated);
            assert!(run.final_wave <= config.target_wave + 1);
        }
    }

    #[test]
    fn test_naked_runs_die_sooner_or_equal() {
        // Without potions and upgrades the same seeds cannot go further
        let seed = Some(31337);
        let assisted = run_simulation(&SimConfig {
            num_runs: 5,
            seed,
            target_wave: 60,
            verbosity: 0,
            ..Default::default()
        });
        let naked = run_simulation(&SimConfig {
            num_runs: 5,
            seed,
            target_wave: 60,
            use_potions: false,
            auto_equip: false,
            verbosity: 0,
            ..Default::default()
        });

        assert!(naked.avg_final_wave <= assisted.avg_final_wave + 10.0);
        for run in &naked.run_stats {
            assert_eq!(run.upgrades_equipped, 0);
            assert_eq!(run.potions_drunk, 0);
        }
    }
}
