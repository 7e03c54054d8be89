//! Simulation report generation.

use std::collections::HashMap;

/// Everything a single simulated session produced.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub reached_target: bool,
    pub defeated: bool,
    /// Wave the run ended on: the first uncleared wave, or the wave
    /// of the fatal exchange.
    pub final_wave: u32,
    pub final_level: u32,
    pub waves_cleared: u32,
    pub total_kills: u64,
    pub boss_waves_cleared: u32,
    pub gold_earned: u64,
    /// Gear drops indexed by rarity (normal, rare, epic, legendary).
    pub drops_by_rarity: [u64; 4],
    pub potion_drops: u32,
    pub potions_drunk: u32,
    pub upgrades_equipped: u32,
}

/// Aggregated results from a simulation batch.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_completed: u32,
    pub runs_defeated: u32,
    pub target_wave: u32,

    // Aggregated stats
    pub avg_final_wave: f64,
    pub avg_final_level: f64,
    pub avg_total_kills: f64,
    pub avg_gold_earned: f64,
    pub avg_upgrades_equipped: f64,
    pub avg_potions_drunk: f64,
    pub avg_drops_by_rarity: [f64; 4],

    /// For each milestone wave, the share of runs that got there.
    pub wave_milestones: Vec<(u32, f64)>,
    /// Defeats bucketed by decade of the fatal wave.
    pub defeat_wave_buckets: HashMap<u32, u32>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Aggregate a batch of completed runs.
    pub fn from_runs(runs: Vec<RunStats>, target_wave: u32) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;
        let runs_completed = runs.iter().filter(|r| r.reached_target).count() as u32;
        let runs_defeated = runs.iter().filter(|r| r.defeated).count() as u32;

        let avg_final_wave = runs.iter().map(|r| r.final_wave as f64).sum::<f64>() / denom;
        let avg_final_level = runs.iter().map(|r| r.final_level as f64).sum::<f64>() / denom;
        let avg_total_kills = runs.iter().map(|r| r.total_kills as f64).sum::<f64>() / denom;
        let avg_gold_earned = runs.iter().map(|r| r.gold_earned as f64).sum::<f64>() / denom;
        let avg_upgrades_equipped =
            runs.iter().map(|r| r.upgrades_equipped as f64).sum::<f64>() / denom;
        let avg_potions_drunk = runs.iter().map(|r| r.potions_drunk as f64).sum::<f64>() / denom;

        let mut avg_drops_by_rarity = [0.0; 4];
        for (idx, slot) in avg_drops_by_rarity.iter_mut().enumerate() {
            *slot = runs.iter().map(|r| r.drops_by_rarity[idx] as f64).sum::<f64>() / denom;
        }

        let mut wave_milestones = Vec::new();
        let mut milestone = 10;
        while milestone <= target_wave {
            let reached = runs.iter().filter(|r| r.final_wave >= milestone).count();
            wave_milestones.push((milestone, reached as f64 / denom * 100.0));
            milestone += 10;
        }

        let mut defeat_wave_buckets = HashMap::new();
        for run in runs.iter().filter(|r| r.defeated) {
            *defeat_wave_buckets.entry(run.final_wave / 10 * 10).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_completed,
            runs_defeated,
            target_wave,
            avg_final_wave,
            avg_final_level,
            avg_total_kills,
            avg_gold_earned,
            avg_upgrades_equipped,
            avg_potions_drunk,
            avg_drops_by_rarity,
            wave_milestones,
            defeat_wave_buckets,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    ARENA SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} cleared wave {}, {} defeated\n\n",
            self.num_runs, self.runs_completed, self.target_wave, self.runs_defeated
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Wave:      {:.1}\n", self.avg_final_wave));
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Total Kills:     {:.0}\n", self.avg_total_kills));
        report.push_str(&format!(
            "  Avg Gold Earned:     {:.0}\n\n",
            self.avg_gold_earned
        ));

        report.push_str("── LOOT ─────────────────────────────────────────────────────────\n");
        let labels = ["Normal", "Rare", "Epic", "Legendary"];
        for (label, avg) in labels.iter().zip(self.avg_drops_by_rarity.iter()) {
            report.push_str(&format!("  Avg {:9} Drops: {:.2}\n", label, avg));
        }
        report.push_str(&format!(
            "  Avg Upgrades Worn:   {:.1}\n",
            self.avg_upgrades_equipped
        ));
        report.push_str(&format!(
            "  Avg Potions Drunk:   {:.1}\n\n",
            self.avg_potions_drunk
        ));

        report.push_str("── WAVE MILESTONES ──────────────────────────────────────────────\n");
        for (milestone, pct) in &self.wave_milestones {
            let bar_len = (pct / 5.0) as usize;
            let bar: String = "█".repeat(bar_len);
            report.push_str(&format!("  Wave {:3}: {:>5.1}% {}\n", milestone, pct, bar));
        }
        report.push('\n');

        if !self.defeat_wave_buckets.is_empty() {
            report.push_str("── DEFEAT WAVES ─────────────────────────────────────────────────\n");
            let mut buckets: Vec<_> = self.defeat_wave_buckets.iter().collect();
            buckets.sort_by_key(|(wave, _)| **wave);
            for (bucket, count) in buckets {
                report.push_str(&format!(
                    "  Waves {:3}-{:3}: {} defeats\n",
                    bucket,
                    bucket + 9,
                    count
                ));
            }
            report.push('\n');
        }

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let completion_rate = self.runs_completed as f64 / self.num_runs.max(1) as f64 * 100.0;
        let rating = if completion_rate > 90.0 {
            "TOO EASY - almost every run clears the target"
        } else if completion_rate > 50.0 {
            "GOOD - most runs make it, the rest die trying"
        } else if completion_rate > 10.0 {
            "HARD - the target wave is a real wall"
        } else {
            "TOO HARD - the curve outruns the champion"
        };
        report.push_str(&format!("  Completion Rate: {:.1}%\n", completion_rate));
        report.push_str(&format!("  Rating:          {}\n", rating));

        if self.avg_final_wave < self.target_wave as f64 / 2.0 {
            report.push_str("  ⚠️  Runs stall in the first half - early waves too steep?\n");
        }
        if self.avg_drops_by_rarity[3] < 0.5 && self.runs_completed > 0 {
            report.push_str("  ⚠️  Very few legendaries - boss drop floor too strict?\n");
        }
        if self.avg_upgrades_equipped < 3.0 && self.num_runs > 0 {
            report.push_str("  ⚠️  Few upgrades worn - loot not keeping pace with waves?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Serialize aggregates only; per-run stats stay internal.
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 13)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("runs_completed", &self.runs_completed)?;
        state.serialize_field("runs_defeated", &self.runs_defeated)?;
        state.serialize_field("target_wave", &self.target_wave)?;
        state.serialize_field("avg_final_wave", &self.avg_final_wave)?;
        state.serialize_field("avg_final_level", &self.avg_final_level)?;
        state.serialize_field("avg_total_kills", &self.avg_total_kills)?;
        state.serialize_field("avg_gold_earned", &self.avg_gold_earned)?;
        state.serialize_field("avg_upgrades_equipped", &self.avg_upgrades_equipped)?;
        state.serialize_field("avg_potions_drunk", &self.avg_potions_drunk)?;
        state.serialize_field("avg_drops_by_rarity", &self.avg_drops_by_rarity)?;
        state.serialize_field("wave_milestones", &self.wave_milestones)?;
        state.serialize_field(
            "completion_rate",
            &(self.runs_completed as f64 / self.num_runs.max(1) as f64 * 100.0),
        )?;
        state.end()
    }
}
