//! Balance simulator CLI.
//!
//! Run Monte Carlo batches to analyze wave/combat balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 500 runs to wave 50
//!   cargo run --bin simulate -- -n 100 -w 30   # 100 runs to wave 30
//!   cargo run --bin simulate -- --seed 42      # Reproducible batch

use arena::core::roster::Side;
use arena::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║               ARENA BALANCE SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Target Wave:    {}", config.target_wave);
    println!("  Side:           {}", config.side.name());
    println!("  Potions:        {}", config.use_potions);
    println!("  Auto-Equip:     {}", config.auto_equip);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(500);
                    i += 1;
                }
            }
            "-w" | "--wave" => {
                if i + 1 < args.len() {
                    config.target_wave = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--creatures" => {
                config.side = Side::Creatures;
            }
            "--no-potions" => {
                config.use_potions = false;
            }
            "--no-equip" => {
                config.auto_equip = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick_balance_test(20);
            }
            "--deep" => {
                config = SimConfig::deep_run_test();
            }
            "--naked" => {
                config = SimConfig::naked_curve_test(30);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Arena Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulated sessions (default: 500)");
    println!("    -w, --wave <W>      Target wave to clear (default: 50)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    --creatures         Fight for the creatures instead of the heroes");
    println!("    --no-potions        Never drink potions");
    println!("    --no-equip          Never swap gear");
    println!("    -v, --verbose       Per-run output");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick check (100 runs to wave 20)");
    println!("    --deep              Long haul (25 runs to wave 200)");
    println!("    --naked             Raw level curve (no potions, no gear)");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                    # Default batch");
    println!("    cargo run --bin simulate -- -n 100 -w 30   # 100 runs to wave 30");
    println!("    cargo run --bin simulate -- --seed 42      # Reproducible");
    println!("    cargo run --bin simulate -- --quick        # Quick balance check");
    println!("    cargo run --bin simulate -- --deep -v      # Deep runs, per-run lines");
}
