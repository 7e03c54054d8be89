//! Headless balance simulator for Monte Carlo analysis.
//!
//! Run hundreds of simulated sessions to analyze:
//! - How deep runs get before defeat
//! - Item drop rates and upgrade pacing
//! - Gold income against the wave curve
//!
//! Every simulated session drives the real [`crate::core::Arena`]
//! facade, so results match actual gameplay behavior tick for tick.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
