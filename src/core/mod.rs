//! Engine core: waves, combat, progression, and the run state machine.

pub mod combat;
pub mod constants;
pub mod engine;
pub mod progression;
pub mod roster;
pub mod state;
pub mod stats;
pub mod talents;
pub mod tick;
pub mod waves;

pub use combat::*;
pub use constants::*;
pub use engine::*;
pub use progression::*;
pub use roster::*;
pub use state::*;
pub use stats::*;
pub use talents::*;
pub use tick::*;
pub use waves::*;
