//! Item system: types, naming, equipment, and loot generation.

pub mod drops;
pub mod equipment;
pub mod generation;
pub mod names;
pub mod types;

pub use drops::*;
pub use equipment::*;
pub use generation::*;
pub use types::*;
