//! Engine error taxonomy.
//!
//! Every fallible operation validates its preconditions before touching any
//! state, so a returned error always means "nothing changed".

use thiserror::Error;

/// Reasons an engine operation may be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Gold balance is below the required amount (respec, buyback,
    /// purchase, shop refresh).
    #[error("not enough gold: need {needed}, have {have}")]
    InsufficientGold { needed: u64, have: u64 },

    /// No unspent talent points remain.
    #[error("no unspent talent points")]
    InsufficientTalentPoints,

    /// The item is locked and cannot be sold.
    #[error("item is locked")]
    ItemLocked,

    /// The special ability is still cooling down.
    #[error("special ability on cooldown ({remaining} waves left)")]
    SpecialOnCooldown { remaining: u32 },

    /// Run parameters or an item/slot reference did not resolve to
    /// anything valid.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// A battle operation was called while no run is active
    /// (selection screen or after game over).
    #[error("no active run")]
    NoActiveRun,

    /// A persisted snapshot failed to decode or validate. Recovered
    /// locally by resetting to a fresh state; never fatal.
    #[error("corrupt save: {0}")]
    CorruptSave(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
