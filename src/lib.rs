//! Arena - a wave-combat progression engine.
//!
//! This library exposes the full game logic for embedding, simulation,
//! and testing. Nothing in here draws a screen: embedding layers drive
//! the [`core::Arena`] facade and render the [`core::TickEvent`]s it
//! returns however they like.

pub mod core;
pub mod error;
pub mod inventory;
pub mod items;
pub mod save_manager;
pub mod shop;
pub mod simulator;
pub mod snapshot;
