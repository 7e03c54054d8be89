//! Per-wave battle tick: generate the wave, fight it, and apply
//! everything that follows from the outcome. Returns a [`TickResult`]
//! describing what happened so the embedding layer can render it
//! without game logic depending on any UI types.

use crate::core::combat::{resolve_wave, CombatOutcome};
use crate::core::constants::{SHOP_RESTOCK_WAVE_INTERVAL, SPECIAL_COOLDOWN_WAVES};
use crate::core::progression::gain_xp;
use crate::core::roster::theme_for_wave;
use crate::core::state::{RunPhase, RunState};
use crate::core::stats::DerivedStats;
use crate::core::waves::generate_wave;
use crate::error::{EngineError, EngineResult};
use crate::items::drops::roll_wave_loot;
use crate::items::types::Rarity;
use rand::Rng;

/// How the player fights this wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickMode {
    /// Plain attack.
    Attack,
    /// Spend the special attack; fails while it is cooling down.
    Special,
    /// Auto-play behavior: spends the special whenever it is ready.
    Auto,
}

/// A single event produced by a battle tick.
///
/// The embedding layer maps these to log lines or UI updates; the
/// engine never formats output itself.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// The special attack was spent on this wave.
    SpecialUsed,

    /// The wave was fought and cleared.
    WaveCleared {
        wave: u32,
        theme: String,
        is_boss: bool,
        kills: u32,
        damage_dealt: u32,
        damage_taken: u32,
    },

    /// Gold banked after the gold-find bonus.
    GoldEarned { amount: u64 },

    /// Player leveled up (can fire multiple times on a large XP gain).
    LeveledUp { new_level: u32 },

    /// An item dropped from the wave.
    ItemDropped {
        name: String,
        rarity: Rarity,
        is_potion: bool,
    },

    /// The enemy theme rotated.
    ThemeChanged { theme: String },

    /// The shop restocked itself for free.
    ShopRestocked,

    /// The player fell; the run is over.
    Defeated { wave: u32 },
}

/// Result of one battle tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    /// Events in chronological order.
    pub events: Vec<TickEvent>,
    /// The raw combat exchange behind the events.
    pub outcome: CombatOutcome,
}

/// Fight the current wave and apply the outcome: rewards, leveling,
/// loot, the wave advance, theme rotation, and the periodic free
/// restock. On defeat the run hard-stops: the wave does not advance,
/// no loot drops, and auto-play disarms.
pub fn advance_wave(
    state: &mut RunState,
    mode: TickMode,
    rng: &mut impl Rng,
) -> EngineResult<TickResult> {
    if state.phase != RunPhase::Battle {
        return Err(EngineError::NoActiveRun);
    }
    let side = state.require_side()?;

    // ── 1. Decide on the special attack ─────────────────────────
    let cooldown = state.require_player()?.special_cooldown;
    let use_special = match mode {
        TickMode::Attack => false,
        TickMode::Special => {
            if cooldown > 0 {
                return Err(EngineError::SpecialOnCooldown {
                    remaining: cooldown,
                });
            }
            true
        }
        TickMode::Auto => cooldown == 0,
    };

    // ── 2. Generate and fight the wave ──────────────────────────
    let wave = generate_wave(side, state.wave, rng);
    let stats = DerivedStats::compute(state.require_player()?);
    let hp = state.require_player()?.hp;
    let outcome = resolve_wave(&stats, hp, &wave, use_special);

    let mut events = Vec::new();
    if use_special {
        events.push(TickEvent::SpecialUsed);
    }

    // ── 3. Apply the exchange to the player ─────────────────────
    let levels_gained;
    let new_level;
    {
        let player = state.require_player_mut()?;
        player.hp = outcome.hp_after;
        if use_special {
            player.special_cooldown = SPECIAL_COOLDOWN_WAVES;
        } else if player.special_cooldown > 0 {
            player.special_cooldown -= 1;
        }

        // Rewards land even on a losing exchange
        let gold_earned =
            (outcome.gold_gained as f64 * (1.0 + stats.gold_pct as f64 / 100.0)).floor() as u64;
        player.gold += gold_earned;

        if !outcome.defeated {
            events.push(TickEvent::WaveCleared {
                wave: wave.number,
                theme: wave.theme.clone(),
                is_boss: wave.is_boss,
                kills: outcome.kills,
                damage_dealt: outcome.damage_dealt,
                damage_taken: outcome.damage_taken,
            });
        }
        events.push(TickEvent::GoldEarned { amount: gold_earned });

        levels_gained = gain_xp(player, outcome.xp_gained);
        new_level = player.level;
    }
    for n in 0..levels_gained {
        events.push(TickEvent::LeveledUp {
            new_level: new_level - levels_gained + n + 1,
        });
    }

    // ── 4. Hard stop on defeat ──────────────────────────────────
    if outcome.defeated {
        state.phase = RunPhase::GameOver;
        state.auto.running = false;
        events.push(TickEvent::Defeated { wave: wave.number });
        return Ok(TickResult { events, outcome });
    }

    // ── 5. Loot ─────────────────────────────────────────────────
    for item in roll_wave_loot(&wave, rng) {
        events.push(TickEvent::ItemDropped {
            name: item.name.clone(),
            rarity: item.rarity,
            is_potion: item.is_potion(),
        });
        state.inventory.add(item);
    }

    // ── 6. Advance the wave and rotate the theme ────────────────
    state.wave += 1;
    let next_theme = theme_for_wave(side, state.wave);
    if state.theme != next_theme {
        state.theme = next_theme.to_string();
        events.push(TickEvent::ThemeChanged {
            theme: state.theme.clone(),
        });
    }

    // ── 7. Periodic free restock ────────────────────────────────
    if wave.number % SHOP_RESTOCK_WAVE_INTERVAL == 0 {
        state.shop.restock_free(true, state.wave, rng);
        events.push(TickEvent::ShopRestocked);
    }

    Ok(TickResult { events, outcome })
}
