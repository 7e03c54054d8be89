//! Name rosters for both playable sides, and the themed enemy groups
//! that waves draw from. Each side fights enemies from the opposing
//! roster, grouped into themes that rotate as waves advance.

use crate::core::constants::{PICK_LIST_SIZE, THEME_WAVE_SPAN};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which roster the player champions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Heroes,
    Creatures,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::Heroes => "Heroes",
            Side::Creatures => "Creatures",
        }
    }

    /// The roster waves are drawn from when playing this side.
    pub fn opposing(&self) -> Side {
        match self {
            Side::Heroes => Side::Creatures,
            Side::Creatures => Side::Heroes,
        }
    }
}

pub const HEROES: [&str; 25] = [
    "Barbarian",
    "Human",
    "Elf",
    "Knight",
    "Samurai",
    "Viking",
    "Wizard",
    "Paladin",
    "Assassin",
    "Ranger",
    "Necromancer",
    "Monk",
    "Druid",
    "Berserker",
    "Priest",
    "Alchemist",
    "Bard",
    "Warlock",
    "Templar",
    "Hunter",
    "Gladiator",
    "Gunblade",
    "Engineer",
    "Sentinel",
    "Shadowmage",
];

pub const CREATURES: [&str; 25] = [
    "Dragon",
    "Vampire",
    "Griffin",
    "Hydra",
    "Werewolf",
    "Minotaur",
    "Kraken",
    "Cyclops",
    "Phoenix",
    "Gorgon",
    "Manticore",
    "Banshee",
    "Lich",
    "Leviathan",
    "Wendigo",
    "Chimera",
    "Harpy",
    "Basilisk",
    "Naga",
    "Djinn",
    "Oni",
    "Yeti",
    "Dryad",
    "Ghoul",
    "Titan",
];

/// Themed creature groups faced by the Heroes side.
pub const CREATURE_THEMES: [(&str, &[&str]); 6] = [
    ("Undead", &["Vampire", "Banshee", "Lich", "Ghoul"]),
    ("Draconic", &["Dragon", "Hydra", "Leviathan"]),
    (
        "Beast",
        &[
            "Griffin",
            "Werewolf",
            "Minotaur",
            "Manticore",
            "Wendigo",
            "Harpy",
            "Basilisk",
            "Yeti",
        ],
    ),
    ("Nature", &["Dryad", "Naga"]),
    ("Elemental", &["Phoenix", "Kraken", "Djinn"]),
    ("Giant", &["Cyclops", "Titan"]),
];

/// Themed hero groups faced by the Creatures side.
pub const HERO_THEMES: [(&str, &[&str]); 4] = [
    ("Holy", &["Paladin", "Templar", "Priest"]),
    (
        "Arcane",
        &["Wizard", "Warlock", "Alchemist", "Bard", "Necromancer", "Shadowmage"],
    ),
    (
        "Rogue",
        &["Assassin", "Ranger", "Hunter", "Gladiator", "Gunblade"],
    ),
    (
        "Warrior",
        &[
            "Barbarian",
            "Knight",
            "Samurai",
            "Viking",
            "Monk",
            "Berserker",
            "Sentinel",
            "Engineer",
            "Human",
            "Elf",
            "Druid",
        ],
    ),
];

pub fn roster(side: Side) -> &'static [&'static str] {
    match side {
        Side::Heroes => &HEROES,
        Side::Creatures => &CREATURES,
    }
}

/// Theme table for the enemies a player on `side` will face.
pub fn enemy_themes(side: Side) -> &'static [(&'static str, &'static [&'static str])] {
    match side {
        Side::Heroes => &CREATURE_THEMES,
        Side::Creatures => &HERO_THEMES,
    }
}

/// The active theme entry (name and members) for a wave number. Themes
/// follow table order, advancing every few waves and wrapping around.
pub fn theme_entry_for_wave(side: Side, wave: u32) -> (&'static str, &'static [&'static str]) {
    let table = enemy_themes(side);
    table[((wave.max(1) - 1) / THEME_WAVE_SPAN) as usize % table.len()]
}

/// The active enemy theme name for a wave number.
pub fn theme_for_wave(side: Side, wave: u32) -> &'static str {
    theme_entry_for_wave(side, wave).0
}

/// Members of a named enemy theme, if it exists for this side.
pub fn theme_members(side: Side, theme: &str) -> Option<&'static [&'static str]> {
    enemy_themes(side)
        .iter()
        .find(|(name, _)| *name == theme)
        .map(|(_, members)| *members)
}

/// Draw a selection list of unique names from a side's roster.
pub fn draw_pick_list(side: Side, rng: &mut impl Rng) -> Vec<String> {
    let pool = roster(side);
    let mut indices: Vec<usize> = (0..pool.len()).collect();
    let mut picks = Vec::with_capacity(PICK_LIST_SIZE);
    for _ in 0..PICK_LIST_SIZE {
        let i = rng.gen_range(0..indices.len());
        picks.push(pool[indices.swap_remove(i)].to_string());
    }
    picks
}
