// XP and leveling
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.5;
pub const TALENT_POINTS_PER_LEVEL: u32 = 1;

// Player base stats
pub const BASE_ATK: u32 = 10;
pub const BASE_DEF: u32 = 5;
pub const BASE_MAX_HP: u32 = 100;
pub const ATK_PER_LEVEL: u32 = 2;
pub const DEF_PER_LEVEL: u32 = 1;
pub const HP_PER_LEVEL: u32 = 10;

// Talent contributions per point
pub const OFFENSE_ATK_PCT: u32 = 4;
pub const DEFENSE_DEF_PCT: u32 = 4;
pub const UTILITY_GOLD_PCT: u32 = 3;
pub const UTILITY_LIFESTEAL_PCT: u32 = 2;
pub const RESPEC_COST_PER_POINT: u64 = 50;

// Special ability
pub const SPECIAL_DAMAGE_MULT: f64 = 2.0;
pub const SPECIAL_COOLDOWN_WAVES: u32 = 3;
pub const SPECIAL_FLAT_HEAL: u32 = 10;

// Wave difficulty: linear slope plus a flat step every block of waves
pub const DIFF_PER_WAVE: u32 = 4;
pub const DIFF_STEP_BONUS: u32 = 12;
pub const DIFF_STEP_WAVES: u32 = 10;
pub const BOSS_WAVE_INTERVAL: u32 = 5;
pub const ELITE_CHANCE: f64 = 0.12;
pub const SUPER_CHANCE: f64 = 0.03;
pub const BOSS_DIFF_MULT: f64 = 1.75;
pub const ELITE_DIFF_MULT: f64 = 1.35;
pub const SUPER_DIFF_MULT: f64 = 1.6;

// Enemy group sizing
pub const ENEMY_GROUP_BASE: u32 = 3;
pub const ENEMY_GROUP_WAVE_DIV: u32 = 5;
pub const ENEMY_GROUP_MAX: u32 = 8;

// Combat resolution
// damage taken = max(0, diff * INCOMING_DIFF_FACTOR - def * DEFENSE_MITIGATION_FACTOR)
pub const INCOMING_DIFF_FACTOR: f64 = 1.5;
pub const DEFENSE_MITIGATION_FACTOR: f64 = 2.5;
pub const KILL_EFFICIENCY: f64 = 0.35;

// Rewards
pub const XP_WAVE_BASE: u64 = 20;
pub const XP_PER_DIFF: u64 = 2;
pub const GOLD_WAVE_BASE: u64 = 18;
pub const GOLD_PER_DIFF: f64 = 1.5;
pub const ELITE_GOLD_BONUS: u64 = 40;
pub const BOSS_GOLD_BONUS: u64 = 75;
pub const SUPER_GOLD_BONUS: u64 = 150;

// Set bonuses
pub const SET_PIECES_REQUIRED: u32 = 2;
pub const SET_INCOMING_DAMAGE_MULT: f64 = 0.85;
pub const SET_DROP_CHANCE: f64 = 0.20;

// Loot
pub const BONUS_POTION_CHANCE: f64 = 0.35;
pub const POTION_HEAL_PCT: f64 = 0.35;

// Item scaling: ilvl 1 -> 1.0x, ilvl 26 -> 2.0x, ilvl 51 -> 3.0x
pub const ILVL_SCALING_DIVISOR: f64 = 25.0;

// Shop economy
pub const SHOP_POTION_COUNT: usize = 3;
pub const SHOP_ITEMS_PER_CATEGORY_BIG: usize = 6;
pub const SHOP_ITEMS_PER_CATEGORY_SMALL: usize = 4;
pub const SHOP_REFRESH_BASE_COST: u64 = 20;
pub const SHOP_REFRESH_STEP_COST: u64 = 10;
pub const SHOP_RESTOCK_WAVE_INTERVAL: u32 = 20;
pub const FEATURED_DISCOUNT_NUM: u64 = 7;
pub const FEATURED_DISCOUNT_DEN: u64 = 10;

// Inventory economy
pub const SELL_CREDIT_NUM: u64 = 1;
pub const SELL_CREDIT_DEN: u64 = 2;
pub const BUYBACK_LIMIT: usize = 10;

// Rosters and themes
pub const PICK_LIST_SIZE: usize = 10;
pub const THEME_WAVE_SPAN: u32 = 5;

// Auto-play scheduler
pub const AUTO_MIN_INTERVAL_MS: u64 = 150;
pub const AUTO_DEFAULT_INTERVAL_MS: u64 = 800;

// Run setup
pub const PLAYER_NAME_MAX_LENGTH: usize = 16;

// Persistence
pub const SAVE_VERSION: u32 = 1;
/// "ARENA1" in the file header, so stray files are rejected on sight.
pub const SAVE_FILE_MAGIC: u64 = 0x4152_454E_4131_0000;
