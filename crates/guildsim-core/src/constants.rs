//! ─── Guildsim tuning constants ──────────────────────────────────────────
//!
//! Ranges and draw bounds referenced by `guildsim-engine`. Centralized here
//! the way the rest of this workspace centralizes its protocol constants,
//! so a single file documents every magic number in the pipeline.

// ── Genesis defaults (§8 S1) ─────────────────────────────────────────────

pub const STARTING_MONEY_COPPER: i64 = 100;
pub const STARTING_TROPHIES_STOCK: i32 = 0;
pub const STARTING_STABILITY: i32 = 50;
pub const STARTING_GUILD_RANK: i32 = 1;
pub const STARTING_REPUTATION: i32 = 50;
pub const STARTING_SAVE_VERSION: u16 = 1;

/// All three id counters start here; ids are `> 0`.
pub const FIRST_ID: i64 = 1;

// ── Declared ranges (invariant 5) ────────────────────────────────────────

pub const REPUTATION_MIN: i32 = 0;
pub const REPUTATION_MAX: i32 = 100;
pub const STABILITY_MIN: i32 = 0;
pub const STABILITY_MAX: i32 = 100;

// ── Inbox generation ──────────────────────────────────────────────────────

/// `nextInt(INBOX_COUNT_BOUND)` then `+ 1` gives 1..=3 new drafts per day.
pub const INBOX_COUNT_BOUND: i64 = 3;
/// `nextInt(DIFFICULTY_BOUND)` gives each draft a difficulty in 0..=5.
pub const DIFFICULTY_BOUND: i64 = 6;

// ── Hero arrivals ─────────────────────────────────────────────────────────

/// Exactly one hero arrives per day; only its skill is randomly drawn.
pub const HERO_SKILL_BOUND: i64 = 10;

// ── Outcome resolution ────────────────────────────────────────────────────

/// The categorical bucket draw is `nextInt(BUCKET_ROLL_BOUND)`.
pub const BUCKET_ROLL_BOUND: i64 = 100;
/// `nextInt(TROPHY_BOUND_SUCCESS) + 1` gives 1..=3 trophies on SUCCESS.
pub const TROPHY_BOUND_SUCCESS: i64 = 3;
/// `nextInt(TROPHY_BOUND_PARTIAL)` gives 0..=2 trophies on PARTIAL.
pub const TROPHY_BOUND_PARTIAL: i64 = 3;
/// Hero power at or above this gates the end-of-resolution bonus draw.
pub const BONUS_THEFT_POWER_THRESHOLD: i32 = 8;

/// Categorical bucket weights are derived from `power - difficulty` via a
/// clamped staircase: `SUCCESS_BASE + diff * SUCCESS_SLOPE`, clamped to
/// `[SUCCESS_WEIGHT_FLOOR, SUCCESS_WEIGHT_CEIL]`, and symmetrically for the
/// death-like share. Neither ever reaches 0% or 100%.
pub const SUCCESS_BASE: i32 = 40;
pub const SUCCESS_SLOPE: i32 = 6;
pub const SUCCESS_WEIGHT_FLOOR: i32 = 5;
pub const SUCCESS_WEIGHT_CEIL: i32 = 70;

pub const DEATH_LIKE_BASE: i32 = 30;
pub const DEATH_LIKE_SLOPE: i32 = 5;
pub const DEATH_LIKE_WEIGHT_FLOOR: i32 = 5;
pub const DEATH_LIKE_WEIGHT_CEIL: i32 = 50;

/// `power - difficulty` substitute used when no hero is present (an
/// orphaned active contract). Pinned low enough that both floors/ceilings
/// above are already saturated, i.e. the worst-bucket probabilities.
pub const NO_HERO_POWER_DIFFICULTY: i32 = -100;

// ── Settlement ─────────────────────────────────────────────────────────────

/// Copper earned per trophy, for both salvage policies and market sales.
pub const COPPER_PER_TROPHY: i64 = 5;
pub const REPUTATION_DELTA_GUILD_SALVAGE: i32 = 2;
pub const REPUTATION_DELTA_HERO_SALVAGE: i32 = 1;
