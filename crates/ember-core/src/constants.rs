/// Ember system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum puffs per logged event.
pub const PUFFS_MIN: u32 = 1;

/// Maximum puffs per logged event.
pub const PUFFS_MAX: u32 = 100;

/// Mood scale bounds (inclusive).
pub const MOOD_MIN: u8 = 1;
pub const MOOD_MAX: u8 = 5;

/// XP awarded for every successful intake log.
pub const XP_PER_LOG: u64 = 10;

/// XP required per level step: `level = floor(sqrt(totalXP / XP_LEVEL_BASE)) + 1`.
pub const XP_LEVEL_BASE: u64 = 100;

/// Trailing window the prediction engine analyzes, in days.
pub const PREDICTION_WINDOW_DAYS: i64 = 14;

/// Minimum events in the trailing window required for a prediction.
pub const MIN_EVENTS_FOR_PREDICTION: usize = 5;

/// Default cost of a pack, in the user's currency.
pub const DEFAULT_COST_PER_PACK: f64 = 10.0;

/// Default puffs per pack.
pub const DEFAULT_PUFFS_PER_PACK: u32 = 200;
