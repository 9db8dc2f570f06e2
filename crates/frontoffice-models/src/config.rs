use serde::{Deserialize, Serialize};

/// Top-level configuration for the front office engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FrontofficeConfig {
    pub store: StoreConfig,
    pub trade: TradeConfig,
    pub deadline: DeadlineConfig,
}

/// Configuration for the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Path to the campaign SQLite database.
    pub sqlite_path: String,
    /// Maximum number of roster snapshots held in memory.
    pub snapshot_max_capacity: u64,
    /// How long a roster snapshot stays hot, in seconds. One cycle never
    /// outlives this, so a team's roster is fetched at most once per cycle.
    pub snapshot_ttl_seconds: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            sqlite_path: "data/frontoffice.db".to_string(),
            snapshot_max_capacity: 256,
            snapshot_ttl_seconds: 300,
        }
    }
}

/// Tunables for proposal generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeConfig {
    /// Per-team chance of attempting a proposal on a normal cycle.
    pub base_proposal_probability: f64,
    /// Days a pending proposal stays open before expiring.
    pub offer_lifetime_days: i64,
    /// Top-rated players excluded from offers outside a rebuild.
    pub protected_star_count: usize,
    /// Minimum age treated as a veteran when rebuilding.
    pub veteran_age: u32,
    /// Maximum age qualifying as young talent.
    pub young_age_limit: u32,
    /// Rating at or above which a player reads as a star.
    pub star_rating: u8,
    /// Rating floor applied to position needs for ascending teams.
    pub ascending_floor_rating: u8,
}

impl Default for TradeConfig {
    fn default() -> Self {
        Self {
            base_proposal_probability: 0.15,
            offer_lifetime_days: 3,
            protected_star_count: 3,
            veteran_age: 28,
            young_age_limit: 24,
            star_rating: 80,
            ascending_floor_rating: 72,
        }
    }
}

/// Tunables for the deadline state machine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeadlineConfig {
    /// Month of the deadline, in the year after the season's start year.
    pub month: u32,
    /// Day of month of the deadline.
    pub day: u32,
    /// Days before the deadline at which the one-shot warning fires.
    pub warning_window_days: i64,
    /// Days before the deadline with boosted proposal probability.
    pub boost_window_days: i64,
}

impl Default for DeadlineConfig {
    fn default() -> Self {
        Self {
            month: 1,
            day: 13,
            warning_window_days: 16,
            boost_window_days: 30,
        }
    }
}
