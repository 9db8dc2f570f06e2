//! Front Office - trade proposal and asset valuation engine
//!
//! Drives AI-team trade proposals for a running franchise campaign:
//! need identification, target matching, offer construction, the trade
//! deadline state machine, and draft pick valuation.
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use frontoffice::models::config::FrontofficeConfig;
//! use frontoffice::engine::{RosterProvider, StdRandom, TradeEvaluator};
//! use frontoffice::build_trade_desk;
//! ```

pub use frontoffice_engine as engine;
pub use frontoffice_models as models;
pub use frontoffice_store as store;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use frontoffice_engine::{CachedRosters, RosterProvider, TradeDesk, TradeEvaluator};
use frontoffice_models::config::FrontofficeConfig;
use frontoffice_store::{SnapshotCache, SqliteStore, TradeStore};

/// Load engine configuration from a TOML file.
pub fn load_config(path: &str) -> Result<FrontofficeConfig, anyhow::Error> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading configuration from {path}"))?;
    toml::from_str(&raw).with_context(|| format!("parsing configuration from {path}"))
}

/// Build a TradeDesk from configuration and the host game's collaborators.
pub fn build_trade_desk(
    config: &FrontofficeConfig,
    rosters: Arc<dyn RosterProvider>,
    evaluator: Arc<dyn TradeEvaluator>,
) -> Result<TradeDesk, anyhow::Error> {
    let sqlite = SqliteStore::open(&config.store.sqlite_path)
        .with_context(|| format!("opening campaign store at {}", config.store.sqlite_path))?;
    let store = Arc::new(TradeStore::new(sqlite));
    let snapshots = Arc::new(SnapshotCache::new(
        config.store.snapshot_max_capacity,
        Duration::from_secs(config.store.snapshot_ttl_seconds),
    ));

    Ok(TradeDesk::new(
        store,
        CachedRosters::new(rosters, snapshots),
        evaluator,
        config.trade.clone(),
        config.deadline.clone(),
    ))
}
