use chrono::NaiveDate;
use frontoffice_models::campaign::{Campaign, SETTING_DEADLINE_PASSED, SETTING_DEADLINE_WARNED};
use frontoffice_models::config::DeadlineConfig;
use frontoffice_store::store::TradeStore;
use tracing::{info, warn};

use crate::error::EngineError;
use crate::news;

/// What one deadline pass did. Mostly useful for tests and cycle reports;
/// the announcements and flag writes are the authoritative effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineOutcome {
    /// Proposals expired by the per-cycle sweep.
    pub swept: usize,
    /// Warning announcement emitted this pass.
    pub warned_now: bool,
    /// Deadline-passed transition ran this pass.
    pub passed_now: bool,
    /// Whether new proposals may still be made.
    pub trading_open: bool,
}

/// The trade deadline for a season: fixed month and day in the calendar
/// year after the season's nominal start year.
pub fn deadline_date(season_year: i32, config: &DeadlineConfig) -> NaiveDate {
    let year = season_year + 1;
    match NaiveDate::from_ymd_opt(year, config.month, config.day) {
        Some(date) => date,
        None => {
            warn!(
                month = config.month,
                day = config.day,
                "Invalid deadline configuration, using January 13"
            );
            // January 13 exists in every year.
            NaiveDate::from_ymd_opt(year, 1, 13).unwrap_or_default()
        }
    }
}

/// Signed days from `current` to the deadline; negative once past it.
pub fn days_until(deadline: NaiveDate, current: NaiveDate) -> i64 {
    (deadline - current).num_days()
}

/// Advance the deadline state machine for one campaign by one cycle.
///
/// Runs the expiration sweep unconditionally, then at most one of the
/// one-shot transitions. Both transitions are gated on settings flags, so
/// re-running at the same date is a no-op.
pub fn advance(
    store: &TradeStore,
    campaign: &Campaign,
    config: &DeadlineConfig,
) -> Result<DeadlineOutcome, EngineError> {
    let today = campaign.current_date;
    let swept = store.expire_before(campaign.id, today)?;

    let deadline = deadline_date(campaign.season_year, config);
    let remaining = days_until(deadline, today);

    let mut warned_now = false;
    if (0..=config.warning_window_days).contains(&remaining)
        && !store.flag(campaign.id, SETTING_DEADLINE_WARNED)?
    {
        store.insert_announcement(&news::deadline_approaching(campaign.id, remaining, today))?;
        store.set_flag(campaign.id, SETTING_DEADLINE_WARNED, true)?;
        info!(campaign = %campaign.id, remaining, "Trade deadline warning issued");
        warned_now = true;
    }

    let mut passed_now = false;
    if remaining < 0 && !store.flag(campaign.id, SETTING_DEADLINE_PASSED)? {
        let expired = store.expire_all_pending(campaign.id)?;
        store.insert_announcement(&news::deadline_passed(campaign.id, today))?;
        store.set_flag(campaign.id, SETTING_DEADLINE_PASSED, true)?;
        info!(campaign = %campaign.id, expired, "Trade deadline passed");
        passed_now = true;
    }

    Ok(DeadlineOutcome {
        swept,
        warned_now,
        passed_now,
        trading_open: remaining >= 0,
    })
}
