use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One-shot flag set when the deadline-approaching announcement has fired.
pub const SETTING_DEADLINE_WARNED: &str = "trade_deadline_warned";

/// One-shot flag set when the deadline-passed announcement has fired.
pub const SETTING_DEADLINE_PASSED: &str = "trade_deadline_passed";

/// Calendar state for one running campaign.
///
/// The simulated date only ever moves forward, one advancement at a time,
/// and the engine is invoked once per advancement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Campaign {
    pub id: Uuid,
    /// Nominal starting year of the current season. The trade deadline
    /// falls in the following calendar year.
    pub season_year: i32,
    pub current_date: NaiveDate,
}
