use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rating assumed for a roster entry with no rating on record.
pub const DEFAULT_RATING: u8 = 75;

/// Age assumed for a roster entry with no birth date on record.
pub const DEFAULT_AGE: u32 = 25;

/// The five standard on-court positions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
}

impl Position {
    /// All five positions, in conventional lineup order.
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }
}

/// A team as seen by the trade engine. Rosters live behind the roster
/// collaborator; this carries only identity and control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    /// Human-controlled teams never originate AI proposals.
    pub human_controlled: bool,
}

/// One team's win/loss record, written by the game simulation and read here
/// for draft-order projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingRow {
    pub team_id: Uuid,
    pub wins: u32,
    pub losses: u32,
}

/// Read-only roster projection supplied by the roster collaborator.
///
/// Every optional field has a stated fallback: simulation data favors
/// availability over strictness, so a malformed entry degrades to defaults
/// instead of failing the cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterEntry {
    pub player_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    pub secondary_position: Option<Position>,
    /// Overall rating on a 0-100 scale.
    pub rating: Option<u8>,
    pub birth_date: Option<NaiveDate>,
    pub salary: Option<Decimal>,
    pub contract_years: Option<u8>,
    /// Value of the player as a lone trade asset.
    pub trade_value: Option<Decimal>,
    /// Asset value plus situational premium.
    pub trade_value_total: Option<Decimal>,
}

impl RosterEntry {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overall rating, defaulting to [`DEFAULT_RATING`] when absent.
    pub fn rating(&self) -> u8 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    /// Age on the given simulated date, defaulting to [`DEFAULT_AGE`] when
    /// no birth date is on record.
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        self.birth_date
            .and_then(|born| date.years_since(born))
            .unwrap_or(DEFAULT_AGE)
    }

    /// Whether this player covers the position, at either the primary or
    /// the secondary slot.
    pub fn plays(&self, position: Position) -> bool {
        self.position == position || self.secondary_position == Some(position)
    }

    /// The value used to rank and band trade assets.
    ///
    /// Fallback order is a contract: trade value, then total trade value,
    /// then overall rating as a value.
    pub fn trade_worth(&self) -> Decimal {
        self.trade_value
            .or(self.trade_value_total)
            .unwrap_or_else(|| Decimal::from(self.rating()))
    }
}
