use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discriminator for the scenarios that produce an announcement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementKind {
    TradeProposed,
    DeadlineApproaching,
    DeadlinePassed,
}

impl AnnouncementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncementKind::TradeProposed => "trade_proposed",
            AnnouncementKind::DeadlineApproaching => "deadline_approaching",
            AnnouncementKind::DeadlinePassed => "deadline_passed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "trade_proposed" => Some(AnnouncementKind::TradeProposed),
            "deadline_approaching" => Some(AnnouncementKind::DeadlineApproaching),
            "deadline_passed" => Some(AnnouncementKind::DeadlinePassed),
            _ => None,
        }
    }
}

/// A persisted news item surfaced to the human player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Announcement {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub kind: AnnouncementKind,
    pub headline: String,
    pub body: String,
    pub created_at: NaiveDate,
}
