use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roster::Position;

/// A team's competitive posture, classified by the external evaluation
/// collaborator. Never derived inside this engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    TitleContender,
    WinNow,
    Ascending,
    Rebuilding,
}

impl Direction {
    /// Contending teams push harder as the deadline nears.
    pub fn is_contending(&self) -> bool {
        matches!(self, Direction::TitleContender | Direction::WinNow)
    }
}

/// The asset gap a team is trying to fill via trade. Produced fresh per
/// evaluation, never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Need {
    /// A starter-quality player at a specific position.
    Position { position: Position, min_rating: u8 },
    /// Any star-caliber addition, position irrelevant.
    Star { min_rating: u8 },
    /// Young talent for a rebuild.
    Young { max_age: u32 },
}

/// Reference to a tradable asset inside an offer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum AssetRef {
    Player(Uuid),
    Pick(Uuid),
}

/// The asset exchange one side proposes. Immutable once verified; becomes
/// the payload of a persisted [`TradeProposal`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeOffer {
    /// Assets the proposing team gives up.
    pub give: Vec<AssetRef>,
    /// Assets the proposing team asks for.
    pub receive: Vec<AssetRef>,
    pub reason: String,
}

/// Verdict from the external trade evaluator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accept,
    Reject,
    Counter,
}

/// Full evaluation result for an offer, from one team's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub reasoning: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    Pending,
    Accepted,
    Rejected,
    Expired,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Pending => "pending",
            ProposalStatus::Accepted => "accepted",
            ProposalStatus::Rejected => "rejected",
            ProposalStatus::Expired => "expired",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ProposalStatus::Pending),
            "accepted" => Some(ProposalStatus::Accepted),
            "rejected" => Some(ProposalStatus::Rejected),
            "expired" => Some(ProposalStatus::Expired),
            _ => None,
        }
    }
}

/// A persisted AI-to-human trade proposal.
///
/// At most one pending proposal exists per (campaign, team); the
/// orchestrator skips teams that already have one outstanding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeProposal {
    pub id: Uuid,
    pub campaign_id: Uuid,
    /// The AI team making the offer.
    pub team_id: Uuid,
    pub status: ProposalStatus,
    pub offer: TradeOffer,
    pub reason: String,
    pub created_at: NaiveDate,
    /// Creation date plus the configured offer lifetime (3 simulated days).
    pub expires_at: NaiveDate,
}
