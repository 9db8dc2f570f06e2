use async_trait::async_trait;
use frontoffice_models::roster::{RosterEntry, Team};
use frontoffice_models::trade::{Direction, Evaluation, TradeOffer};
use uuid::Uuid;

use crate::error::EngineError;

/// Source of team and roster data, owned by the wider simulation.
///
/// The engine never mutates rosters; it only reads projections through
/// this seam. Implementations are free to hit a database, a service, or a
/// fixture map in tests.
#[async_trait]
pub trait RosterProvider: Send + Sync {
    /// All teams in the campaign, human and AI alike.
    async fn teams(&self, campaign_id: Uuid) -> Result<Vec<Team>, EngineError>;

    /// The current roster projection for one team.
    async fn roster(&self, campaign_id: Uuid, team_id: Uuid)
        -> Result<Vec<RosterEntry>, EngineError>;
}

/// External judgment calls the engine refuses to make itself.
///
/// Direction classification and offer evaluation both live outside the
/// engine so the host game can swap strategies without touching the
/// proposal pipeline.
#[async_trait]
pub trait TradeEvaluator: Send + Sync {
    /// Classify a team's competitive posture.
    async fn classify_direction(
        &self,
        campaign_id: Uuid,
        team_id: Uuid,
    ) -> Result<Direction, EngineError>;

    /// Judge an offer from the receiving team's perspective. Only offers
    /// the evaluator accepts are persisted as proposals.
    async fn evaluate_offer(
        &self,
        campaign_id: Uuid,
        team_id: Uuid,
        offer: &TradeOffer,
    ) -> Result<Evaluation, EngineError>;
}
