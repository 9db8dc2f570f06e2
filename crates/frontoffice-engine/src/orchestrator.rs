use std::sync::Arc;

use chrono::Duration;
use frontoffice_models::campaign::Campaign;
use frontoffice_models::config::{DeadlineConfig, TradeConfig};
use frontoffice_models::roster::Team;
use frontoffice_models::trade::{
    AssetRef, ProposalStatus, TradeOffer, TradeProposal, Verdict,
};
use frontoffice_store::TradeStore;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::collaborators::TradeEvaluator;
use crate::context::CachedRosters;
use crate::deadline::{self, DeadlineOutcome};
use crate::error::EngineError;
use crate::news;
use crate::offers::build_offer;
use crate::picks;
use crate::rng::RandomSource;
use crate::targets::match_targets;
use crate::needs::{self, identify_need};

/// What one cycle did, for logs and tests. Persisted records are the
/// authoritative output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub deadline: DeadlineOutcome,
    /// AI teams that cleared the eligibility checks this cycle.
    pub considered: usize,
    /// Proposals persisted this cycle.
    pub proposed: Vec<Uuid>,
    /// Teams whose evaluation failed and was skipped.
    pub failed: usize,
}

/// Drives the full proposal pipeline once per simulated-date advancement.
///
/// Invocations for one campaign must be serialized by the caller: the
/// pending-proposal check and the insert are two separate store calls.
pub struct TradeDesk {
    store: Arc<TradeStore>,
    rosters: CachedRosters,
    evaluator: Arc<dyn TradeEvaluator>,
    trade: TradeConfig,
    deadline: DeadlineConfig,
}

impl TradeDesk {
    pub fn new(
        store: Arc<TradeStore>,
        rosters: CachedRosters,
        evaluator: Arc<dyn TradeEvaluator>,
        trade: TradeConfig,
        deadline: DeadlineConfig,
    ) -> Self {
        Self {
            store,
            rosters,
            evaluator,
            trade,
            deadline,
        }
    }

    pub fn store(&self) -> &Arc<TradeStore> {
        &self.store
    }

    /// Run one full cycle: deadline bookkeeping, then a proposal attempt
    /// per eligible AI team. One team's failure never aborts the rest.
    pub async fn run_cycle(
        &self,
        campaign: &Campaign,
        rng: &mut dyn RandomSource,
    ) -> Result<CycleReport, EngineError> {
        let outcome = deadline::advance(&self.store, campaign, &self.deadline)?;
        let mut report = CycleReport {
            deadline: outcome,
            considered: 0,
            proposed: Vec::new(),
            failed: 0,
        };
        if !outcome.trading_open {
            debug!(campaign = %campaign.id, "Past deadline, no proposals considered");
            return Ok(report);
        }

        let teams = self.rosters.provider().teams(campaign.id).await?;
        let Some(human) = teams.iter().find(|team| team.human_controlled) else {
            debug!(campaign = %campaign.id, "No human-controlled team, nothing to propose");
            return Ok(report);
        };

        let remaining = deadline::days_until(
            deadline::deadline_date(campaign.season_year, &self.deadline),
            campaign.current_date,
        );

        for team in teams.iter().filter(|team| !team.human_controlled) {
            report.considered += 1;
            match self.consider_team(campaign, team, human, remaining, rng).await {
                Ok(Some(proposal_id)) => report.proposed.push(proposal_id),
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        campaign = %campaign.id,
                        team = %team.name,
                        error = %e,
                        "Proposal attempt failed, continuing with next team"
                    );
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }

    /// One team's proposal attempt. Any empty stage short-circuits to no
    /// proposal; only collaborator failures surface as errors.
    async fn consider_team(
        &self,
        campaign: &Campaign,
        team: &Team,
        human: &Team,
        days_to_deadline: i64,
        rng: &mut dyn RandomSource,
    ) -> Result<Option<Uuid>, EngineError> {
        if self
            .store
            .pending_proposal(campaign.id, team.id)?
            .is_some()
        {
            return Ok(None);
        }

        let direction = self
            .evaluator
            .classify_direction(campaign.id, team.id)
            .await?;

        let mut probability = self.trade.base_proposal_probability;
        if (0..=self.deadline.boost_window_days).contains(&days_to_deadline) {
            probability *= if direction.is_contending() { 3.0 } else { 2.0 };
        }
        if rng.draw() >= probability {
            return Ok(None);
        }

        let today = campaign.current_date;
        let own_roster = self.rosters.roster(campaign.id, team.id).await?;
        let Some(need) = identify_need(direction, &own_roster, &self.trade) else {
            return Ok(None);
        };

        let human_roster = self.rosters.roster(campaign.id, human.id).await?;
        let targets = match_targets(&human_roster, &need, today);
        let Some(target) = targets.into_iter().next() else {
            return Ok(None);
        };

        let owned_picks = picks::pick_views(&self.store, campaign, team.id)?;
        let Some(give) = build_offer(
            &own_roster,
            target.trade_worth(),
            direction,
            &owned_picks,
            today,
            &self.trade,
        ) else {
            return Ok(None);
        };

        let offer = TradeOffer {
            give,
            receive: vec![AssetRef::Player(target.player_id)],
            reason: news::offer_reason(direction, &target),
        };

        // Self-verification: would the proposer take its own deal?
        let evaluation = self
            .evaluator
            .evaluate_offer(campaign.id, team.id, &offer)
            .await?;
        if evaluation.verdict != Verdict::Accept {
            debug!(
                campaign = %campaign.id,
                team = %team.name,
                verdict = ?evaluation.verdict,
                "Discarding self-rejected offer"
            );
            return Ok(None);
        }

        let proposal = TradeProposal {
            id: Uuid::new_v4(),
            campaign_id: campaign.id,
            team_id: team.id,
            status: ProposalStatus::Pending,
            reason: offer.reason.clone(),
            offer,
            created_at: today,
            expires_at: today + Duration::days(self.trade.offer_lifetime_days),
        };
        self.store.insert_proposal(&proposal)?;
        self.store.insert_announcement(&news::trade_proposed(
            campaign.id,
            &team.name,
            &target,
            direction,
            today,
        ))?;
        info!(
            campaign = %campaign.id,
            team = %team.name,
            target = %target.full_name(),
            "Trade proposal created"
        );

        Ok(Some(proposal.id))
    }

    /// Finalize the draft order for a year, writing pick numbers from the
    /// current standings.
    pub async fn finalize_draft_order(
        &self,
        campaign: &Campaign,
        year: i32,
        rng: &mut dyn RandomSource,
    ) -> Result<usize, EngineError> {
        let teams = self.rosters.provider().teams(campaign.id).await?;
        let updated = picks::assign_pick_numbers(&self.store, campaign.id, year, &teams, rng)?;
        info!(campaign = %campaign.id, year, updated, "Draft order finalized");
        Ok(updated)
    }

    /// The need the engine would chase for a team right now, without the
    /// probability gate. Exposed for host-game inspection screens.
    pub async fn current_need(
        &self,
        campaign: &Campaign,
        team_id: Uuid,
    ) -> Result<Option<frontoffice_models::trade::Need>, EngineError> {
        let direction = self
            .evaluator
            .classify_direction(campaign.id, team_id)
            .await?;
        let roster = self.rosters.roster(campaign.id, team_id).await?;
        Ok(needs::identify_need(direction, &roster, &self.trade))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        campaign_on, date, roster_of, team, young_star, veteran, MockEvaluator, ScriptedRandom,
        StaticRosters,
    };
    use frontoffice_models::trade::Direction;
    use frontoffice_store::{SnapshotCache, SqliteStore};
    use std::time::Duration as StdDuration;

    fn desk(rosters: StaticRosters, evaluator: MockEvaluator) -> TradeDesk {
        TradeDesk::new(
            Arc::new(TradeStore::new(SqliteStore::open_in_memory().unwrap())),
            CachedRosters::new(
                Arc::new(rosters),
                Arc::new(SnapshotCache::new(64, StdDuration::from_secs(60))),
            ),
            Arc::new(evaluator),
            TradeConfig::default(),
            DeadlineConfig::default(),
        )
    }

    #[tokio::test]
    async fn rebuilding_team_proposes_for_young_talent() {
        let ai = team("Kestrels", false);
        let human = team("Pilots", true);
        let rosters = StaticRosters::with_teams(
            vec![ai.clone(), human.clone()],
            vec![
                (ai.id, vec![veteran("Old", 78, 31), veteran("Older", 76, 33)]),
                (human.id, vec![young_star("Young", 74, 21)]),
            ],
        );
        let evaluator = MockEvaluator::accepting(Direction::Rebuilding);
        let desk = desk(rosters, evaluator);
        let campaign = campaign_on(date(2025, 11, 20));

        // A draw of 0.0 always clears the probability gate.
        let mut rng = ScriptedRandom::new(vec![0.0]);
        let report = desk.run_cycle(&campaign, &mut rng).await.unwrap();

        assert_eq!(report.considered, 1);
        assert_eq!(report.proposed.len(), 1);
        let pending = desk
            .store()
            .pending_proposal(campaign.id, ai.id)
            .unwrap()
            .expect("pending proposal");
        assert_eq!(pending.expires_at, date(2025, 11, 23));
        assert_eq!(desk.store().announcements(campaign.id).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_probability_draw_proposes_nothing() {
        let ai = team("Kestrels", false);
        let human = team("Pilots", true);
        let rosters = StaticRosters::with_teams(
            vec![ai.clone(), human.clone()],
            vec![
                (ai.id, vec![veteran("Old", 78, 31)]),
                (human.id, vec![young_star("Young", 74, 21)]),
            ],
        );
        let desk = desk(rosters, MockEvaluator::accepting(Direction::Rebuilding));
        let campaign = campaign_on(date(2025, 11, 20));

        let mut rng = ScriptedRandom::new(vec![0.99]);
        let report = desk.run_cycle(&campaign, &mut rng).await.unwrap();

        assert!(report.proposed.is_empty());
        assert!(desk.store().pending_proposals(campaign.id).unwrap().is_empty());
    }

    #[tokio::test]
    async fn pending_proposal_blocks_a_second_one() {
        let ai = team("Kestrels", false);
        let human = team("Pilots", true);
        let rosters = StaticRosters::with_teams(
            vec![ai.clone(), human.clone()],
            vec![
                (ai.id, vec![veteran("Old", 78, 31)]),
                (human.id, vec![young_star("Young", 74, 21)]),
            ],
        );
        let desk = desk(rosters, MockEvaluator::accepting(Direction::Rebuilding));
        let campaign = campaign_on(date(2025, 11, 20));

        let mut rng = ScriptedRandom::new(vec![0.0, 0.0]);
        let first = desk.run_cycle(&campaign, &mut rng).await.unwrap();
        let second = desk.run_cycle(&campaign, &mut rng).await.unwrap();

        assert_eq!(first.proposed.len(), 1);
        assert!(second.proposed.is_empty());
        assert_eq!(desk.store().pending_proposals(campaign.id).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn self_rejected_offer_leaves_no_trace() {
        let ai = team("Kestrels", false);
        let human = team("Pilots", true);
        let rosters = StaticRosters::with_teams(
            vec![ai.clone(), human.clone()],
            vec![
                (ai.id, vec![veteran("Old", 78, 31)]),
                (human.id, vec![young_star("Young", 74, 21)]),
            ],
        );
        let desk = desk(rosters, MockEvaluator::rejecting(Direction::Rebuilding));
        let campaign = campaign_on(date(2025, 11, 20));

        let mut rng = ScriptedRandom::new(vec![0.0]);
        let report = desk.run_cycle(&campaign, &mut rng).await.unwrap();

        assert!(report.proposed.is_empty());
        assert!(desk.store().pending_proposals(campaign.id).unwrap().is_empty());
        assert!(desk.store().announcements(campaign.id).unwrap().is_empty());
    }

    #[tokio::test]
    async fn evaluator_failure_skips_team_but_continues() {
        let broken = team("Broken", false);
        let working = team("Working", false);
        let human = team("Pilots", true);
        let rosters = StaticRosters::with_teams(
            vec![broken.clone(), working.clone(), human.clone()],
            vec![
                (broken.id, vec![veteran("Old", 78, 31)]),
                (working.id, vec![veteran("Other", 77, 30)]),
                (human.id, vec![young_star("Young", 74, 21)]),
            ],
        );
        let evaluator =
            MockEvaluator::accepting(Direction::Rebuilding).failing_direction_for(broken.id);
        let desk = desk(rosters, evaluator);
        let campaign = campaign_on(date(2025, 11, 20));

        let mut rng = ScriptedRandom::new(vec![0.0, 0.0]);
        let report = desk.run_cycle(&campaign, &mut rng).await.unwrap();

        assert_eq!(report.failed, 1);
        assert_eq!(report.proposed.len(), 1);
    }

    #[tokio::test]
    async fn no_cycle_after_the_deadline() {
        let ai = team("Kestrels", false);
        let human = team("Pilots", true);
        let rosters = StaticRosters::with_teams(
            vec![ai.clone(), human.clone()],
            vec![
                (ai.id, vec![veteran("Old", 78, 31)]),
                (human.id, vec![young_star("Young", 74, 21)]),
            ],
        );
        let desk = desk(rosters, MockEvaluator::accepting(Direction::Rebuilding));
        let campaign = campaign_on(date(2026, 2, 1));

        let mut rng = ScriptedRandom::new(vec![0.0]);
        let report = desk.run_cycle(&campaign, &mut rng).await.unwrap();

        assert_eq!(report.considered, 0);
        assert!(!report.deadline.trading_open);
    }

    #[tokio::test]
    async fn deadline_window_boosts_contenders_threefold() {
        let ai = team("Kestrels", false);
        let human = team("Pilots", true);
        let rosters = StaticRosters::with_teams(
            vec![ai.clone(), human.clone()],
            vec![
                (
                    ai.id,
                    roster_of(&[85, 84, 86, 83, 74]), // weak at center
                ),
                (human.id, vec![young_star("Pivot", 78, 23)]),
            ],
        );
        let desk = desk(rosters, MockEvaluator::accepting(Direction::WinNow));
        // 2025-12-20 is 24 days out: inside the 30-day boost window.
        let campaign = campaign_on(date(2025, 12, 20));

        // 0.40 fails the base 0.15 but clears the tripled 0.45.
        let mut rng = ScriptedRandom::new(vec![0.40]);
        let report = desk.run_cycle(&campaign, &mut rng).await.unwrap();

        assert_eq!(report.proposed.len(), 1);
    }

    #[tokio::test]
    async fn human_roster_without_matches_means_no_proposal() {
        let ai = team("Kestrels", false);
        let human = team("Pilots", true);
        let rosters = StaticRosters::with_teams(
            vec![ai.clone(), human.clone()],
            vec![
                (ai.id, vec![veteran("Old", 78, 31)]),
                // Too old for a rebuild's young-talent need.
                (human.id, vec![veteran("Elder", 82, 34)]),
            ],
        );
        let desk = desk(rosters, MockEvaluator::accepting(Direction::Rebuilding));
        let campaign = campaign_on(date(2025, 11, 20));

        let mut rng = ScriptedRandom::new(vec![0.0]);
        let report = desk.run_cycle(&campaign, &mut rng).await.unwrap();

        assert!(report.proposed.is_empty());
    }
}
