use std::sync::Mutex;

use chrono::NaiveDate;
use frontoffice_models::news::Announcement;
use frontoffice_models::pick::DraftPick;
use frontoffice_models::roster::StandingRow;
use frontoffice_models::trade::{ProposalStatus, TradeProposal};
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreError;
use crate::sqlite::SqliteStore;

/// Shared handle over the campaign repositories.
///
/// SQLite access is synchronized via `Mutex` since `rusqlite::Connection`
/// is not `Sync`. Cycles for one campaign are serialized by the caller, so
/// the lock is uncontended in practice.
pub struct TradeStore {
    sqlite: Mutex<SqliteStore>,
}

impl TradeStore {
    pub fn new(sqlite: SqliteStore) -> Self {
        Self {
            sqlite: Mutex::new(sqlite),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, SqliteStore>, StoreError> {
        self.sqlite
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("SQLite mutex poisoned: {e}")))
    }

    pub fn insert_proposal(&self, proposal: &TradeProposal) -> Result<(), StoreError> {
        self.lock()?.insert_proposal(proposal)
    }

    pub fn pending_proposal(
        &self,
        campaign_id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<TradeProposal>, StoreError> {
        self.lock()?.pending_proposal(campaign_id, team_id)
    }

    pub fn pending_proposals(&self, campaign_id: Uuid) -> Result<Vec<TradeProposal>, StoreError> {
        self.lock()?.pending_proposals(campaign_id)
    }

    pub fn set_proposal_status(
        &self,
        proposal_id: Uuid,
        status: ProposalStatus,
    ) -> Result<bool, StoreError> {
        self.lock()?.set_proposal_status(proposal_id, status)
    }

    /// Expire pending proposals past their lifetime. Idempotent: a second
    /// sweep at the same date changes nothing.
    pub fn expire_before(&self, campaign_id: Uuid, cutoff: NaiveDate) -> Result<usize, StoreError> {
        let expired = self.lock()?.expire_before(campaign_id, cutoff)?;
        if expired > 0 {
            debug!(campaign = %campaign_id, expired, "Expired stale proposals");
        }
        Ok(expired)
    }

    pub fn expire_all_pending(&self, campaign_id: Uuid) -> Result<usize, StoreError> {
        let expired = self.lock()?.expire_all_pending(campaign_id)?;
        if expired > 0 {
            debug!(campaign = %campaign_id, expired, "Expired all pending proposals");
        }
        Ok(expired)
    }

    pub fn insert_pick(&self, pick: &DraftPick) -> Result<(), StoreError> {
        self.lock()?.insert_pick(pick)
    }

    pub fn picks_owned_by(
        &self,
        campaign_id: Uuid,
        owner: Uuid,
    ) -> Result<Vec<DraftPick>, StoreError> {
        self.lock()?.picks_owned_by(campaign_id, owner)
    }

    pub fn set_pick_numbers(
        &self,
        campaign_id: Uuid,
        original_team: Uuid,
        year: i32,
        number: u8,
    ) -> Result<usize, StoreError> {
        self.lock()?
            .set_pick_numbers(campaign_id, original_team, year, number)
    }

    pub fn upsert_standing(
        &self,
        campaign_id: Uuid,
        standing: &StandingRow,
    ) -> Result<(), StoreError> {
        self.lock()?.upsert_standing(campaign_id, standing)
    }

    pub fn standings(&self, campaign_id: Uuid) -> Result<Vec<StandingRow>, StoreError> {
        self.lock()?.standings(campaign_id)
    }

    pub fn flag(&self, campaign_id: Uuid, key: &str) -> Result<bool, StoreError> {
        self.lock()?.flag(campaign_id, key)
    }

    pub fn set_flag(&self, campaign_id: Uuid, key: &str, value: bool) -> Result<(), StoreError> {
        self.lock()?.set_flag(campaign_id, key, value)
    }

    pub fn insert_announcement(&self, item: &Announcement) -> Result<(), StoreError> {
        self.lock()?.insert_announcement(item)
    }

    pub fn announcements(&self, campaign_id: Uuid) -> Result<Vec<Announcement>, StoreError> {
        self.lock()?.announcements(campaign_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontoffice_models::trade::{AssetRef, TradeOffer};

    fn in_memory() -> TradeStore {
        TradeStore::new(SqliteStore::open_in_memory().unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn proposal(campaign_id: Uuid, team_id: Uuid, expires: NaiveDate) -> TradeProposal {
        TradeProposal {
            id: Uuid::new_v4(),
            campaign_id,
            team_id,
            status: ProposalStatus::Pending,
            offer: TradeOffer {
                give: vec![AssetRef::Pick(Uuid::new_v4())],
                receive: vec![AssetRef::Player(Uuid::new_v4())],
                reason: "test".to_string(),
            },
            reason: "test".to_string(),
            created_at: expires - chrono::Duration::days(3),
            expires_at: expires,
        }
    }

    #[test]
    fn delegates_proposal_lifecycle() {
        let store = in_memory();
        let campaign = Uuid::new_v4();
        let team = Uuid::new_v4();
        let p = proposal(campaign, team, date(2025, 12, 4));
        store.insert_proposal(&p).unwrap();

        assert!(store.pending_proposal(campaign, team).unwrap().is_some());

        store
            .set_proposal_status(p.id, ProposalStatus::Rejected)
            .unwrap();
        assert!(store.pending_proposal(campaign, team).unwrap().is_none());
    }

    #[test]
    fn sweep_is_idempotent() {
        let store = in_memory();
        let campaign = Uuid::new_v4();
        store
            .insert_proposal(&proposal(campaign, Uuid::new_v4(), date(2025, 12, 1)))
            .unwrap();

        assert_eq!(store.expire_before(campaign, date(2025, 12, 5)).unwrap(), 1);
        assert_eq!(store.expire_before(campaign, date(2025, 12, 5)).unwrap(), 0);
    }
}
