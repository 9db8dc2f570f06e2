use std::sync::Arc;

use frontoffice_models::roster::RosterEntry;
use frontoffice_models::store_schema::snapshot_keys;
use frontoffice_store::snapshot::SnapshotCache;
use tracing::warn;
use uuid::Uuid;

use crate::collaborators::RosterProvider;
use crate::error::EngineError;

/// Read-through roster cache.
///
/// A cycle touches the human roster once per AI team considered; caching
/// the JSON snapshot keeps that to one collaborator round-trip. Snapshots
/// expire on the cache TTL, so a stale roster can linger for at most one
/// cache window.
pub struct CachedRosters {
    provider: Arc<dyn RosterProvider>,
    cache: Arc<SnapshotCache>,
}

impl CachedRosters {
    pub fn new(provider: Arc<dyn RosterProvider>, cache: Arc<SnapshotCache>) -> Self {
        Self { provider, cache }
    }

    pub fn provider(&self) -> &Arc<dyn RosterProvider> {
        &self.provider
    }

    pub async fn roster(
        &self,
        campaign_id: Uuid,
        team_id: Uuid,
    ) -> Result<Vec<RosterEntry>, EngineError> {
        let key = snapshot_keys::roster(campaign_id, team_id);
        if let Some(json) = self.cache.get(&key).await {
            match serde_json::from_str(&json) {
                Ok(roster) => return Ok(roster),
                Err(e) => {
                    // Unreadable snapshot; drop it and refetch.
                    warn!(key = %key, error = %e, "Discarding corrupt roster snapshot");
                    self.cache.invalidate(&key).await;
                }
            }
        }

        let roster = self.provider.roster(campaign_id, team_id).await?;
        self.cache
            .insert(key, serde_json::to_string(&roster)?)
            .await;
        Ok(roster)
    }

    /// Drop one team's snapshot, forcing the next read to refetch.
    pub async fn invalidate(&self, campaign_id: Uuid, team_id: Uuid) {
        self.cache
            .invalidate(&snapshot_keys::roster(campaign_id, team_id))
            .await;
    }
}
