/// The SQLite schema backing the trade engine's repositories.
///
/// `trade_proposals`, `draft_picks`, `campaign_settings` and
/// `announcements` are owned and written by this engine. `standings` is
/// written by the external game simulation and only read here.
///
/// ```sql
/// CREATE TABLE IF NOT EXISTS trade_proposals (
///     id          TEXT PRIMARY KEY,
///     campaign_id TEXT NOT NULL,
///     team_id     TEXT NOT NULL,
///     status      TEXT NOT NULL,
///     offer_json  TEXT NOT NULL,
///     reason      TEXT NOT NULL,
///     created_at  TEXT NOT NULL,
///     expires_at  TEXT NOT NULL
/// );
/// ```
pub const STORE_DDL: &str = "\
CREATE TABLE IF NOT EXISTS trade_proposals (
    id          TEXT PRIMARY KEY,
    campaign_id TEXT NOT NULL,
    team_id     TEXT NOT NULL,
    status      TEXT NOT NULL,
    offer_json  TEXT NOT NULL,
    reason      TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    expires_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_proposals_campaign_status
    ON trade_proposals(campaign_id, status);

CREATE TABLE IF NOT EXISTS draft_picks (
    id            TEXT PRIMARY KEY,
    campaign_id   TEXT NOT NULL,
    original_team TEXT NOT NULL,
    current_owner TEXT NOT NULL,
    year          INTEGER NOT NULL,
    round         INTEGER NOT NULL,
    number        INTEGER
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_picks_origin
    ON draft_picks(campaign_id, original_team, year, round);
CREATE INDEX IF NOT EXISTS idx_picks_owner
    ON draft_picks(campaign_id, current_owner);

CREATE TABLE IF NOT EXISTS standings (
    campaign_id TEXT NOT NULL,
    team_id     TEXT NOT NULL,
    wins        INTEGER NOT NULL,
    losses      INTEGER NOT NULL,
    PRIMARY KEY (campaign_id, team_id)
);

CREATE TABLE IF NOT EXISTS campaign_settings (
    campaign_id TEXT NOT NULL,
    key         TEXT NOT NULL,
    value       TEXT NOT NULL,
    PRIMARY KEY (campaign_id, key)
);

CREATE TABLE IF NOT EXISTS announcements (
    id          TEXT PRIMARY KEY,
    campaign_id TEXT NOT NULL,
    kind        TEXT NOT NULL,
    headline    TEXT NOT NULL,
    body        TEXT NOT NULL,
    created_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_announcements_campaign
    ON announcements(campaign_id);
";

/// Cache key conventions for the in-memory snapshot cache.
///
/// Roster snapshots are keyed per (campaign, team) so one team's roster is
/// fetched from the roster collaborator at most once per cycle.
pub mod snapshot_keys {
    use uuid::Uuid;

    pub fn roster(campaign_id: Uuid, team_id: Uuid) -> String {
        format!("roster:{campaign_id}:{team_id}")
    }
}
