use chrono::NaiveDate;
use frontoffice_models::news::{Announcement, AnnouncementKind};
use frontoffice_models::pick::DraftPick;
use frontoffice_models::roster::StandingRow;
use frontoffice_models::store_schema::STORE_DDL;
use frontoffice_models::trade::{ProposalStatus, TradeProposal};
use rusqlite::Connection;
use uuid::Uuid;

use crate::error::StoreError;

/// SQLite accessor for the trade engine's owned tables.
///
/// The `standings` table is populated by the external game simulation;
/// everything else is written here. The schema is applied on open so a
/// fresh campaign database works without a migration step.
pub struct SqliteStore {
    conn: Connection,
}

fn conv_failure<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_uuid(idx: usize, value: String) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(&value).map_err(|e| conv_failure(idx, e))
}

fn row_to_proposal(row: &rusqlite::Row<'_>) -> rusqlite::Result<TradeProposal> {
    let status: String = row.get(3)?;
    let offer_json: String = row.get(4)?;
    Ok(TradeProposal {
        id: parse_uuid(0, row.get(0)?)?,
        campaign_id: parse_uuid(1, row.get(1)?)?,
        team_id: parse_uuid(2, row.get(2)?)?,
        status: ProposalStatus::parse(&status).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                format!("unknown proposal status: {status}").into(),
            )
        })?,
        offer: serde_json::from_str(&offer_json).map_err(|e| conv_failure(4, e))?,
        reason: row.get(5)?,
        created_at: row.get(6)?,
        expires_at: row.get(7)?,
    })
}

fn row_to_pick(row: &rusqlite::Row<'_>) -> rusqlite::Result<DraftPick> {
    Ok(DraftPick {
        id: parse_uuid(0, row.get(0)?)?,
        campaign_id: parse_uuid(1, row.get(1)?)?,
        original_team: parse_uuid(2, row.get(2)?)?,
        current_owner: parse_uuid(3, row.get(3)?)?,
        year: row.get(4)?,
        round: row.get(5)?,
        number: row.get(6)?,
    })
}

impl SqliteStore {
    /// Open (or create) a campaign database at the given path.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(STORE_DDL)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database with the schema applied. Used in tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(STORE_DDL)?;
        Ok(Self { conn })
    }

    // ---- trade proposals ----

    pub fn insert_proposal(&self, proposal: &TradeProposal) -> Result<(), StoreError> {
        let offer_json = serde_json::to_string(&proposal.offer)?;
        self.conn.execute(
            "INSERT INTO trade_proposals \
             (id, campaign_id, team_id, status, offer_json, reason, created_at, expires_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                proposal.id.to_string(),
                proposal.campaign_id.to_string(),
                proposal.team_id.to_string(),
                proposal.status.as_str(),
                offer_json,
                proposal.reason,
                proposal.created_at,
                proposal.expires_at,
            ],
        )?;
        Ok(())
    }

    /// The pending proposal from one team, if any. At most one exists.
    pub fn pending_proposal(
        &self,
        campaign_id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<TradeProposal>, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, campaign_id, team_id, status, offer_json, reason, created_at, expires_at \
             FROM trade_proposals \
             WHERE campaign_id = ?1 AND team_id = ?2 AND status = 'pending'",
        )?;

        let result = stmt.query_row(
            rusqlite::params![campaign_id.to_string(), team_id.to_string()],
            row_to_proposal,
        );

        match result {
            Ok(proposal) => Ok(Some(proposal)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Sqlite(e)),
        }
    }

    pub fn pending_proposals(&self, campaign_id: Uuid) -> Result<Vec<TradeProposal>, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, campaign_id, team_id, status, offer_json, reason, created_at, expires_at \
             FROM trade_proposals \
             WHERE campaign_id = ?1 AND status = 'pending' \
             ORDER BY created_at",
        )?;

        let rows = stmt
            .query_map(rusqlite::params![campaign_id.to_string()], row_to_proposal)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    pub fn set_proposal_status(
        &self,
        proposal_id: Uuid,
        status: ProposalStatus,
    ) -> Result<bool, StoreError> {
        let changed = self.conn.execute(
            "UPDATE trade_proposals SET status = ?2 WHERE id = ?1",
            rusqlite::params![proposal_id.to_string(), status.as_str()],
        )?;
        Ok(changed > 0)
    }

    /// Expire pending proposals whose lifetime ended before the cutoff.
    /// Returns the number of proposals transitioned.
    pub fn expire_before(&self, campaign_id: Uuid, cutoff: NaiveDate) -> Result<usize, StoreError> {
        let changed = self.conn.execute(
            "UPDATE trade_proposals SET status = 'expired' \
             WHERE campaign_id = ?1 AND status = 'pending' AND expires_at < ?2",
            rusqlite::params![campaign_id.to_string(), cutoff],
        )?;
        Ok(changed)
    }

    /// Expire every pending proposal in the campaign, used once the trade
    /// deadline has passed.
    pub fn expire_all_pending(&self, campaign_id: Uuid) -> Result<usize, StoreError> {
        let changed = self.conn.execute(
            "UPDATE trade_proposals SET status = 'expired' \
             WHERE campaign_id = ?1 AND status = 'pending'",
            rusqlite::params![campaign_id.to_string()],
        )?;
        Ok(changed)
    }

    // ---- draft picks ----

    pub fn insert_pick(&self, pick: &DraftPick) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO draft_picks \
             (id, campaign_id, original_team, current_owner, year, round, number) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                pick.id.to_string(),
                pick.campaign_id.to_string(),
                pick.original_team.to_string(),
                pick.current_owner.to_string(),
                pick.year,
                pick.round,
                pick.number,
            ],
        )?;
        Ok(())
    }

    /// Picks currently controlled by a team, ordered by year then round.
    pub fn picks_owned_by(
        &self,
        campaign_id: Uuid,
        owner: Uuid,
    ) -> Result<Vec<DraftPick>, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, campaign_id, original_team, current_owner, year, round, number \
             FROM draft_picks \
             WHERE campaign_id = ?1 AND current_owner = ?2 \
             ORDER BY year, round",
        )?;

        let rows = stmt
            .query_map(
                rusqlite::params![campaign_id.to_string(), owner.to_string()],
                row_to_pick,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Write the same draft-order slot to both of a team's picks for the
    /// year. Round 1 and round 2 share the slot by rule.
    pub fn set_pick_numbers(
        &self,
        campaign_id: Uuid,
        original_team: Uuid,
        year: i32,
        number: u8,
    ) -> Result<usize, StoreError> {
        let changed = self.conn.execute(
            "UPDATE draft_picks SET number = ?4 \
             WHERE campaign_id = ?1 AND original_team = ?2 AND year = ?3",
            rusqlite::params![
                campaign_id.to_string(),
                original_team.to_string(),
                year,
                number,
            ],
        )?;
        Ok(changed)
    }

    // ---- standings (read side; written by the game simulation) ----

    pub fn upsert_standing(
        &self,
        campaign_id: Uuid,
        standing: &StandingRow,
    ) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO standings (campaign_id, team_id, wins, losses) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                campaign_id.to_string(),
                standing.team_id.to_string(),
                standing.wins,
                standing.losses,
            ],
        )?;
        Ok(())
    }

    pub fn standings(&self, campaign_id: Uuid) -> Result<Vec<StandingRow>, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT team_id, wins, losses FROM standings WHERE campaign_id = ?1",
        )?;

        let rows = stmt
            .query_map(rusqlite::params![campaign_id.to_string()], |row| {
                Ok(StandingRow {
                    team_id: parse_uuid(0, row.get(0)?)?,
                    wins: row.get(1)?,
                    losses: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    // ---- campaign settings ----

    /// Read a one-shot boolean flag. Absent means unset.
    pub fn flag(&self, campaign_id: Uuid, key: &str) -> Result<bool, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT value FROM campaign_settings WHERE campaign_id = ?1 AND key = ?2",
        )?;

        let result: rusqlite::Result<String> = stmt.query_row(
            rusqlite::params![campaign_id.to_string(), key],
            |row| row.get(0),
        );

        match result {
            Ok(value) => Ok(value == "true"),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
            Err(e) => Err(StoreError::Sqlite(e)),
        }
    }

    pub fn set_flag(&self, campaign_id: Uuid, key: &str, value: bool) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO campaign_settings (campaign_id, key, value) \
             VALUES (?1, ?2, ?3)",
            rusqlite::params![
                campaign_id.to_string(),
                key,
                if value { "true" } else { "false" },
            ],
        )?;
        Ok(())
    }

    // ---- announcements ----

    pub fn insert_announcement(&self, item: &Announcement) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO announcements (id, campaign_id, kind, headline, body, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                item.id.to_string(),
                item.campaign_id.to_string(),
                item.kind.as_str(),
                item.headline,
                item.body,
                item.created_at,
            ],
        )?;
        Ok(())
    }

    pub fn announcements(&self, campaign_id: Uuid) -> Result<Vec<Announcement>, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, campaign_id, kind, headline, body, created_at \
             FROM announcements WHERE campaign_id = ?1 ORDER BY created_at, id",
        )?;

        let rows = stmt
            .query_map(rusqlite::params![campaign_id.to_string()], |row| {
                let kind: String = row.get(2)?;
                Ok(Announcement {
                    id: parse_uuid(0, row.get(0)?)?,
                    campaign_id: parse_uuid(1, row.get(1)?)?,
                    kind: AnnouncementKind::parse(&kind).ok_or_else(|| {
                        rusqlite::Error::FromSqlConversionFailure(
                            2,
                            rusqlite::types::Type::Text,
                            format!("unknown announcement kind: {kind}").into(),
                        )
                    })?,
                    headline: row.get(3)?,
                    body: row.get(4)?,
                    created_at: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}
