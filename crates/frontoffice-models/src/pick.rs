use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A draft pick as a persisted, tradable asset.
///
/// Exactly one pick exists per (original team, year, round) at creation.
/// The pick number stays unassigned until standings are finalized for that
/// year, then is written exactly once by the ordering pass. Ownership moves
/// only through trade execution, which lives outside this engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DraftPick {
    pub id: Uuid,
    pub campaign_id: Uuid,
    /// The team whose record determines the pick's slot.
    pub original_team: Uuid,
    /// The team that controls the pick today.
    pub current_owner: Uuid,
    pub year: i32,
    /// Draft round, 1 or 2. Out-of-range rounds are valued on the
    /// round-2 curve rather than rejected.
    pub round: u8,
    /// Assigned slot in the draft order, None until standings finalize.
    pub number: Option<u8>,
}

impl DraftPick {
    /// Whether the pick has changed hands since creation.
    pub fn is_traded(&self) -> bool {
        self.current_owner != self.original_team
    }

    pub fn display_name(&self) -> String {
        match self.number {
            Some(number) => format!("{} round {} pick (#{number})", self.year, self.round),
            None => format!("{} round {} pick", self.year, self.round),
        }
    }
}

/// A pick annotated with its current trade value, as handed to offer
/// construction. Ordered by year then round when listed for a team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickView {
    pub pick: DraftPick,
    pub value: Decimal,
}
