use chrono::NaiveDate;
use frontoffice_models::roster::RosterEntry;
use frontoffice_models::trade::Need;

/// Rating floor applied to young-talent targets regardless of age.
const YOUNG_TARGET_MIN_RATING: u8 = 70;

/// Most candidates returned to the caller.
const MAX_TARGETS: usize = 3;

/// Rank and filter the counterparty's roster against a need.
///
/// The single best-valued candidate is dropped whenever at least one
/// other candidate remains, so the engine does not reflexively chase the
/// counterparty's best asset. Returns at most three candidates in
/// descending value order; empty means no viable target this cycle.
pub fn match_targets(roster: &[RosterEntry], need: &Need, today: NaiveDate) -> Vec<RosterEntry> {
    let mut candidates: Vec<RosterEntry> = roster
        .iter()
        .filter(|entry| matches_need(entry, need, today))
        .cloned()
        .collect();

    candidates.sort_by(|a, b| b.trade_worth().cmp(&a.trade_worth()));

    if candidates.len() > 1 {
        candidates.remove(0);
    }
    candidates.truncate(MAX_TARGETS);
    candidates
}

fn matches_need(entry: &RosterEntry, need: &Need, today: NaiveDate) -> bool {
    match need {
        Need::Position {
            position,
            min_rating,
        } => entry.position == *position && entry.rating() >= *min_rating,
        Need::Star { min_rating } => entry.rating() >= *min_rating,
        Need::Young { max_age } => {
            entry.age_on(today) <= *max_age && entry.rating() >= YOUNG_TARGET_MIN_RATING
        }
    }
}
