use chrono::NaiveDate;
use frontoffice_models::news::{Announcement, AnnouncementKind};
use frontoffice_models::roster::RosterEntry;
use frontoffice_models::trade::Direction;
use uuid::Uuid;

/// One-line rationale attached to an offer, keyed to the proposing team's
/// direction.
pub fn offer_reason(direction: Direction, target: &RosterEntry) -> String {
    let name = target.full_name();
    match direction {
        Direction::TitleContender => {
            format!("{name} could be the missing piece for a championship run.")
        }
        Direction::WinNow => format!("{name} fills an immediate hole in the rotation."),
        Direction::Ascending => format!("{name} raises the floor of a rising core."),
        Direction::Rebuilding => format!("{name} fits the timeline of the rebuild."),
    }
}

/// Announcement for a freshly persisted proposal.
pub fn trade_proposed(
    campaign_id: Uuid,
    team_name: &str,
    target: &RosterEntry,
    direction: Direction,
    today: NaiveDate,
) -> Announcement {
    let target_name = target.full_name();
    let body = match direction {
        Direction::TitleContender => format!(
            "{team_name} are pushing their chips in, offering a package for {target_name} \
             to bolster a title push."
        ),
        Direction::WinNow => format!(
            "{team_name} want to win today and have put together an offer for {target_name}."
        ),
        Direction::Ascending => format!(
            "{team_name} are looking to take the next step and have made a play for {target_name}."
        ),
        Direction::Rebuilding => format!(
            "{team_name} continue to retool, targeting {target_name} as a piece for the future."
        ),
    };
    Announcement {
        id: Uuid::new_v4(),
        campaign_id,
        kind: AnnouncementKind::TradeProposed,
        headline: format!("{team_name} propose trade for {target_name}"),
        body,
        created_at: today,
    }
}

/// One-shot warning inside the pre-deadline window.
pub fn deadline_approaching(
    campaign_id: Uuid,
    days_remaining: i64,
    today: NaiveDate,
) -> Announcement {
    Announcement {
        id: Uuid::new_v4(),
        campaign_id,
        kind: AnnouncementKind::DeadlineApproaching,
        headline: "Trade deadline approaching".to_string(),
        body: format!(
            "The trade deadline is {days_remaining} days away. Front offices around the \
             league are working the phones."
        ),
        created_at: today,
    }
}

/// One-shot notice once the deadline has passed.
pub fn deadline_passed(campaign_id: Uuid, today: NaiveDate) -> Announcement {
    Announcement {
        id: Uuid::new_v4(),
        campaign_id,
        kind: AnnouncementKind::DeadlinePassed,
        headline: "Trade deadline has passed".to_string(),
        body: "The trade deadline has passed. All outstanding offers are off the table \
               until next season."
            .to_string(),
        created_at: today,
    }
}
