use frontoffice_models::campaign::Campaign;
use frontoffice_models::pick::PickView;
use frontoffice_models::roster::{StandingRow, Team};
use frontoffice_store::TradeStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;
use uuid::Uuid;

use crate::error::EngineError;
use crate::rng::{shuffle, RandomSource};

/// Projected slot used when a team has no standings row yet.
pub const DEFAULT_PROJECTED_POSITION: u32 = 15;

/// Per-slot value of a first-round pick, slot 1 (worst record) first.
pub const ROUND_ONE_VALUES: [Decimal; 30] = [
    dec!(30.0),
    dec!(26.0),
    dec!(23.0),
    dec!(20.5),
    dec!(18.5),
    dec!(16.8),
    dec!(15.3),
    dec!(14.0),
    dec!(12.8),
    dec!(11.8),
    dec!(10.8),
    dec!(10.0),
    dec!(9.2),
    dec!(8.5),
    dec!(7.8),
    dec!(7.2),
    dec!(6.6),
    dec!(6.1),
    dec!(5.6),
    dec!(5.1),
    dec!(4.7),
    dec!(4.3),
    dec!(3.9),
    dec!(3.5),
    dec!(3.2),
    dec!(2.8),
    dec!(2.5),
    dec!(2.0),
    dec!(1.6),
    dec!(1.2),
];

/// Per-slot value of a second-round pick.
pub const ROUND_TWO_VALUES: [Decimal; 30] = [
    dec!(1.00),
    dec!(0.95),
    dec!(0.90),
    dec!(0.86),
    dec!(0.82),
    dec!(0.78),
    dec!(0.74),
    dec!(0.70),
    dec!(0.66),
    dec!(0.62),
    dec!(0.58),
    dec!(0.55),
    dec!(0.52),
    dec!(0.49),
    dec!(0.46),
    dec!(0.43),
    dec!(0.40),
    dec!(0.37),
    dec!(0.34),
    dec!(0.32),
    dec!(0.30),
    dec!(0.28),
    dec!(0.26),
    dec!(0.24),
    dec!(0.22),
    dec!(0.20),
    dec!(0.18),
    dec!(0.16),
    dec!(0.14),
    dec!(0.12),
];

const ROUND_ONE_FALLBACK: Decimal = dec!(3);
const ROUND_TWO_FALLBACK: Decimal = dec!(0.5);
const YEARLY_DISCOUNT: Decimal = dec!(0.90);

/// Trade value of a pick at the given (projected or assigned) slot.
///
/// Future picks are discounted 10% per year out; past years are never
/// inflated. Anything other than round 1 is valued on the round-2 curve.
pub fn value_pick(round: u8, position: u32, years_out: i32) -> Decimal {
    if round > 2 || round == 0 {
        warn!(round, "Pick round out of range, valuing on round-2 curve");
    }
    let (table, fallback) = if round == 1 {
        (&ROUND_ONE_VALUES, ROUND_ONE_FALLBACK)
    } else {
        (&ROUND_TWO_VALUES, ROUND_TWO_FALLBACK)
    };

    let slot = position.clamp(1, 30) as usize - 1;
    let mut value = table.get(slot).copied().unwrap_or(fallback);
    for _ in 0..years_out.max(0) {
        value *= YEARLY_DISCOUNT;
    }
    value.round_dp(2)
}

/// Where a team's pick would land if the draft order were set today:
/// its slot in the ascending-by-wins standings, 1 = worst record.
pub fn project_position(team_id: Uuid, standings: &[StandingRow]) -> u32 {
    let mut ordered: Vec<&StandingRow> = standings.iter().collect();
    ordered.sort_by(|a, b| a.wins.cmp(&b.wins).then(b.losses.cmp(&a.losses)));

    ordered
        .iter()
        .position(|row| row.team_id == team_id)
        .map(|idx| idx as u32 + 1)
        .unwrap_or(DEFAULT_PROJECTED_POSITION)
}

/// Order teams for the draft: ascending by wins, ties broken by
/// descending losses (more losses drafts earlier).
///
/// With no standings recorded yet the order is a placeholder shuffle with
/// zeroed records; callers must not treat it as a real ranking.
pub fn order_for_draft(
    teams: &[Team],
    standings: Vec<StandingRow>,
    rng: &mut dyn RandomSource,
) -> Vec<StandingRow> {
    if standings.is_empty() {
        let mut rows: Vec<StandingRow> = teams
            .iter()
            .map(|team| StandingRow {
                team_id: team.id,
                wins: 0,
                losses: 0,
            })
            .collect();
        shuffle(rng, &mut rows);
        return rows;
    }

    let mut ordered = standings;
    ordered.sort_by(|a, b| a.wins.cmp(&b.wins).then(b.losses.cmp(&a.losses)));
    ordered
}

/// Walk the draft order once and write each team's slot to both of its
/// picks for the year. Returns the number of picks updated.
pub fn assign_pick_numbers(
    store: &TradeStore,
    campaign_id: Uuid,
    year: i32,
    teams: &[Team],
    rng: &mut dyn RandomSource,
) -> Result<usize, EngineError> {
    let standings = store.standings(campaign_id)?;
    let order = order_for_draft(teams, standings, rng);

    let mut updated = 0;
    for (idx, row) in order.iter().enumerate() {
        let number = u8::try_from(idx + 1).unwrap_or(u8::MAX);
        updated += store.set_pick_numbers(campaign_id, row.team_id, year, number)?;
    }
    Ok(updated)
}

/// Value-annotated tradeable picks for a team, ordered by year then round.
///
/// Assigned picks are valued at their slot; unassigned picks at the
/// original team's projected slot in the current standings. The draft for
/// the running season is held in the calendar year after the season's
/// start year, so that year counts as zero years out.
pub fn pick_views(
    store: &TradeStore,
    campaign: &Campaign,
    owner: Uuid,
) -> Result<Vec<PickView>, EngineError> {
    let picks = store.picks_owned_by(campaign.id, owner)?;
    if picks.is_empty() {
        return Ok(Vec::new());
    }

    let standings = store.standings(campaign.id)?;
    let views = picks
        .into_iter()
        .map(|pick| {
            let position = pick
                .number
                .map(u32::from)
                .unwrap_or_else(|| project_position(pick.original_team, &standings));
            let years_out = pick.year - (campaign.season_year + 1);
            let value = value_pick(pick.round, position, years_out);
            PickView { pick, value }
        })
        .collect();

    Ok(views)
}
