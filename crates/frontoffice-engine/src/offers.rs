use chrono::NaiveDate;
use frontoffice_models::config::TradeConfig;
use frontoffice_models::pick::PickView;
use frontoffice_models::roster::RosterEntry;
use frontoffice_models::trade::{AssetRef, Direction};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// An offered player must land within this band of the target's value.
const VALUE_BAND_LOW: Decimal = dec!(0.5);
const VALUE_BAND_HIGH: Decimal = dec!(1.5);

/// Below this fraction of the target's value, a lone player offer gets a
/// pick added as a sweetener.
const SWEETEN_THRESHOLD: Decimal = dec!(0.8);

/// Assemble the give side of an offer for a target of the given value.
///
/// Rebuilding teams shop their veterans; everyone else protects their top
/// rated players. The first candidate whose value lands inside the band
/// is offered, with the team's best pick as fallback or sweetener. None
/// means the team has nothing to offer this cycle.
pub fn build_offer(
    own_roster: &[RosterEntry],
    target_value: Decimal,
    direction: Direction,
    picks: &[PickView],
    today: NaiveDate,
    config: &TradeConfig,
) -> Option<Vec<AssetRef>> {
    let mut by_rating: Vec<&RosterEntry> = own_roster.iter().collect();
    by_rating.sort_by(|a, b| b.rating().cmp(&a.rating()));

    let pool: Vec<&RosterEntry> = if direction == Direction::Rebuilding {
        let veterans: Vec<&RosterEntry> = by_rating
            .iter()
            .copied()
            .filter(|entry| entry.age_on(today) >= config.veteran_age)
            .collect();
        if veterans.is_empty() {
            by_rating
        } else {
            veterans
        }
    } else if by_rating.len() > config.protected_star_count {
        by_rating[config.protected_star_count..].to_vec()
    } else if by_rating.len() > 1 {
        // Excluding the full protected group would empty the pool;
        // protect only the single best player instead.
        by_rating[1..].to_vec()
    } else {
        Vec::new()
    };

    let low = target_value * VALUE_BAND_LOW;
    let high = target_value * VALUE_BAND_HIGH;
    let candidate = pool.iter().find(|entry| {
        let worth = entry.trade_worth();
        worth >= low && worth <= high
    });

    let best_pick = picks.iter().max_by(|a, b| a.value.cmp(&b.value));

    match candidate {
        Some(player) => {
            let mut give = vec![AssetRef::Player(player.player_id)];
            if player.trade_worth() < target_value * SWEETEN_THRESHOLD {
                if let Some(pick) = best_pick {
                    give.push(AssetRef::Pick(pick.pick.id));
                }
            }
            Some(give)
        }
        None => best_pick.map(|pick| vec![AssetRef::Pick(pick.pick.id)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontoffice_models::pick::DraftPick;
    use frontoffice_models::roster::Position;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
    }

    fn player(last_name: &str, rating: u8, age: u32, value: Decimal) -> RosterEntry {
        RosterEntry {
            player_id: Uuid::new_v4(),
            first_name: "Test".to_string(),
            last_name: last_name.to_string(),
            position: Position::PointGuard,
            secondary_position: None,
            rating: Some(rating),
            birth_date: NaiveDate::from_ymd_opt(2025 - age as i32, 1, 1),
            salary: None,
            contract_years: None,
            trade_value: Some(value),
            trade_value_total: None,
        }
    }

    fn pick_view(value: Decimal) -> PickView {
        let team = Uuid::new_v4();
        PickView {
            pick: DraftPick {
                id: Uuid::new_v4(),
                campaign_id: Uuid::new_v4(),
                original_team: team,
                current_owner: team,
                year: 2026,
                round: 1,
                number: None,
            },
            value,
        }
    }

    fn config() -> TradeConfig {
        TradeConfig::default()
    }

    #[test]
    fn protects_top_three_outside_a_rebuild() {
        let roster = vec![
            player("First", 90, 26, dec!(50)),
            player("Second", 88, 26, dec!(45)),
            player("Third", 86, 26, dec!(40)),
            player("Fourth", 80, 26, dec!(30)),
        ];
        let give = build_offer(&roster, dec!(30), Direction::WinNow, &[], today(), &config())
            .expect("offer");

        assert_eq!(give, vec![AssetRef::Player(roster[3].player_id)]);
    }

    #[test]
    fn small_roster_protects_only_the_best_player() {
        let roster = vec![
            player("First", 90, 26, dec!(50)),
            player("Second", 80, 26, dec!(30)),
        ];
        let give = build_offer(&roster, dec!(30), Direction::WinNow, &[], today(), &config())
            .expect("offer");

        assert_eq!(give, vec![AssetRef::Player(roster[1].player_id)]);
    }

    #[test]
    fn rebuild_shops_veterans_first() {
        let roster = vec![
            player("Prospect", 85, 22, dec!(40)),
            player("Veteran", 78, 31, dec!(30)),
        ];
        let give = build_offer(
            &roster,
            dec!(30),
            Direction::Rebuilding,
            &[],
            today(),
            &config(),
        )
        .expect("offer");

        assert_eq!(give, vec![AssetRef::Player(roster[1].player_id)]);
    }

    #[test]
    fn rebuild_without_veterans_uses_full_roster() {
        let roster = vec![player("Prospect", 85, 22, dec!(40))];
        let give = build_offer(
            &roster,
            dec!(40),
            Direction::Rebuilding,
            &[],
            today(),
            &config(),
        )
        .expect("offer");

        assert_eq!(give, vec![AssetRef::Player(roster[0].player_id)]);
    }

    #[test]
    fn out_of_band_candidates_are_skipped() {
        let roster = vec![
            player("First", 90, 26, dec!(50)),
            player("Second", 88, 26, dec!(45)),
            player("Third", 86, 26, dec!(40)),
            // Worth 4 against a target of 30: below the half-value floor.
            player("Scrub", 60, 26, dec!(4)),
        ];
        let picks = vec![pick_view(dec!(14.0))];
        let give = build_offer(
            &roster,
            dec!(30),
            Direction::WinNow,
            &picks,
            today(),
            &config(),
        )
        .expect("offer");

        assert_eq!(give, vec![AssetRef::Pick(picks[0].pick.id)]);
    }

    #[test]
    fn lone_player_below_threshold_gets_sweetener() {
        let roster = vec![
            player("First", 90, 26, dec!(50)),
            player("Second", 88, 26, dec!(45)),
            player("Third", 86, 26, dec!(40)),
            // Worth 20 against a target of 30: in band, but under 0.8x.
            player("Filler", 75, 26, dec!(20)),
        ];
        let picks = vec![pick_view(dec!(6.6)), pick_view(dec!(14.0))];
        let give = build_offer(
            &roster,
            dec!(30),
            Direction::WinNow,
            &picks,
            today(),
            &config(),
        )
        .expect("offer");

        assert_eq!(
            give,
            vec![
                AssetRef::Player(roster[3].player_id),
                AssetRef::Pick(picks[1].pick.id),
            ]
        );
    }

    #[test]
    fn fair_value_player_goes_unsweetened() {
        let roster = vec![
            player("First", 90, 26, dec!(50)),
            player("Second", 88, 26, dec!(45)),
            player("Third", 86, 26, dec!(40)),
            player("Fair", 79, 26, dec!(28)),
        ];
        let picks = vec![pick_view(dec!(14.0))];
        let give = build_offer(
            &roster,
            dec!(30),
            Direction::WinNow,
            &picks,
            today(),
            &config(),
        )
        .expect("offer");

        assert_eq!(give, vec![AssetRef::Player(roster[3].player_id)]);
    }

    #[test]
    fn nothing_to_offer_fails_construction() {
        let roster = vec![player("Only", 90, 26, dec!(50))];
        let give = build_offer(&roster, dec!(30), Direction::WinNow, &[], today(), &config());
        assert!(give.is_none());
    }
}
