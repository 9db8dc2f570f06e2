use frontoffice_models::config::TradeConfig;
use frontoffice_models::roster::{Position, RosterEntry};
use frontoffice_models::trade::{Direction, Need};

/// The position a roster covers worst, with the rating of its best cover.
///
/// Cover counts both primary and secondary positions. A slot with nobody
/// at all scores 0 and is automatically weakest: an empty slot is an
/// infinite need.
pub fn weakest_position(roster: &[RosterEntry]) -> (Position, u8) {
    let mut weakest = (Position::ALL[0], u8::MAX);
    for position in Position::ALL {
        let best = roster
            .iter()
            .filter(|entry| entry.plays(position))
            .map(|entry| entry.rating())
            .max()
            .unwrap_or(0);
        if best < weakest.1 {
            weakest = (position, best);
        }
    }
    weakest
}

/// Derive what kind of asset a team should chase, from its competitive
/// direction and its own roster.
pub fn identify_need(
    direction: Direction,
    roster: &[RosterEntry],
    config: &TradeConfig,
) -> Option<Need> {
    match direction {
        Direction::Rebuilding => Some(Need::Young {
            max_age: config.young_age_limit,
        }),
        Direction::TitleContender | Direction::WinNow => {
            let (position, best_rating) = weakest_position(roster);
            if best_rating < config.star_rating {
                Some(Need::Position {
                    position,
                    min_rating: best_rating.saturating_add(2),
                })
            } else {
                // No glaring hole; look for any star-caliber addition.
                Some(Need::Star {
                    min_rating: config.star_rating,
                })
            }
        }
        Direction::Ascending => {
            if roster.is_empty() {
                return None;
            }
            let (position, best_rating) = weakest_position(roster);
            Some(Need::Position {
                position,
                min_rating: best_rating
                    .saturating_add(2)
                    .max(config.ascending_floor_rating),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn player(position: Position, secondary: Option<Position>, rating: u8) -> RosterEntry {
        RosterEntry {
            player_id: Uuid::new_v4(),
            first_name: "Test".to_string(),
            last_name: "Player".to_string(),
            position,
            secondary_position: secondary,
            rating: Some(rating),
            birth_date: None,
            salary: None,
            contract_years: None,
            trade_value: None,
            trade_value_total: None,
        }
    }

    fn full_roster(center_rating: u8) -> Vec<RosterEntry> {
        vec![
            player(Position::PointGuard, None, 85),
            player(Position::ShootingGuard, None, 84),
            player(Position::SmallForward, None, 86),
            player(Position::PowerForward, None, 83),
            player(Position::Center, None, center_rating),
        ]
    }

    #[test]
    fn contender_targets_weakest_position() {
        let roster = full_roster(74);
        let need = identify_need(Direction::TitleContender, &roster, &TradeConfig::default());
        assert_eq!(
            need,
            Some(Need::Position {
                position: Position::Center,
                min_rating: 76
            })
        );
    }

    #[test]
    fn contender_without_holes_hunts_a_star() {
        let roster = full_roster(82);
        let need = identify_need(Direction::WinNow, &roster, &TradeConfig::default());
        assert_eq!(need, Some(Need::Star { min_rating: 80 }));
    }

    #[test]
    fn secondary_position_counts_as_cover() {
        let mut roster = full_roster(74);
        // A strong forward who can slide to center closes the hole.
        roster.push(player(
            Position::PowerForward,
            Some(Position::Center),
            88,
        ));
        let need = identify_need(Direction::TitleContender, &roster, &TradeConfig::default());
        assert_eq!(need, Some(Need::Star { min_rating: 80 }));
    }

    #[test]
    fn rebuilding_always_wants_youth() {
        let need = identify_need(Direction::Rebuilding, &[], &TradeConfig::default());
        assert_eq!(need, Some(Need::Young { max_age: 24 }));
    }

    #[test]
    fn ascending_applies_rating_floor() {
        // Weakest slot rates 60; 60 + 2 is below the ascending floor of 72.
        let roster = vec![
            player(Position::PointGuard, None, 60),
            player(Position::ShootingGuard, None, 75),
            player(Position::SmallForward, None, 75),
            player(Position::PowerForward, None, 75),
            player(Position::Center, None, 75),
        ];
        let need = identify_need(Direction::Ascending, &roster, &TradeConfig::default());
        assert_eq!(
            need,
            Some(Need::Position {
                position: Position::PointGuard,
                min_rating: 72
            })
        );
    }

    #[test]
    fn ascending_exceeds_floor_when_weakest_is_strong() {
        let roster = vec![
            player(Position::PointGuard, None, 78),
            player(Position::ShootingGuard, None, 80),
            player(Position::SmallForward, None, 80),
            player(Position::PowerForward, None, 80),
            player(Position::Center, None, 80),
        ];
        let need = identify_need(Direction::Ascending, &roster, &TradeConfig::default());
        assert_eq!(
            need,
            Some(Need::Position {
                position: Position::PointGuard,
                min_rating: 80
            })
        );
    }

    #[test]
    fn ascending_with_empty_roster_declines() {
        let need = identify_need(Direction::Ascending, &[], &TradeConfig::default());
        assert_eq!(need, None);
    }

    #[test]
    fn uncovered_slot_is_always_weakest() {
        // No center anywhere: that slot scores 0.
        let roster = vec![
            player(Position::PointGuard, None, 40),
            player(Position::ShootingGuard, None, 41),
            player(Position::SmallForward, None, 42),
            player(Position::PowerForward, None, 43),
        ];
        let (position, best) = weakest_position(&roster);
        assert_eq!(position, Position::Center);
        assert_eq!(best, 0);
    }
}
