//! Test doubles and fixture builders shared by unit and scenario tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use frontoffice_models::campaign::Campaign;
use frontoffice_models::roster::{Position, RosterEntry, Team};
use frontoffice_models::trade::{Direction, Evaluation, TradeOffer, Verdict};
use uuid::Uuid;

use crate::collaborators::{RosterProvider, TradeEvaluator};
use crate::error::EngineError;
use crate::rng::RandomSource;

/// Random source that replays a fixed list of draws. Once the script is
/// exhausted every draw returns 1.0, which never clears a probability gate.
pub struct ScriptedRandom {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, next: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn draw(&mut self) -> f64 {
        let value = self.draws.get(self.next).copied().unwrap_or(1.0);
        self.next += 1;
        value
    }
}

/// In-memory roster provider with a fixed team list and fetch counting.
pub struct StaticRosters {
    teams: Vec<Team>,
    rosters: HashMap<Uuid, Vec<RosterEntry>>,
    fetches: AtomicUsize,
}

impl StaticRosters {
    pub fn new(rosters: Vec<(Uuid, Vec<RosterEntry>)>) -> Self {
        Self::with_teams(Vec::new(), rosters)
    }

    pub fn with_teams(teams: Vec<Team>, rosters: Vec<(Uuid, Vec<RosterEntry>)>) -> Self {
        Self {
            teams,
            rosters: rosters.into_iter().collect(),
            fetches: AtomicUsize::new(0),
        }
    }

    /// How many roster fetches bypassed the snapshot cache.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RosterProvider for StaticRosters {
    async fn teams(&self, _campaign_id: Uuid) -> Result<Vec<Team>, EngineError> {
        Ok(self.teams.clone())
    }

    async fn roster(
        &self,
        _campaign_id: Uuid,
        team_id: Uuid,
    ) -> Result<Vec<RosterEntry>, EngineError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.rosters.get(&team_id).cloned().unwrap_or_default())
    }
}

/// Evaluator returning a fixed direction and verdict, optionally failing
/// direction classification for chosen teams. Records every offer it is
/// asked to judge.
pub struct MockEvaluator {
    direction: Direction,
    verdict: Verdict,
    failing_teams: Vec<Uuid>,
    seen_offers: Mutex<Vec<TradeOffer>>,
}

impl MockEvaluator {
    pub fn accepting(direction: Direction) -> Self {
        Self {
            direction,
            verdict: Verdict::Accept,
            failing_teams: Vec::new(),
            seen_offers: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(direction: Direction) -> Self {
        Self {
            verdict: Verdict::Reject,
            ..Self::accepting(direction)
        }
    }

    pub fn failing_direction_for(mut self, team_id: Uuid) -> Self {
        self.failing_teams.push(team_id);
        self
    }

    pub fn seen_offers(&self) -> Vec<TradeOffer> {
        self.seen_offers
            .lock()
            .map(|offers| offers.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TradeEvaluator for MockEvaluator {
    async fn classify_direction(
        &self,
        _campaign_id: Uuid,
        team_id: Uuid,
    ) -> Result<Direction, EngineError> {
        if self.failing_teams.contains(&team_id) {
            return Err(EngineError::Evaluator("scripted failure".to_string()));
        }
        Ok(self.direction)
    }

    async fn evaluate_offer(
        &self,
        _campaign_id: Uuid,
        _team_id: Uuid,
        offer: &TradeOffer,
    ) -> Result<Evaluation, EngineError> {
        if let Ok(mut offers) = self.seen_offers.lock() {
            offers.push(offer.clone());
        }
        Ok(Evaluation {
            verdict: self.verdict,
            reasoning: "scripted".to_string(),
        })
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn campaign_on(current_date: NaiveDate) -> Campaign {
    Campaign {
        id: Uuid::new_v4(),
        season_year: 2025,
        current_date,
    }
}

pub fn team(name: &str, human_controlled: bool) -> Team {
    Team {
        id: Uuid::new_v4(),
        name: name.to_string(),
        human_controlled,
    }
}

fn entry(last_name: &str, position: Position, rating: u8, age: u32) -> RosterEntry {
    RosterEntry {
        player_id: Uuid::new_v4(),
        first_name: "Test".to_string(),
        last_name: last_name.to_string(),
        position,
        secondary_position: None,
        rating: Some(rating),
        // Mid-year birthday keeps the age stable across a season's dates.
        birth_date: NaiveDate::from_ymd_opt(2025 - age as i32, 6, 15),
        salary: None,
        contract_years: None,
        trade_value: None,
        trade_value_total: None,
    }
}

/// A point guard of the given rating and age.
pub fn veteran(last_name: &str, rating: u8, age: u32) -> RosterEntry {
    entry(last_name, Position::PointGuard, rating, age)
}

/// A young center, useful as a target for both position and youth needs.
pub fn young_star(last_name: &str, rating: u8, age: u32) -> RosterEntry {
    entry(last_name, Position::Center, rating, age)
}

/// A full five-man lineup in conventional position order, all aged 26.
pub fn roster_of(ratings: &[u8]) -> Vec<RosterEntry> {
    Position::ALL
        .iter()
        .zip(ratings)
        .enumerate()
        .map(|(idx, (position, rating))| {
            entry(&format!("Starter{idx}"), *position, *rating, 26)
        })
        .collect()
}
