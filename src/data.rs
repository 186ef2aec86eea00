// src/data.rs
//! In-memory model handed from the extractor to the renderer.
//!
//! Coordinates arrive normalized to `0..=1` and are rescaled to the `0..=100`
//! Opta space only when something is placed on the pitch.

use crate::config::consts::{PITCH_LENGTH_YARDS, YARDS_PER_UNIT};

pub const PITCH_SCALE: f64 = 100.0;

#[inline]
pub fn rescale(v: f64) -> f64 {
    v * PITCH_SCALE
}

#[inline]
pub fn normalize(v: f64) -> f64 {
    v / PITCH_SCALE
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShotResult {
    Goal,
    Other(String),
}

impl ShotResult {
    pub fn from_label(label: &str) -> Self {
        if label == "Goal" { ShotResult::Goal } else { ShotResult::Other(s!(label)) }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, ShotResult::Goal)
    }

    pub fn label(&self) -> &str {
        match self {
            ShotResult::Goal => "Goal",
            ShotResult::Other(s) => s,
        }
    }
}

/// One shot attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct ShotRecord {
    /// Length-wise, 1.0 = opponent goal line
    pub x: f64,
    /// Width-wise, 1.0 = attacker's left touchline
    pub y: f64,
    pub xg: f64,
    pub result: ShotResult,
    pub season: String,
    pub player: String,

    // Context for the CLI report; empty when the page omits them.
    pub minute: u32,
    pub situation: String,
    pub shot_type: String,
    pub match_id: String,
    pub home_team: String,
    pub away_team: String,
    pub date: String,
}

impl ShotRecord {
    /// Minimal record; the context fields stay empty.
    pub fn new(x: f64, y: f64, xg: f64, result: &str, season: &str, player: &str) -> Self {
        Self {
            x,
            y,
            xg,
            result: ShotResult::from_label(result),
            season: s!(season),
            player: s!(player),
            minute: 0,
            situation: s!(),
            shot_type: s!(),
            match_id: s!(),
            home_team: s!(),
            away_team: s!(),
            date: s!(),
        }
    }

    pub fn pitch_x(&self) -> f64 {
        rescale(self.x)
    }

    pub fn pitch_y(&self) -> f64 {
        rescale(self.y)
    }

    pub fn is_goal(&self) -> bool {
        self.result.is_goal()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionSummary {
    pub total_shots: usize,
    pub total_goals: usize,
    pub total_xg: f64,
    pub xg_per_shot: f64,
    /// Mean rescaled x; where the average marker sits on the pitch
    pub points_average_distance: f64,
    /// Same mean expressed as yards from goal (unit basis unverified)
    pub actual_average_distance: f64,
}

impl SessionSummary {
    /// `None` for an empty slice, so nobody divides by zero shots.
    pub fn compute(records: &[ShotRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let n = records.len() as f64;
        let total_xg: f64 = records.iter().map(|r| r.xg).sum();
        let total_goals = records.iter().filter(|r| r.is_goal()).count();
        let mean_x = records.iter().map(ShotRecord::pitch_x).sum::<f64>() / n;
        let mean_yards = records.iter().map(|r| r.pitch_x() * YARDS_PER_UNIT).sum::<f64>() / n;

        Some(Self {
            total_shots: records.len(),
            total_goals,
            total_xg,
            xg_per_shot: total_xg / n,
            points_average_distance: mean_x,
            actual_average_distance: PITCH_LENGTH_YARDS - mean_yards,
        })
    }
}

/// Distinct seasons in first-seen order.
pub fn seasons_present<'a>(seasons: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for s in seasons {
        if !out.iter().any(|seen| seen == s) {
            out.push(s!(s));
        }
    }
    out
}
