use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

pub const DEFAULT_RATING: f64 = 72.0;
pub const DEFAULT_SLOPE: f64 = 113.0;

/// One recorded round, already joined with the tee it was played from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Round {
    pub id: i64,
    pub date: NaiveDate,
    pub holes: u8,
    pub score: Option<i32>,
    pub par: Option<i32>,
    pub rating: Option<f64>,
    pub slope: Option<f64>,
    pub fir_hit: Option<i32>,
    pub fir_total: Option<i32>,
    pub gir_hit: Option<i32>,
    pub gir_total: Option<i32>,
    pub putts: Option<i32>,
    pub penalties: Option<i32>,
    #[serde(default)]
    pub hole_by_hole: bool,
    #[serde(default)]
    pub advanced_stats: bool,
    /// Set when a 9-hole round was doubled into an 18-hole equivalent.
    #[serde(default)]
    pub scaled_from_nine: bool,
}

impl Round {
    #[must_use]
    pub fn rating_or_default(&self) -> f64 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    #[must_use]
    pub fn slope_or_default(&self) -> f64 {
        self.slope.unwrap_or(DEFAULT_SLOPE)
    }

    /// Score differential against the tee's rating and slope, `None` when unscored.
    #[must_use]
    pub fn differential(&self) -> Option<f64> {
        self.score.map(|score| {
            (f64::from(score) - self.rating_or_default()) * DEFAULT_SLOPE / self.slope_or_default()
        })
    }
}

/// A single hole of a hole-by-hole round.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleRow {
    pub round_id: i64,
    pub score: Option<i32>,
    pub par: Option<i32>,
    #[serde(default)]
    pub hole_number: Option<u8>,
    #[serde(default)]
    pub putts: Option<i32>,
    #[serde(default)]
    pub penalties: Option<i32>,
    #[serde(default)]
    pub fir_hit: Option<bool>,
    #[serde(default)]
    pub gir_hit: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatsMode {
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "18")]
    Eighteen,
    #[serde(rename = "combined")]
    Combined,
}

impl StatsMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StatsMode::Nine => "9",
            StatsMode::Eighteen => "18",
            StatsMode::Combined => "combined",
        }
    }
}

impl fmt::Display for StatsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatsMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "9" => Ok(StatsMode::Nine),
            "18" => Ok(StatsMode::Eighteen),
            "combined" => Ok(StatsMode::Combined),
            other => Err(CoreError::InvalidMode(other.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HbhStats {
    pub hbh_rounds_count: usize,
    pub holes_counted: usize,
    pub par3_avg: Option<f64>,
    pub par4_avg: Option<f64>,
    pub par5_avg: Option<f64>,
    pub aces: usize,
    pub albatrosses: usize,
    pub eagles: usize,
    pub birdies: usize,
    pub pars: usize,
    pub bogeys: usize,
    pub double_bogeys_plus: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardStats {
    pub mode: StatsMode,
    pub total_rounds: usize,
    pub scaled_rounds: usize,
    pub best_score: Option<i32>,
    pub worst_score: Option<i32>,
    pub average_score: Option<f64>,
    pub handicap: Option<f64>,
    pub handicap_message: Option<String>,
    pub fir_avg: Option<f64>,
    pub gir_avg: Option<f64>,
    pub avg_putts: Option<f64>,
    pub avg_penalties: Option<f64>,
    pub rounds: Vec<Round>,
    pub hbh_stats: HbhStats,
}
