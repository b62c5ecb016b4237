//! Data models for the storage layer

use crate::error::{CricketError, Result};
use serde::{Deserialize, Serialize};

/// One row per cricketer, keyed by name.
///
/// Counter fields are `Option<u32>`: `None` means the figure was never
/// recorded for this player, which is distinct from a recorded zero. Derived
/// statistics treat `None` as incomplete data and come back absent rather
/// than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cricketer {
    pub name: String,
    pub country: Option<String>,
    /// One of "Batter", "Bowler", "Wicketkeeper", "All-rounder" by
    /// convention. Not enforced.
    pub role: Option<String>,
    pub matches: Option<u32>,

    // Batting counters
    pub innings_batted: Option<u32>,
    pub not_out: Option<u32>,
    pub runs_scored: Option<u32>,
    pub balls_faced: Option<u32>,
    pub high_score: Option<u32>,
    pub centuries: Option<u32>,
    pub half_centuries: Option<u32>,
    pub fours_scored: Option<u32>,
    pub sixes_scored: Option<u32>,

    // Bowling counters
    pub innings_bowled: Option<u32>,
    pub balls_bowled: Option<u32>,
    pub runs_given: Option<u32>,
    pub wickets_taken: Option<u32>,
}

impl Cricketer {
    /// Create an empty record for a named player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A student record, keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub branch: Option<String>,
    pub cgpa: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, branch: Option<String>, cgpa: f64) -> Self {
        Self {
            name: name.into(),
            branch,
            cgpa,
        }
    }

    /// CGPA must lie in `0.0..=10.0`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=10.0).contains(&self.cgpa) {
            return Err(CricketError::CgpaOutOfRange { cgpa: self.cgpa });
        }
        Ok(())
    }
}
