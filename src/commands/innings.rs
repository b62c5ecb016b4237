//! Handler for the `innings` command: load scorecard JSON files, validate
//! them, and hand the rows to the statistics engine.

use crate::error::{CricketError, Result};
use crate::stats::scorecard::{apply_innings, BattingScorecardRow, BowlingScorecardRow};
use crate::storage::CricketDatabase;
use std::fs;
use std::path::Path;

/// A batting side fields at least two and at most eleven recorded batters.
const MIN_BATTING_ROWS: usize = 2;
const MAX_BATTING_ROWS: usize = 11;

pub fn handle_innings(
    db: &mut CricketDatabase,
    batting_path: &Path,
    bowling_path: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let batting = load_batting_scorecard(batting_path)?;
    let bowling = match bowling_path {
        Some(path) => load_bowling_scorecard(path)?,
        None => Vec::new(),
    };

    if verbose {
        for row in &batting {
            println!(
                "  batting: {} {} for {} off {}",
                row.name,
                if row.dismissed { "out" } else { "not out" },
                row.runs,
                row.balls_faced
            );
        }
        for row in &bowling {
            println!(
                "  bowling: {} {}/{} off {} balls",
                row.name, row.wickets, row.runs_given, row.balls_bowled
            );
        }
    }

    apply_innings(db, &batting, &bowling)?;

    println!(
        "Applied {} batting and {} bowling rows",
        batting.len(),
        bowling.len()
    );
    Ok(())
}

/// Load and validate a batting scorecard file.
pub fn load_batting_scorecard(path: &Path) -> Result<Vec<BattingScorecardRow>> {
    let contents = fs::read_to_string(path)?;
    let rows: Vec<BattingScorecardRow> = serde_json::from_str(&contents)?;

    if rows.len() < MIN_BATTING_ROWS || rows.len() > MAX_BATTING_ROWS {
        return Err(CricketError::InvalidScorecard {
            message: format!(
                "expected {MIN_BATTING_ROWS} to {MAX_BATTING_ROWS} batting rows, got {}",
                rows.len()
            ),
        });
    }
    Ok(rows)
}

/// Load a bowling scorecard file.
pub fn load_bowling_scorecard(path: &Path) -> Result<Vec<BowlingScorecardRow>> {
    let contents = fs::read_to_string(path)?;
    let rows: Vec<BowlingScorecardRow> = serde_json::from_str(&contents)?;
    Ok(rows)
}
