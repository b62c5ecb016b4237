//! Applying per-innings scorecards to stored records.

use crate::error::{CricketError, Result};
use crate::storage::PlayerStore;
use serde::{Deserialize, Serialize};

/// One batter's line in an innings scorecard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingScorecardRow {
    pub name: String,
    pub dismissed: bool,
    pub runs: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
}

impl BattingScorecardRow {
    pub fn new(
        name: impl Into<String>,
        dismissed: bool,
        runs: u32,
        balls_faced: u32,
        fours: u32,
        sixes: u32,
    ) -> Self {
        Self {
            name: name.into(),
            dismissed,
            runs,
            balls_faced,
            fours,
            sixes,
        }
    }
}

/// One bowler's line in an innings scorecard.
///
/// Maidens are part of the scorecard format but the stored model keeps no
/// maidens counter, so they are accepted and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingScorecardRow {
    pub name: String,
    pub balls_bowled: u32,
    pub maidens: u32,
    pub runs_given: u32,
    pub wickets: u32,
}

impl BowlingScorecardRow {
    pub fn new(
        name: impl Into<String>,
        balls_bowled: u32,
        maidens: u32,
        runs_given: u32,
        wickets: u32,
    ) -> Self {
        Self {
            name: name.into(),
            balls_bowled,
            maidens,
            runs_given,
            wickets,
        }
    }
}

/// Accumulate into a counter that may never have been recorded. An absent
/// counter starts from zero.
fn add(slot: &mut Option<u32>, amount: u32) {
    *slot = Some(slot.unwrap_or(0) + amount);
}

/// Update stored records with one innings' scorecards.
///
/// All batting rows are applied strictly before any bowling row; within
/// each list, rows are applied in input order. There is no rollback: a
/// `PlayerNotFound` aborts the remaining rows of this call and leaves the
/// rows already applied committed.
pub fn apply_innings<S: PlayerStore>(
    store: &mut S,
    batting: &[BattingScorecardRow],
    bowling: &[BowlingScorecardRow],
) -> Result<()> {
    for row in batting {
        apply_batting_row(store, row)?;
    }
    for row in bowling {
        apply_bowling_row(store, row)?;
    }
    Ok(())
}

fn apply_batting_row<S: PlayerStore>(store: &mut S, row: &BattingScorecardRow) -> Result<()> {
    let mut player =
        store
            .find_by_name(&row.name)?
            .ok_or_else(|| CricketError::PlayerNotFound {
                name: row.name.clone(),
            })?;

    if !row.dismissed {
        add(&mut player.not_out, 1);
    }

    add(&mut player.runs_scored, row.runs);
    player.high_score = Some(player.high_score.map_or(row.runs, |h| h.max(row.runs)));

    // Exactly 100 counts only as a century
    if row.runs >= 100 {
        add(&mut player.centuries, 1);
    } else if row.runs >= 50 {
        add(&mut player.half_centuries, 1);
    }

    // An innings is batted once the player faces a ball, dismissed or not
    if row.balls_faced > 0 {
        add(&mut player.innings_batted, 1);
    }
    add(&mut player.balls_faced, row.balls_faced);

    add(&mut player.fours_scored, row.fours);
    add(&mut player.sixes_scored, row.sixes);

    store.save(&player)
}

fn apply_bowling_row<S: PlayerStore>(store: &mut S, row: &BowlingScorecardRow) -> Result<()> {
    let mut player =
        store
            .find_by_name(&row.name)?
            .ok_or_else(|| CricketError::PlayerNotFound {
                name: row.name.clone(),
            })?;

    add(&mut player.innings_bowled, 1);
    add(&mut player.balls_bowled, row.balls_bowled);
    add(&mut player.runs_given, row.runs_given);
    add(&mut player.wickets_taken, row.wickets);

    store.save(&player)
}

/// Delete the record associated with a player.
///
/// Fails with `PlayerNotFound` if the name does not match any record, so a
/// second call for the same name fails rather than succeeding silently.
pub fn remove_player<S: PlayerStore>(store: &mut S, name: &str) -> Result<()> {
    if store.destroy(name)? {
        Ok(())
    } else {
        Err(CricketError::PlayerNotFound {
            name: name.to_string(),
        })
    }
}
