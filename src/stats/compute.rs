//! Derived statistics computed from stored aggregate counters.
//!
//! Every function here is a pure read: a missing input counter makes the
//! statistic come back `None` instead of producing an error or a sentinel.

use crate::storage::Cricketer;


/// Batting average: runs scored / innings in which the player has been out.
///
/// Returns `None` if any of runs scored, innings batted or not outs is
/// missing. A player who has never been dismissed has no dismissals to
/// divide by; the convention is to report raw runs scored.
pub fn batting_average(player: &Cricketer) -> Option<f64> {
    let runs = player.runs_scored?;
    let innings = player.innings_batted?;
    let not_out = player.not_out?;

    if innings == not_out {
        return Some(f64::from(runs));
    }

    Some(f64::from(runs) / f64::from(innings - not_out))
}

/// Batting strike rate: (runs scored x 100) / balls faced.
///
/// Returns `None` if runs scored or balls faced is missing, or the player
/// has not faced a ball.
pub fn batting_strike_rate(player: &Cricketer) -> Option<f64> {
    let runs = player.runs_scored?;
    let balls = player.balls_faced?;

    if balls == 0 {
        return None;
    }

    Some(f64::from(runs) * 100.0 / f64::from(balls))
}

/// Bowling average: runs given / wickets taken.
///
/// Returns `None` if either counter is missing or no wicket has been taken.
pub fn bowling_average(player: &Cricketer) -> Option<f64> {
    let runs = player.runs_given?;
    let wickets = player.wickets_taken?;

    if wickets == 0 {
        return None;
    }

    Some(f64::from(runs) / f64::from(wickets))
}

/// Economy rate: runs conceded per six-ball over.
///
/// Returns `None` if either counter is missing or no ball has been bowled.
pub fn bowling_economy(player: &Cricketer) -> Option<f64> {
    let runs = player.runs_given?;
    let balls = player.balls_bowled?;

    if balls == 0 {
        return None;
    }

    Some(f64::from(runs) * 6.0 / f64::from(balls))
}
