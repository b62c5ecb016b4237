//! Shared output shapes and formatting used by the player-facing commands.

use crate::stats::compute;
use crate::storage::Cricketer;
use serde::Serialize;

/// A player's stored record plus its derived statistics, in one flat shape
/// for JSON output. Absent statistics serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub country: Option<String>,
    pub role: Option<String>,
    pub matches: Option<u32>,
    pub innings_batted: Option<u32>,
    pub not_out: Option<u32>,
    pub runs_scored: Option<u32>,
    pub balls_faced: Option<u32>,
    pub high_score: Option<u32>,
    pub centuries: Option<u32>,
    pub half_centuries: Option<u32>,
    pub fours_scored: Option<u32>,
    pub sixes_scored: Option<u32>,
    pub innings_bowled: Option<u32>,
    pub balls_bowled: Option<u32>,
    pub runs_given: Option<u32>,
    pub wickets_taken: Option<u32>,
    pub batting_average: Option<f64>,
    pub batting_strike_rate: Option<f64>,
    pub bowling_average: Option<f64>,
    pub bowling_economy: Option<f64>,
}

impl PlayerSummary {
    pub fn from_record(player: &Cricketer) -> Self {
        Self {
            name: player.name.clone(),
            country: player.country.clone(),
            role: player.role.clone(),
            matches: player.matches,
            innings_batted: player.innings_batted,
            not_out: player.not_out,
            runs_scored: player.runs_scored,
            balls_faced: player.balls_faced,
            high_score: player.high_score,
            centuries: player.centuries,
            half_centuries: player.half_centuries,
            fours_scored: player.fours_scored,
            sixes_scored: player.sixes_scored,
            innings_bowled: player.innings_bowled,
            balls_bowled: player.balls_bowled,
            runs_given: player.runs_given,
            wickets_taken: player.wickets_taken,
            batting_average: compute::batting_average(player),
            batting_strike_rate: compute::batting_strike_rate(player),
            bowling_average: compute::bowling_average(player),
            bowling_economy: compute::bowling_economy(player),
        }
    }
}

/// Render one player as a single text line for list output.
pub fn player_line(player: &Cricketer) -> String {
    let country = player.country.as_deref().unwrap_or("?");
    let role = player.role.as_deref().unwrap_or("?");
    let matches = fmt_count(player.matches);
    let runs = fmt_count(player.runs_scored);
    let avg = fmt_stat(compute::batting_average(player));

    format!("{} ({country}, {role}): matches {matches}, runs {runs}, avg {avg}", player.name)
}

fn fmt_count(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn fmt_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}
