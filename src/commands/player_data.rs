//! Handler for the `player` command.

use super::common::PlayerSummary;
use crate::error::{CricketError, Result};
use crate::storage::CricketDatabase;

pub fn handle_player_data(db: &CricketDatabase, name: &str, as_json: bool) -> Result<()> {
    let player = db
        .find_cricketer(name)?
        .ok_or_else(|| CricketError::PlayerNotFound {
            name: name.to_string(),
        })?;

    let summary = PlayerSummary::from_record(&player);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", summary.name);
    println!(
        "  {} / {}",
        summary.country.as_deref().unwrap_or("unknown country"),
        summary.role.as_deref().unwrap_or("unknown role")
    );
    print_count("matches", summary.matches);
    print_count("innings batted", summary.innings_batted);
    print_count("not out", summary.not_out);
    print_count("runs scored", summary.runs_scored);
    print_count("balls faced", summary.balls_faced);
    print_count("high score", summary.high_score);
    print_count("centuries", summary.centuries);
    print_count("half centuries", summary.half_centuries);
    print_count("fours", summary.fours_scored);
    print_count("sixes", summary.sixes_scored);
    print_count("innings bowled", summary.innings_bowled);
    print_count("balls bowled", summary.balls_bowled);
    print_count("runs given", summary.runs_given);
    print_count("wickets taken", summary.wickets_taken);
    print_stat("batting average", summary.batting_average);
    print_stat("strike rate", summary.batting_strike_rate);
    print_stat("bowling average", summary.bowling_average);
    print_stat("economy", summary.bowling_economy);

    Ok(())
}

fn print_count(label: &str, value: Option<u32>) {
    match value {
        Some(v) => println!("  {label}: {v}"),
        None => println!("  {label}: -"),
    }
}

fn print_stat(label: &str, value: Option<f64>) {
    match value {
        Some(v) => println!("  {label}: {v:.2}"),
        None => println!("  {label}: -"),
    }
}
