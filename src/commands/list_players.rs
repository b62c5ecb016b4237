//! Handler for the `list` command.

use super::common::{player_line, PlayerSummary};
use crate::error::Result;
use crate::storage::{CricketDatabase, Cricketer};

pub fn handle_list_players(
    db: &CricketDatabase,
    country: Option<&str>,
    role: Option<&str>,
    by_matches: bool,
    as_json: bool,
) -> Result<()> {
    let players = query_players(db, country, role, by_matches)?;

    if as_json {
        let summaries: Vec<PlayerSummary> =
            players.iter().map(PlayerSummary::from_record).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if players.is_empty() {
        println!("No players matched");
        return Ok(());
    }

    for player in &players {
        println!("{}", player_line(player));
    }
    Ok(())
}

/// Run the narrowest store query available, then apply any remaining filter
/// client-side.
fn query_players(
    db: &CricketDatabase,
    country: Option<&str>,
    role: Option<&str>,
    by_matches: bool,
) -> Result<Vec<Cricketer>> {
    let mut players = if by_matches {
        db.descending_by_matches()?
    } else if let Some(country) = country {
        db.players_from(country)?
    } else if let Some(role) = role {
        db.players_with_role(role)?
    } else {
        db.all_cricketers()?
    };

    if by_matches {
        if let Some(country) = country {
            players.retain(|p| p.country.as_deref() == Some(country));
        }
    }
    if by_matches || country.is_some() {
        if let Some(role) = role {
            players.retain(|p| p.role.as_deref() == Some(role));
        }
    }

    Ok(players)
}
