//! Handler for the `ban` command.

use crate::error::Result;
use crate::stats::scorecard::remove_player;
use crate::storage::CricketDatabase;

/// Permanently delete a player's record.
pub fn handle_ban(db: &mut CricketDatabase, name: &str) -> Result<()> {
    remove_player(db, name)?;
    println!("Banned {name}");
    Ok(())
}
