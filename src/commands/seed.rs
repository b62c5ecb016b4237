//! Handler for the `seed` command.

use crate::error::Result;
use crate::stats::seed::{import_classical_batters, CLASSICAL_BATTERS};
use crate::storage::CricketDatabase;

/// Insert the five classical batters into the store.
pub fn handle_seed(db: &mut CricketDatabase, verbose: bool) -> Result<()> {
    import_classical_batters(db)?;

    println!("Seeded {} classical batters", CLASSICAL_BATTERS.len());
    if verbose {
        for name in CLASSICAL_BATTERS {
            println!("  {name}");
        }
    }
    Ok(())
}
