//! Statistics engine: derived metrics and scorecard application
//!
//! Everything here runs against the `PlayerStore` seam, never against
//! SQLite directly, so the engine can be exercised with `MemoryStore`.

pub mod compute;
pub mod scorecard;
pub mod seed;


pub use compute::{batting_average, batting_strike_rate, bowling_average, bowling_economy};
pub use scorecard::{apply_innings, remove_player, BattingScorecardRow, BowlingScorecardRow};
pub use seed::import_classical_batters;
