//! Cricket Statistics Tracker
//!
//! A library and CLI for tracking cricket player statistics and student
//! records, providing derived batting and bowling metrics, bulk scorecard
//! updates, and SQLite-backed storage.
//!
//! ## Features
//!
//! - **Derived Statistics**: Batting average, strike rate, bowling average
//!   and economy computed from stored aggregate counters, with explicit
//!   absent-data semantics
//! - **Scorecard Application**: Apply per-innings batting and bowling
//!   scorecards to stored records in bulk
//! - **Pluggable Storage**: A minimal `PlayerStore` trait with SQLite and
//!   in-memory implementations
//! - **Query Scopes**: Filter players by country or role, order by matches
//!   played
//! - **Student Registry**: Student records with CGPA range validation
//!
//! ## Quick Start
//!
//! ```rust
//! use cricviz::stats::{apply_innings, batting_average, import_classical_batters};
//! use cricviz::stats::scorecard::BattingScorecardRow;
//! use cricviz::storage::{MemoryStore, PlayerStore};
//!
//! # fn example() -> cricviz::Result<()> {
//! let mut store = MemoryStore::new();
//! import_classical_batters(&mut store)?;
//!
//! let rows = vec![BattingScorecardRow::new("Brian Lara", false, 153, 256, 19, 1)];
//! apply_innings(&mut store, &rows, &[])?;
//!
//! let lara = store.find_by_name("Brian Lara")?.unwrap();
//! assert!(batting_average(&lara).is_some());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use error::{CricketError, Result};
pub use stats::{apply_innings, batting_average, batting_strike_rate, remove_player};
pub use storage::{CricketDatabase, Cricketer, MemoryStore, PlayerStore, Student};
