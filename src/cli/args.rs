//! CLI argument definitions and parsing structures.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "cricviz", about = "Cricket player statistics tracker")]
pub struct Cricviz {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert career records for the five classical batters.
    Seed {
        /// Print each inserted player when done.
        #[clap(long)]
        verbose: bool,
    },

    /// Apply an innings scorecard to the stored records.
    ///
    /// Scorecards are JSON arrays of row objects; see the `demos/` directory
    /// for the expected shape. Batting rows are applied before bowling rows,
    /// and an unknown player name aborts the remaining rows without rolling
    /// back the rows already applied.
    Innings {
        /// Path to the batting scorecard JSON file (2 to 11 rows).
        #[clap(long, short)]
        batting: PathBuf,

        /// Path to the bowling scorecard JSON file.
        #[clap(long, short = 'w')]
        bowling: Option<PathBuf>,

        /// Print each applied row.
        #[clap(long)]
        verbose: bool,
    },

    /// Show a player's record together with derived statistics.
    Player {
        /// Exact player name.
        name: String,

        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List players, optionally filtered by country or role.
    List {
        /// Filter by country (exact match), e.g. `--country Australia`.
        #[clap(long, short)]
        country: Option<String>,

        /// Filter by role (exact match), e.g. `--role Batter`.
        #[clap(long, short)]
        role: Option<String>,

        /// Order by matches played, descending, instead of by name.
        #[clap(long)]
        by_matches: bool,

        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Delete a player's record permanently.
    Ban {
        /// Exact player name.
        name: String,
    },

    /// Student registry operations.
    Student {
        #[clap(subcommand)]
        cmd: StudentCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum StudentCmd {
    /// Add a student record.
    Add {
        /// Student name.
        name: String,

        /// Branch of study, e.g. `--branch CSE`.
        #[clap(long)]
        branch: Option<String>,

        /// CGPA on a 0.0 to 10.0 scale.
        #[clap(long)]
        cgpa: f64,
    },

    /// List all students.
    List {
        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Remove a student record.
    Remove {
        /// Student name.
        name: String,
    },
}
