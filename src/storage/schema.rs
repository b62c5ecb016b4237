//! Database schema and connection management

use crate::error::{CricketError, Result};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for cricketer and student data
pub struct CricketDatabase {
    pub(crate) conn: Connection,
}

impl CricketDatabase {
    /// Open the database at its default location and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path()?)
    }

    /// Open (or create) a database at an explicit path
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create a transient in-memory database, mostly useful for tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| CricketError::Storage {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("cricviz").join("cricviz.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Create cricketers table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS cricketers (
                name TEXT PRIMARY KEY,
                country TEXT,
                role TEXT,
                matches INTEGER,
                innings_batted INTEGER,
                not_out INTEGER,
                runs_scored INTEGER,
                balls_faced INTEGER,
                high_score INTEGER,
                centuries INTEGER,
                half_centuries INTEGER,
                fours_scored INTEGER,
                sixes_scored INTEGER,
                innings_bowled INTEGER,
                balls_bowled INTEGER,
                runs_given INTEGER,
                wickets_taken INTEGER
            )",
            [],
        )?;

        // Create students table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS students (
                name TEXT PRIMARY KEY,
                branch TEXT,
                cgpa REAL NOT NULL
            )",
            [],
        )?;

        // Indexes backing the country and role scope queries
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_cricketers_country
             ON cricketers(country)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_cricketers_role
             ON cricketers(role)",
            [],
        )?;

        Ok(())
    }
}
