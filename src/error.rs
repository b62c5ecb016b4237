//! Error types for the cricviz statistics tracker

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CricketError>;

#[derive(Error, Debug)]
pub enum CricketError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Student not found: {name}")]
    StudentNotFound { name: String },

    #[error("CGPA {cgpa} is outside the allowed range 0.0..=10.0")]
    CgpaOutOfRange { cgpa: f64 },

    #[error("Invalid scorecard: {message}")]
    InvalidScorecard { message: String },
}

#[cfg(test)]
mod tests;
