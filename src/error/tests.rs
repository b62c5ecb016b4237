//! Unit tests for error types and conversions

use super::*;

#[test]
fn test_player_not_found_display() {
    let err = CricketError::PlayerNotFound {
        name: "Don Bradman".to_string(),
    };
    assert_eq!(err.to_string(), "Player not found: Don Bradman");
}

#[test]
fn test_student_not_found_display() {
    let err = CricketError::StudentNotFound {
        name: "Asha".to_string(),
    };
    assert_eq!(err.to_string(), "Student not found: Asha");
}

#[test]
fn test_cgpa_out_of_range_display() {
    let err = CricketError::CgpaOutOfRange { cgpa: 10.5 };
    assert_eq!(
        err.to_string(),
        "CGPA 10.5 is outside the allowed range 0.0..=10.0"
    );
}

#[test]
fn test_invalid_scorecard_display() {
    let err = CricketError::InvalidScorecard {
        message: "expected 2 to 11 batting rows, got 1".to_string(),
    };
    assert!(err.to_string().starts_with("Invalid scorecard:"));
}

#[test]
fn test_storage_display() {
    let err = CricketError::Storage {
        message: "could not determine data directory".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Storage error: could not determine data directory"
    );
}

#[test]
fn test_from_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let err: CricketError = io_err.into();
    assert!(matches!(err, CricketError::Io(_)));
    assert!(err.to_string().contains("missing file"));
}

#[test]
fn test_from_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: CricketError = json_err.into();
    assert!(matches!(err, CricketError::Json(_)));
}

#[test]
fn test_from_rusqlite_error() {
    let sql_err = rusqlite::Error::QueryReturnedNoRows;
    let err: CricketError = sql_err.into();
    assert!(matches!(err, CricketError::Database(_)));
}

#[test]
fn test_result_alias() {
    fn returns_result() -> Result<u32> {
        Ok(42)
    }
    assert_eq!(returns_result().unwrap(), 42);
}
