//! Integration tests for the SQLite storage layer

use cricviz::{CricketDatabase, Cricketer, Student};

fn sample_player() -> Cricketer {
    Cricketer {
        name: "Sample Player".to_string(),
        country: Some("England".to_string()),
        role: Some("All-rounder".to_string()),
        matches: Some(42),
        innings_batted: Some(60),
        not_out: Some(5),
        runs_scored: Some(2100),
        balls_faced: Some(3900),
        high_score: Some(140),
        centuries: Some(3),
        half_centuries: Some(11),
        fours_scored: Some(230),
        sixes_scored: Some(31),
        innings_bowled: Some(55),
        balls_bowled: Some(6100),
        runs_given: Some(2800),
        wickets_taken: Some(98),
    }
}

#[test]
fn test_round_trip_every_field() {
    let mut db = CricketDatabase::new_in_memory().unwrap();

    let player = sample_player();
    db.upsert_cricketer(&player).unwrap();

    let found = db.find_cricketer("Sample Player").unwrap().unwrap();
    assert_eq!(found, player);
}

#[test]
fn test_file_backed_database_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cricviz.db");

    {
        let mut db = CricketDatabase::open(&path).unwrap();
        db.upsert_cricketer(&sample_player()).unwrap();
    }

    // Reopen and read back
    let db = CricketDatabase::open(&path).unwrap();
    let found = db.find_cricketer("Sample Player").unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().wickets_taken, Some(98));
}

#[test]
fn test_open_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("cricviz.db");

    let _db = CricketDatabase::open(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_students_persist_alongside_cricketers() {
    let mut db = CricketDatabase::new_in_memory().unwrap();

    db.upsert_cricketer(&sample_player()).unwrap();
    db.upsert_student(&Student::new("Ben", Some("ECE".to_string()), 7.8))
        .unwrap();
    db.upsert_student(&Student::new("Asha", Some("CSE".to_string()), 9.4))
        .unwrap();

    let students = db.all_students().unwrap();
    assert_eq!(students.len(), 2);
    // Ordered by name
    assert_eq!(students[0].name, "Asha");
    assert_eq!(students[1].name, "Ben");

    // Cricketer table untouched
    assert_eq!(db.all_cricketers().unwrap().len(), 1);
}
