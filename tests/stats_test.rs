//! End-to-end tests for the statistics engine against the SQLite store

use cricviz::stats::scorecard::{BattingScorecardRow, BowlingScorecardRow};
use cricviz::stats::{apply_innings, batting_average, batting_strike_rate, remove_player};
use cricviz::stats::seed::import_classical_batters;
use cricviz::{CricketDatabase, CricketError, Cricketer, PlayerStore};

fn seeded_db() -> CricketDatabase {
    let mut db = CricketDatabase::new_in_memory().unwrap();
    import_classical_batters(&mut db).unwrap();
    db
}

#[test]
fn test_seed_then_derived_stats() {
    let db = seeded_db();

    let lara = db.find_by_name("Brian Lara").unwrap().unwrap();
    let avg = batting_average(&lara).unwrap();
    assert!((avg - 11953.0 / 226.0).abs() < 1e-9);

    let sr = batting_strike_rate(&lara).unwrap();
    assert!((sr - 11953.0 * 100.0 / 19753.0).abs() < 1e-9);

    // Tendulkar's balls faced were never recorded, so no strike rate
    let tendulkar = db.find_by_name("Sachin Tendulkar").unwrap().unwrap();
    assert_eq!(batting_strike_rate(&tendulkar), None);
    assert!(batting_average(&tendulkar).is_some());
}

#[test]
fn test_full_innings_applies_to_sqlite_store() {
    let mut db = seeded_db();

    let batting = vec![
        BattingScorecardRow::new("Sachin Tendulkar", true, 114, 161, 12, 1),
        BattingScorecardRow::new("Rahul Dravid", false, 68, 140, 7, 0),
    ];
    let bowling = vec![BowlingScorecardRow::new("Brian Lara", 12, 0, 15, 0)];

    apply_innings(&mut db, &batting, &bowling).unwrap();

    let tendulkar = db.find_by_name("Sachin Tendulkar").unwrap().unwrap();
    assert_eq!(tendulkar.runs_scored, Some(15921 + 114));
    assert_eq!(tendulkar.centuries, Some(52));
    assert_eq!(tendulkar.innings_batted, Some(330));
    assert_eq!(tendulkar.not_out, Some(33));
    // High score unchanged: 114 < 248
    assert_eq!(tendulkar.high_score, Some(248));
    // Balls faced were unrecorded; the scorecard starts the counter
    assert_eq!(tendulkar.balls_faced, Some(161));

    let dravid = db.find_by_name("Rahul Dravid").unwrap().unwrap();
    assert_eq!(dravid.not_out, Some(33));
    assert_eq!(dravid.half_centuries, Some(64));
    assert_eq!(dravid.balls_faced, Some(31258 + 140));

    let lara = db.find_by_name("Brian Lara").unwrap().unwrap();
    assert_eq!(lara.innings_bowled, Some(1));
    assert_eq!(lara.balls_bowled, Some(12));
    assert_eq!(lara.runs_given, Some(15));
    assert_eq!(lara.wickets_taken, Some(0));
}

#[test]
fn test_partial_commit_on_unknown_player() {
    let mut db = seeded_db();

    let batting = vec![
        BattingScorecardRow::new("Ricky Ponting", true, 30, 45, 3, 0),
        BattingScorecardRow::new("No Such Player", true, 50, 70, 4, 1),
        BattingScorecardRow::new("Kumar Sangakkara", true, 80, 95, 9, 0),
    ];

    let err = apply_innings(&mut db, &batting, &[]).unwrap_err();
    assert!(matches!(
        err,
        CricketError::PlayerNotFound { name } if name == "No Such Player"
    ));

    // Ponting's row stays committed; Sangakkara's was never reached
    let ponting = db.find_by_name("Ricky Ponting").unwrap().unwrap();
    assert_eq!(ponting.runs_scored, Some(13378 + 30));

    let sangakkara = db.find_by_name("Kumar Sangakkara").unwrap().unwrap();
    assert_eq!(sangakkara.runs_scored, Some(12400));
}

#[test]
fn test_ban_is_permanent() {
    let mut db = seeded_db();

    remove_player(&mut db, "Kumar Sangakkara").unwrap();
    assert!(db.find_by_name("Kumar Sangakkara").unwrap().is_none());

    let err = remove_player(&mut db, "Kumar Sangakkara").unwrap_err();
    assert!(matches!(err, CricketError::PlayerNotFound { .. }));
}

#[test]
fn test_scopes_on_seeded_data() {
    let db = seeded_db();

    let aussies = db.players_from("Australia").unwrap();
    assert_eq!(aussies.len(), 1);
    assert_eq!(aussies[0].name, "Ricky Ponting");

    let batters = db.batters().unwrap();
    assert_eq!(batters.len(), 4); // Sangakkara is a wicketkeeper

    let by_matches = db.descending_by_matches().unwrap();
    assert_eq!(by_matches[0].name, "Sachin Tendulkar"); // 200 matches
    assert_eq!(by_matches[4].name, "Brian Lara"); // 131 matches
}

#[test]
fn test_new_player_accumulates_across_innings() {
    let mut db = seeded_db();

    db.create(&Cricketer::new("Debutant")).unwrap();

    apply_innings(
        &mut db,
        &[BattingScorecardRow::new("Debutant", false, 52, 61, 6, 1)],
        &[],
    )
    .unwrap();
    apply_innings(
        &mut db,
        &[BattingScorecardRow::new("Debutant", true, 101, 98, 11, 3)],
        &[],
    )
    .unwrap();

    let debutant = db.find_by_name("Debutant").unwrap().unwrap();
    assert_eq!(debutant.runs_scored, Some(153));
    assert_eq!(debutant.innings_batted, Some(2));
    assert_eq!(debutant.not_out, Some(1));
    assert_eq!(debutant.high_score, Some(101));
    assert_eq!(debutant.centuries, Some(1));
    assert_eq!(debutant.half_centuries, Some(1));

    // 153 runs, 2 innings, 1 not out -> average is 153 / 1
    assert_eq!(batting_average(&debutant), Some(153.0));
}
