//! Reference data: career records for five classical batters.

use crate::error::Result;
use crate::storage::{Cricketer, PlayerStore};

/// Create records for the classical batters. Pure data insertion, used for
/// bootstrapping a fresh database and for demos.
pub fn import_classical_batters<S: PlayerStore>(store: &mut S) -> Result<()> {
    store.create(&Cricketer {
        name: "Sachin Tendulkar".to_string(),
        country: Some("India".to_string()),
        role: Some("Batter".to_string()),
        matches: Some(200),
        innings_batted: Some(329),
        not_out: Some(33),
        runs_scored: Some(15921),
        balls_faced: None,
        high_score: Some(248),
        centuries: Some(51),
        half_centuries: Some(68),
        ..Default::default()
    })?;

    store.create(&Cricketer {
        name: "Rahul Dravid".to_string(),
        country: Some("India".to_string()),
        role: Some("Batter".to_string()),
        matches: Some(164),
        innings_batted: Some(286),
        not_out: Some(32),
        runs_scored: Some(13288),
        balls_faced: Some(31258),
        high_score: Some(270),
        centuries: Some(36),
        half_centuries: Some(63),
        ..Default::default()
    })?;

    store.create(&Cricketer {
        name: "Kumar Sangakkara".to_string(),
        country: Some("Sri Lanka".to_string()),
        role: Some("Wicketkeeper".to_string()),
        matches: Some(134),
        innings_batted: Some(233),
        not_out: Some(17),
        runs_scored: Some(12400),
        balls_faced: Some(22882),
        high_score: Some(319),
        centuries: Some(38),
        half_centuries: Some(52),
        ..Default::default()
    })?;

    store.create(&Cricketer {
        name: "Ricky Ponting".to_string(),
        country: Some("Australia".to_string()),
        role: Some("Batter".to_string()),
        matches: Some(168),
        innings_batted: Some(287),
        not_out: Some(29),
        runs_scored: Some(13378),
        balls_faced: Some(22782),
        high_score: Some(257),
        centuries: Some(41),
        half_centuries: Some(62),
        ..Default::default()
    })?;

    store.create(&Cricketer {
        name: "Brian Lara".to_string(),
        country: Some("West Indies".to_string()),
        role: Some("Batter".to_string()),
        matches: Some(131),
        innings_batted: Some(232),
        not_out: Some(6),
        runs_scored: Some(11953),
        balls_faced: Some(19753),
        high_score: Some(400),
        centuries: Some(34),
        half_centuries: Some(48),
        ..Default::default()
    })?;

    Ok(())
}

/// Names inserted by [`import_classical_batters`], in insertion order.
pub const CLASSICAL_BATTERS: [&str; 5] = [
    "Sachin Tendulkar",
    "Rahul Dravid",
    "Kumar Sangakkara",
    "Ricky Ponting",
    "Brian Lara",
];
