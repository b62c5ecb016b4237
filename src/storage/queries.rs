//! Cricketer CRUD and scope queries

use super::{models::Cricketer, schema::CricketDatabase};
use crate::error::{CricketError, Result};
use rusqlite::{params, Row};

const CRICKETER_COLUMNS: &str = "name, country, role, matches,
        innings_batted, not_out, runs_scored, balls_faced, high_score,
        centuries, half_centuries, fours_scored, sixes_scored,
        innings_bowled, balls_bowled, runs_given, wickets_taken";

impl CricketDatabase {
    /// Insert or replace a cricketer's record. Records are keyed by name,
    /// so creating a player that already exists overwrites the old row.
    pub fn upsert_cricketer(&mut self, player: &Cricketer) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO cricketers
             (name, country, role, matches,
              innings_batted, not_out, runs_scored, balls_faced, high_score,
              centuries, half_centuries, fours_scored, sixes_scored,
              innings_bowled, balls_bowled, runs_given, wickets_taken)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                player.name,
                player.country,
                player.role,
                player.matches,
                player.innings_batted,
                player.not_out,
                player.runs_scored,
                player.balls_faced,
                player.high_score,
                player.centuries,
                player.half_centuries,
                player.fours_scored,
                player.sixes_scored,
                player.innings_bowled,
                player.balls_bowled,
                player.runs_given,
                player.wickets_taken,
            ],
        )?;
        Ok(())
    }

    /// Look up a cricketer by exact name
    pub fn find_cricketer(&self, name: &str) -> Result<Option<Cricketer>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CRICKETER_COLUMNS} FROM cricketers WHERE name = ?"
        ))?;

        let result = stmt.query_row(params![name], |row| Self::row_to_cricketer(row));

        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write back an existing cricketer's record
    pub fn save_cricketer(&mut self, player: &Cricketer) -> Result<()> {
        let rows_affected = self.conn.execute(
            "UPDATE cricketers SET
                country = ?, role = ?, matches = ?,
                innings_batted = ?, not_out = ?, runs_scored = ?,
                balls_faced = ?, high_score = ?, centuries = ?,
                half_centuries = ?, fours_scored = ?, sixes_scored = ?,
                innings_bowled = ?, balls_bowled = ?, runs_given = ?,
                wickets_taken = ?
             WHERE name = ?",
            params![
                player.country,
                player.role,
                player.matches,
                player.innings_batted,
                player.not_out,
                player.runs_scored,
                player.balls_faced,
                player.high_score,
                player.centuries,
                player.half_centuries,
                player.fours_scored,
                player.sixes_scored,
                player.innings_bowled,
                player.balls_bowled,
                player.runs_given,
                player.wickets_taken,
                player.name,
            ],
        )?;

        if rows_affected == 0 {
            return Err(CricketError::PlayerNotFound {
                name: player.name.clone(),
            });
        }
        Ok(())
    }

    /// Delete a cricketer's record. Returns whether a row was removed.
    pub fn destroy_cricketer(&mut self, name: &str) -> Result<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM cricketers WHERE name = ?", params![name])?;
        Ok(rows_affected > 0)
    }

    /// All cricketers, ordered by name
    pub fn all_cricketers(&self) -> Result<Vec<Cricketer>> {
        self.query_cricketers(
            &format!("SELECT {CRICKETER_COLUMNS} FROM cricketers ORDER BY name"),
            params![],
        )
    }

    /// Players from a given country. `players_from("Australia")` is the
    /// canonical use.
    pub fn players_from(&self, country: &str) -> Result<Vec<Cricketer>> {
        self.query_cricketers(
            &format!("SELECT {CRICKETER_COLUMNS} FROM cricketers WHERE country = ? ORDER BY name"),
            params![country],
        )
    }

    /// Players with a given role
    pub fn players_with_role(&self, role: &str) -> Result<Vec<Cricketer>> {
        self.query_cricketers(
            &format!("SELECT {CRICKETER_COLUMNS} FROM cricketers WHERE role = ? ORDER BY name"),
            params![role],
        )
    }

    /// Players with the role 'Batter'
    pub fn batters(&self) -> Result<Vec<Cricketer>> {
        self.players_with_role("Batter")
    }

    /// Players with the role 'Bowler'
    pub fn bowlers(&self) -> Result<Vec<Cricketer>> {
        self.players_with_role("Bowler")
    }

    /// All players sorted by the descending number of matches played.
    /// Players with no recorded match count sort last.
    pub fn descending_by_matches(&self) -> Result<Vec<Cricketer>> {
        self.query_cricketers(
            &format!(
                "SELECT {CRICKETER_COLUMNS} FROM cricketers
                 ORDER BY matches IS NULL, matches DESC, name"
            ),
            params![],
        )
    }

    fn query_cricketers(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Cricketer>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| Self::row_to_cricketer(row))?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Helper to convert a database row to a Cricketer
    fn row_to_cricketer(row: &Row) -> rusqlite::Result<Cricketer> {
        Ok(Cricketer {
            name: row.get(0)?,
            country: row.get(1)?,
            role: row.get(2)?,
            matches: row.get(3)?,
            innings_batted: row.get(4)?,
            not_out: row.get(5)?,
            runs_scored: row.get(6)?,
            balls_faced: row.get(7)?,
            high_score: row.get(8)?,
            centuries: row.get(9)?,
            half_centuries: row.get(10)?,
            fours_scored: row.get(11)?,
            sixes_scored: row.get(12)?,
            innings_bowled: row.get(13)?,
            balls_bowled: row.get(14)?,
            runs_given: row.get(15)?,
            wickets_taken: row.get(16)?,
        })
    }
}
