//! Student registry queries

use super::{models::Student, schema::CricketDatabase};
use crate::error::Result;
use rusqlite::{params, Row};

impl CricketDatabase {
    /// Insert or replace a student record. The CGPA range is validated
    /// before anything touches the database.
    pub fn upsert_student(&mut self, student: &Student) -> Result<()> {
        student.validate()?;
        self.conn.execute(
            "INSERT OR REPLACE INTO students (name, branch, cgpa)
             VALUES (?, ?, ?)",
            params![student.name, student.branch, student.cgpa],
        )?;
        Ok(())
    }

    /// Look up a student by exact name
    pub fn find_student(&self, name: &str) -> Result<Option<Student>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, branch, cgpa FROM students WHERE name = ?")?;

        let result = stmt.query_row(params![name], |row| Self::row_to_student(row));

        match result {
            Ok(student) => Ok(Some(student)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All students, ordered by name
    pub fn all_students(&self) -> Result<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, branch, cgpa FROM students ORDER BY name")?;
        let rows = stmt.query_map([], |row| Self::row_to_student(row))?;

        let mut students = Vec::new();
        for row in rows {
            students.push(row?);
        }
        Ok(students)
    }

    /// Delete a student record. Returns whether a row was removed.
    pub fn destroy_student(&mut self, name: &str) -> Result<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM students WHERE name = ?", params![name])?;
        Ok(rows_affected > 0)
    }

    fn row_to_student(row: &Row) -> rusqlite::Result<Student> {
        Ok(Student {
            name: row.get(0)?,
            branch: row.get(1)?,
            cgpa: row.get(2)?,
        })
    }
}
