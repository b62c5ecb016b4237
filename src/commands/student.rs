//! Handlers for the `student` subcommands.

use crate::error::{CricketError, Result};
use crate::storage::{CricketDatabase, Student};

pub fn handle_student_add(
    db: &mut CricketDatabase,
    name: &str,
    branch: Option<String>,
    cgpa: f64,
) -> Result<()> {
    let student = Student::new(name, branch, cgpa);
    db.upsert_student(&student)?;
    println!("Added {name} (CGPA {cgpa})");
    Ok(())
}

pub fn handle_student_list(db: &CricketDatabase, as_json: bool) -> Result<()> {
    let students = db.all_students()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&students)?);
        return Ok(());
    }

    if students.is_empty() {
        println!("No students registered");
        return Ok(());
    }

    for student in &students {
        let branch = student.branch.as_deref().unwrap_or("?");
        println!("{} ({branch}): CGPA {:.2}", student.name, student.cgpa);
    }
    Ok(())
}

pub fn handle_student_remove(db: &mut CricketDatabase, name: &str) -> Result<()> {
    if !db.destroy_student(name)? {
        return Err(CricketError::StudentNotFound {
            name: name.to_string(),
        });
    }
    println!("Removed {name}");
    Ok(())
}
