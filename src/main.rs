//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use cricviz::{
    cli::{Commands, Cricviz, StudentCmd},
    commands::{
        ban::handle_ban,
        innings::handle_innings,
        list_players::handle_list_players,
        player_data::handle_player_data,
        seed::handle_seed,
        student::{handle_student_add, handle_student_list, handle_student_remove},
    },
    storage::CricketDatabase,
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = Cricviz::parse();
    let mut db = CricketDatabase::new().context("opening the cricviz database")?;

    match app.command {
        Commands::Seed { verbose } => handle_seed(&mut db, verbose)?,

        Commands::Innings {
            batting,
            bowling,
            verbose,
        } => handle_innings(&mut db, &batting, bowling.as_deref(), verbose)?,

        Commands::Player { name, json } => handle_player_data(&db, &name, json)?,

        Commands::List {
            country,
            role,
            by_matches,
            json,
        } => handle_list_players(&db, country.as_deref(), role.as_deref(), by_matches, json)?,

        Commands::Ban { name } => handle_ban(&mut db, &name)?,

        Commands::Student { cmd } => match cmd {
            StudentCmd::Add { name, branch, cgpa } => {
                handle_student_add(&mut db, &name, branch, cgpa)?
            }
            StudentCmd::List { json } => handle_student_list(&db, json)?,
            StudentCmd::Remove { name } => handle_student_remove(&mut db, &name)?,
        },
    }

    Ok(())
}
