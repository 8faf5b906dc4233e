//! Player Roster CLI
//!
//! Thin presentation layer over `roster_core`: a line-oriented form plus the
//! sorted standings table. All state lives in the form session; nothing is
//! persisted between runs.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use roster_core::{DraftField, FormSession, PlayerRoster, SubmitOutcome};

#[derive(Parser)]
#[command(name = "roster_cli")]
#[command(about = "Interactive player roster form", long_about = None)]
struct Cli {
    /// Start with an empty roster instead of the built-in seed records
    #[arg(long, default_value = "false")]
    empty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let roster = if cli.empty { PlayerRoster::new() } else { PlayerRoster::seeded() };
    let mut session = FormSession::new(roster);

    println!("Player roster form. Type 'help' for commands.");
    print_table(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "help" => print_help(),
            "list" => print_table(&session),
            "first" => session.set_field(DraftField::FirstName, rest),
            "last" => session.set_field(DraftField::LastName, rest),
            "score" => session.set_field(DraftField::Score, rest),
            "edit" => match rest.parse::<u32>() {
                Ok(id) if session.roster().get(id).is_some() => {
                    session.edit(id);
                    print_draft(&session);
                }
                Ok(id) => println!("No player with id {}", id),
                Err(_) => println!("Usage: edit <id>"),
            },
            "delete" => match rest.parse::<u32>() {
                Ok(id) => match session.remove(id) {
                    Some(player) => {
                        println!("Deleted {}", player.display_name());
                        print_table(&session);
                    }
                    None => println!("No player with id {}", id),
                },
                Err(_) => println!("Usage: delete <id>"),
            },
            "submit" => {
                match session.submit()? {
                    SubmitOutcome::Created(player) => {
                        println!("Created {} (id {})", player.display_name(), player.id);
                    }
                    SubmitOutcome::Updated(Some(player)) => {
                        println!("Updated {} (id {})", player.display_name(), player.id);
                    }
                    SubmitOutcome::Updated(None) => {
                        println!("That player no longer exists; nothing changed.");
                    }
                    SubmitOutcome::Rejected(report) => {
                        println!("Submission rejected:");
                        for (field, message) in report.errors() {
                            println!("   {}: {}", field, message);
                        }
                        continue;
                    }
                }
                print_table(&session);
            }
            "clear" => {
                session.clear();
                println!("Form cleared.");
            }
            "show" => print_draft(&session),
            "quit" | "exit" => break,
            _ => println!("Unknown command '{}'. Type 'help' for commands.", command),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("   list            show the roster table");
    println!("   first <value>   set the first-name field");
    println!("   last <value>    set the last-name field");
    println!("   score <value>   set the score field");
    println!("   submit          validate and commit the form");
    println!("   clear           reset the form to a new record");
    println!("   edit <id>       load a player into the form");
    println!("   delete <id>     remove a player");
    println!("   show            show the current form fields");
    println!("   quit            exit");
}

fn print_table(session: &FormSession) {
    let players = session.roster().sorted();
    if players.is_empty() {
        println!("(empty roster)");
        return;
    }

    println!("{:<4} {:<24} {:>5}", "Id", "Name", "Score");
    for player in players {
        println!("{:<4} {:<24} {:>5}", player.id, player.display_name(), player.score);
    }
}

fn print_draft(session: &FormSession) {
    let draft = session.draft();
    let target = if draft.is_new() { "new record".to_string() } else { format!("id {}", draft.id) };
    println!("Editing {}:", target);
    println!("   first: {:?}", draft.first_name);
    println!("   last:  {:?}", draft.last_name);
    println!("   score: {:?}", draft.score);
    for (field, message) in session.errors().errors() {
        println!("   {}: {}", field, message);
    }
}
