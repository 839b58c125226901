//! To-do list CLI - Main Entry Point
//!
//! This is the main entry point for the `todo` command-line utility.
//! The actual implementation is in the `todo_cli` library.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use todo_cli::{TodoStore, formatting};

/// Personal to-do list with optional due dates, stored in a local JSON file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task file
    #[arg(short, long, default_value = "todo.json")]
    file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a task, optionally due on a date (YYYY-MM-DD, 'today' or 'tomorrow')
    #[command(visible_alias = "a")]
    Add {
        /// Task description
        description: String,
        /// Due date token
        date: Option<String>,
    },
    /// List all tasks
    #[command(visible_alias = "l")]
    List,
    /// List active tasks due today
    #[command(visible_alias = "td")]
    Today,
    /// List active tasks due tomorrow
    #[command(visible_alias = "tm")]
    Tomorrow,
    /// Mark a task as completed
    #[command(visible_alias = "c")]
    Complete {
        /// Task id
        id: u32,
    },
    /// Delete a task
    #[command(visible_alias = "d")]
    Delete {
        /// Task id
        id: u32,
    },
    /// Shift active tasks due on a date by a signed number of minutes
    #[command(visible_alias = "r")]
    Reschedule {
        /// Date token (YYYY-MM-DD, 'today' or 'tomorrow')
        date: String,
        /// Signed minute offset, e.g. 60 or -30
        minutes: String,
    },
}

fn main() -> Result<()> {
    // No arguments at all: show usage and exit with an error code.
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    let store = TodoStore::new(&args.file);

    match args.command {
        Command::Add { description, date } => {
            let task = store.add(&description, date.as_deref())?;
            let due = task
                .due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "not set".to_string());
            println!(
                "Task added (ID: {}): {} | Due: {}",
                task.id, task.description, due
            );
        }
        Command::List => {
            println!("{}", formatting::format_task_list(&store.list_all()));
        }
        Command::Today => {
            let (date, tasks) = store.show_today();
            println!("{}", formatting::format_due_list(date, &tasks));
        }
        Command::Tomorrow => {
            let (date, tasks) = store.show_tomorrow();
            println!("{}", formatting::format_due_list(date, &tasks));
        }
        Command::Complete { id } => {
            if store.complete(id)? {
                println!("Task {} marked as completed", id);
            } else {
                println!("Task {} not found", id);
            }
        }
        Command::Delete { id } => {
            if store.delete(id)? {
                println!("Task {} deleted", id);
            } else {
                println!("Task {} not found", id);
            }
        }
        Command::Reschedule { date, minutes } => {
            let outcome = store.reschedule(&date, &minutes)?;
            if outcome.updated > 0 {
                println!(
                    "Rescheduled {} task(s) due {}",
                    outcome.updated, outcome.date
                );
            } else {
                println!("No active tasks due {} to reschedule", outcome.date);
            }
        }
    }

    Ok(())
}
