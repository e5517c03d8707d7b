use clap::Subcommand;
use dayplan_core::{CoreError, ScheduleRepository};

use super::common::parse_date;

#[derive(Subcommand)]
pub enum TodoAction {
    /// Set a todo slot (0-based index)
    Set {
        index: usize,
        text: String,
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },
    /// Toggle a todo's completion flag
    Toggle {
        index: usize,
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },
    /// List a day's todo slots
    List {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },
}

pub fn run(action: TodoAction) -> Result<(), CoreError> {
    let mut repo = ScheduleRepository::open()?;
    match action {
        TodoAction::Set { index, text, date } => {
            let date = parse_date(date.as_deref())?;
            repo.set_todo(date, index, text)?;
            println!("todo {index} updated for {date}");
        }
        TodoAction::Toggle { index, date } => {
            let date = parse_date(date.as_deref())?;
            repo.toggle_todo(date, index)?;
            let done = repo.schedule(date).todo_done(index);
            println!("todo {index} {}", if done { "completed" } else { "reopened" });
        }
        TodoAction::List { date } => {
            let date = parse_date(date.as_deref())?;
            let schedule = repo.schedule(date);
            for index in 0..schedule.todos.len() {
                let mark = if schedule.todo_done(index) { "x" } else { " " };
                println!("{index}: [{mark}] {}", schedule.todo_text(index));
            }
        }
    }
    Ok(())
}
