use clap::Subcommand;
use dayplan_core::{gap_slots, CategoryRegistry, Config, CoreError, ScheduleRepository};

use super::common::{format_minutes, parse_date};

#[derive(Subcommand)]
pub enum DayAction {
    /// Show a day's schedule
    Show {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
        /// Emit the raw schedule as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the free-text day event
    Event {
        text: String,
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },
    /// Paste one day's schedule into one or more target dates
    Paste {
        /// Source date (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Target dates (YYYY-MM-DD)
        #[arg(required = true)]
        targets: Vec<String>,
    },
    /// Add the configured default workday block
    DefaultWork {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },
}

pub fn run(action: DayAction) -> Result<(), CoreError> {
    let mut repo = ScheduleRepository::open()?;
    match action {
        DayAction::Show { date, json } => {
            let date = parse_date(date.as_deref())?;
            let schedule = repo.schedule(date);
            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
                return Ok(());
            }
            let categories = CategoryRegistry::load(repo.db())?;
            println!("{date}");
            for block in schedule.sorted_blocks() {
                let name = categories.display_name(block.category_id);
                let title = if block.title.is_empty() {
                    String::new()
                } else {
                    format!("  {}", block.title)
                };
                println!("  {}  [{name}]{title}", block.time_range_string());
            }
            for index in 0..schedule.todos.len() {
                let text = schedule.todo_text(index);
                if !text.is_empty() {
                    let mark = if schedule.todo_done(index) { "x" } else { " " };
                    println!("  [{mark}] {text}");
                }
            }
            if !schedule.day_event.is_empty() {
                println!("  event: {}", schedule.day_event);
            }
            println!(
                "  scheduled: {}  free: {}",
                format_minutes(schedule.total_scheduled_minutes()),
                format_minutes(schedule.free_time_minutes()),
            );
            for gap in gap_slots(&schedule.time_blocks) {
                println!(
                    "  gap: {:02}:{:02} - {:02}:{:02}",
                    gap.start_minute / 60,
                    gap.start_minute % 60,
                    gap.end_minute / 60,
                    gap.end_minute % 60,
                );
            }
        }
        DayAction::Event { text, date } => {
            let date = parse_date(date.as_deref())?;
            repo.set_day_event(date, text)?;
            println!("day event updated for {date}");
        }
        DayAction::Paste { from, targets } => {
            let source = parse_date(Some(&from))?;
            let targets = targets
                .iter()
                .map(|t| parse_date(Some(t)))
                .collect::<Result<Vec<_>, _>>()?;
            repo.copy_schedule(source);
            repo.paste_schedule_into(&targets)?;
            println!("pasted {source} into {} date(s)", targets.len());
        }
        DayAction::DefaultWork { date } => {
            let date = parse_date(date.as_deref())?;
            let categories = CategoryRegistry::load(repo.db())?;
            let config = Config::load_or_default();
            if repo.add_default_work_block(date, &categories, &config)? {
                println!("default workday added to {date}");
            } else {
                println!(
                    "no category named '{}'; default workday not added",
                    config.work_label
                );
            }
        }
    }
    Ok(())
}
