use clap::Subcommand;
use dayplan_core::{calendar, CoreError, ScheduleRepository};

use super::common::parse_date;

#[derive(Subcommand)]
pub enum TrainingAction {
    /// Show a day's training log
    Show {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },
    /// Update a day's training log (omitted fields are left unchanged)
    Set {
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        morning: Option<String>,
        #[arg(long)]
        afternoon: Option<String>,
        /// Running distance in km
        #[arg(long)]
        distance: Option<f64>,
    },
    /// Weekly summary: logs with content and total distance
    Week {
        /// Any date inside the week (YYYY-MM-DD), default today
        date: Option<String>,
    },
}

pub fn run(action: TrainingAction) -> Result<(), CoreError> {
    let repo = ScheduleRepository::open()?;
    match action {
        TrainingAction::Show { date } => {
            let date = parse_date(date.as_deref())?;
            let log = repo.training_log(date);
            if !log.has_content() {
                println!("{date}: no training recorded");
                return Ok(());
            }
            println!("{date}");
            if !log.morning_note.is_empty() {
                println!("  morning:   {}", log.morning_note);
            }
            if !log.afternoon_note.is_empty() {
                println!("  afternoon: {}", log.afternoon_note);
            }
            if log.running_distance_km > 0.0 {
                println!("  distance:  {:.1} km", log.running_distance_km);
            }
        }
        TrainingAction::Set {
            date,
            morning,
            afternoon,
            distance,
        } => {
            let date = parse_date(date.as_deref())?;
            let mut log = repo.training_log(date);
            if let Some(morning) = morning {
                log.morning_note = morning;
            }
            if let Some(afternoon) = afternoon {
                log.afternoon_note = afternoon;
            }
            if let Some(distance) = distance {
                log.running_distance_km = distance;
            }
            repo.update_training_log(&log)?;
            println!("training log updated for {date}");
        }
        TrainingAction::Week { date } => {
            let date = parse_date(date.as_deref())?;
            let week = calendar::week_dates(date);
            let mut total_km = 0.0;
            for &day in &week {
                let log = repo.training_log(day);
                total_km += log.running_distance_km;
                if log.has_content() {
                    println!(
                        "{day}  {:.1} km  {} / {}",
                        log.running_distance_km, log.morning_note, log.afternoon_note
                    );
                }
            }
            println!("total: {total_km:.1} km");
        }
    }
    Ok(())
}
