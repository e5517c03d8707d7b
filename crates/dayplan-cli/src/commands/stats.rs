use clap::Subcommand;
use dayplan_core::stats;
use dayplan_core::{
    calendar, CategoryRegistry, Config, CoreError, ScheduleRepository, TrackingItemRegistry,
};

use super::common::{format_minutes, parse_date};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Single-day category breakdown
    Day {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Weekly category breakdown, tracking totals, and overtime
    Week {
        /// Any date inside the week (YYYY-MM-DD), default today
        date: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Monthly category breakdown, tracking totals, and overtime
    Month {
        /// Any date inside the month (YYYY-MM-DD), default today
        date: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_window(
    dates: &[chrono::NaiveDate],
    repo: &mut ScheduleRepository,
    json: bool,
) -> Result<(), CoreError> {
    let categories = CategoryRegistry::load(repo.db())?;
    let items = TrackingItemRegistry::load(repo.db())?;
    let config = Config::load_or_default();

    repo.prefetch_range(dates);
    let rows = stats::category_stats(dates, repo, &categories);
    let totals = stats::tracking_totals(dates, repo, &items);
    let overtime =
        stats::overtime_minutes_over(dates, repo, &categories, &config.overtime_label);

    if json {
        let payload = serde_json::json!({
            "categories": rows,
            "tracking": totals,
            "overtime_minutes_by_label": overtime,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{} - {}", dates[0], dates[dates.len() - 1]);
    for row in &rows {
        println!(
            "  {:<14} {}",
            row.category.name,
            format_minutes(row.total_minutes)
        );
    }
    for total in &totals {
        println!(
            "  {:<14} planned {}  actual {}",
            total.item.name,
            format_minutes(total.planned_minutes),
            format_minutes(total.actual_minutes),
        );
    }
    println!(
        "  {:<14} {}",
        format!("{} blocks", config.overtime_label),
        format_minutes(overtime)
    );
    Ok(())
}

pub fn run(action: StatsAction) -> Result<(), CoreError> {
    let mut repo = ScheduleRepository::open()?;
    match action {
        StatsAction::Day { date, json } => {
            let date = parse_date(date.as_deref())?;
            let categories = CategoryRegistry::load(repo.db())?;
            let rows = stats::daily_stats(date, &mut repo, &categories);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
                return Ok(());
            }
            println!("{date}");
            for row in &rows {
                println!(
                    "  {:<14} {}",
                    row.category.name,
                    format_minutes(row.total_minutes)
                );
            }
        }
        StatsAction::Week { date, json } => {
            let date = parse_date(date.as_deref())?;
            let week = calendar::week_dates(date);
            print_window(&week, &mut repo, json)?;
        }
        StatsAction::Month { date, json } => {
            let date = parse_date(date.as_deref())?;
            let month = calendar::month_dates(date);
            print_window(&month, &mut repo, json)?;
        }
    }
    Ok(())
}
