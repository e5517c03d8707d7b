use clap::Subcommand;
use dayplan_core::stats;
use dayplan_core::{
    calendar, CoreError, ScheduleRepository, TrackingItem, TrackingItemRegistry, TrackingValue,
};
use uuid::Uuid;

use super::common::{format_minutes, parse_date, resolve_tracking_item};

#[derive(Subcommand)]
pub enum TrackAction {
    /// Set a day's planned/actual minutes for an item
    Set {
        /// Tracking item name or id
        item: String,
        #[arg(long, default_value_t = 0)]
        planned: u32,
        #[arg(long, default_value_t = 0)]
        actual: u32,
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },
    /// Weekly totals for every tracking item
    Week {
        /// Any date inside the week (YYYY-MM-DD), default today
        date: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Monthly totals for every tracking item
    Month {
        /// Any date inside the month (YYYY-MM-DD), default today
        date: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// List tracking item definitions
    Items,
    /// Add a tracking item definition
    ItemAdd {
        name: String,
        #[arg(long, default_value = "#D0021B")]
        color: String,
        #[arg(long, default_value = "clock")]
        icon: String,
    },
    /// Remove a tracking item definition (history is kept, just hidden)
    ItemRemove { id: String },
    /// Rename a tracking item definition
    ItemRename { id: String, name: String },
    /// Reorder a tracking item definition
    ItemMove { from: usize, to: usize },
}

fn print_totals(totals: &[stats::TrackingTotal], json: bool) -> Result<(), CoreError> {
    if json {
        println!("{}", serde_json::to_string_pretty(totals)?);
        return Ok(());
    }
    for total in totals {
        println!(
            "{}  planned {}  actual {}",
            total.item.name,
            format_minutes(total.planned_minutes),
            format_minutes(total.actual_minutes),
        );
    }
    Ok(())
}

pub fn run(action: TrackAction) -> Result<(), CoreError> {
    let mut repo = ScheduleRepository::open()?;
    match action {
        TrackAction::Set {
            item,
            planned,
            actual,
            date,
        } => {
            let date = parse_date(date.as_deref())?;
            let items = TrackingItemRegistry::load(repo.db())?;
            let item = resolve_tracking_item(&items, &item)?;
            repo.set_tracking_value(date, item.id, TrackingValue::new(planned, actual))?;
            println!("{} set to planned {planned}m / actual {actual}m", item.name);
        }
        TrackAction::Week { date, json } => {
            let date = parse_date(date.as_deref())?;
            let items = TrackingItemRegistry::load(repo.db())?;
            let week = calendar::week_dates(date);
            let totals = stats::tracking_totals(&week, &mut repo, &items);
            print_totals(&totals, json)?;
        }
        TrackAction::Month { date, json } => {
            let date = parse_date(date.as_deref())?;
            let items = TrackingItemRegistry::load(repo.db())?;
            let month = calendar::month_dates(date);
            let totals = stats::tracking_totals(&month, &mut repo, &items);
            print_totals(&totals, json)?;
        }
        TrackAction::Items => {
            let items = TrackingItemRegistry::load(repo.db())?;
            for item in items.all() {
                println!("{}  {}  {}  {}", item.id, item.name, item.color_hex, item.icon);
            }
        }
        TrackAction::ItemAdd { name, color, icon } => {
            if !dayplan_core::model::AVAILABLE_ICONS.contains(&icon.as_str()) {
                return Err(CoreError::Custom(format!(
                    "unknown icon '{icon}' (available: {})",
                    dayplan_core::model::AVAILABLE_ICONS.join(", ")
                )));
            }
            let mut items = TrackingItemRegistry::load(repo.db())?;
            let item = TrackingItem::new(name, color, icon);
            let id = item.id;
            items.add(item);
            items.save(repo.db())?;
            println!("tracking item added: {id}");
        }
        TrackAction::ItemRemove { id } => {
            let id = Uuid::parse_str(&id)
                .map_err(|e| CoreError::Custom(format!("invalid item id '{id}': {e}")))?;
            let mut items = TrackingItemRegistry::load(repo.db())?;
            if items.remove(id) {
                items.save(repo.db())?;
                println!("tracking item removed (historical values kept)");
            } else {
                println!("no tracking item with id {id}");
            }
        }
        TrackAction::ItemRename { id, name } => {
            let id = Uuid::parse_str(&id)
                .map_err(|e| CoreError::Custom(format!("invalid item id '{id}': {e}")))?;
            let mut items = TrackingItemRegistry::load(repo.db())?;
            match items.get(id).cloned() {
                Some(mut item) => {
                    item.name = name;
                    items.update(item);
                    items.save(repo.db())?;
                    println!("tracking item renamed");
                }
                None => println!("no tracking item with id {id}"),
            }
        }
        TrackAction::ItemMove { from, to } => {
            let mut items = TrackingItemRegistry::load(repo.db())?;
            items.move_item(from, to);
            items.save(repo.db())?;
            println!("tracking items reordered");
        }
    }
    Ok(())
}
