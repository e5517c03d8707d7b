use clap::Subcommand;
use dayplan_core::{gap_slots, CategoryRegistry, CoreError, ScheduleRepository, TimeBlock};
use uuid::Uuid;

use super::common::{parse_date, parse_time, resolve_category};

#[derive(Subcommand)]
pub enum BlockAction {
    /// Add a time block
    Add {
        /// Category name or id
        category: String,
        /// Start time (HH:mm)
        #[arg(long)]
        start: String,
        /// End time (HH:mm, up to 24:00)
        #[arg(long)]
        end: String,
        /// Block title
        #[arg(long, default_value = "")]
        title: String,
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove a time block by id
    Remove {
        id: String,
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },
    /// List a day's blocks
    List {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// List a day's empty slots
    Gaps {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: BlockAction) -> Result<(), CoreError> {
    let mut repo = ScheduleRepository::open()?;
    match action {
        BlockAction::Add {
            category,
            start,
            end,
            title,
            date,
        } => {
            let date = parse_date(date.as_deref())?;
            let categories = CategoryRegistry::load(repo.db())?;
            let category = resolve_category(&categories, &category)?;
            let (start_hour, start_minute) = parse_time(&start)?;
            let (end_hour, end_minute) = parse_time(&end)?;
            let block = TimeBlock::new(
                category.id,
                start_hour,
                start_minute,
                end_hour,
                end_minute,
                title,
            );
            let id = block.id;
            repo.add_time_block(date, block)?;
            println!("block added: {id}");
        }
        BlockAction::Remove { id, date } => {
            let date = parse_date(date.as_deref())?;
            let id = Uuid::parse_str(&id)
                .map_err(|e| CoreError::Custom(format!("invalid block id '{id}': {e}")))?;
            if repo.remove_time_block(date, id)? {
                println!("block removed");
            } else {
                println!("no block with id {id} on {date}");
            }
        }
        BlockAction::List { date, json } => {
            let date = parse_date(date.as_deref())?;
            let blocks = repo.schedule(date).sorted_blocks();
            if json {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
                return Ok(());
            }
            let categories = CategoryRegistry::load(repo.db())?;
            for block in blocks {
                println!(
                    "{}  {}  [{}]  {}",
                    block.id,
                    block.time_range_string(),
                    categories.display_name(block.category_id),
                    block.title,
                );
            }
        }
        BlockAction::Gaps { date, json } => {
            let date = parse_date(date.as_deref())?;
            let gaps = gap_slots(&repo.schedule(date).time_blocks);
            if json {
                println!("{}", serde_json::to_string_pretty(&gaps)?);
                return Ok(());
            }
            for gap in gaps {
                println!(
                    "{:02}:{:02} - {:02}:{:02}  ({}m)",
                    gap.start_minute / 60,
                    gap.start_minute % 60,
                    gap.end_minute / 60,
                    gap.end_minute % 60,
                    gap.duration_minutes(),
                );
            }
        }
    }
    Ok(())
}
