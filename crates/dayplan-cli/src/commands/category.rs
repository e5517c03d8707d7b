use clap::Subcommand;
use dayplan_core::{CategoryRegistry, CoreError, ScheduleCategory, ScheduleRepository};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List categories in registry order
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a category
    Add {
        name: String,
        #[arg(long, default_value = "#4A90D9")]
        color: String,
    },
    /// Remove a category (existing blocks keep their reference)
    Remove { id: String },
    /// Rename a category
    Rename { id: String, name: String },
    /// Recolor a category
    Recolor { id: String, color: String },
    /// Move a category from one position to another
    Move { from: usize, to: usize },
}

fn parse_id(id: &str) -> Result<Uuid, CoreError> {
    Uuid::parse_str(id).map_err(|e| CoreError::Custom(format!("invalid category id '{id}': {e}")))
}

pub fn run(action: CategoryAction) -> Result<(), CoreError> {
    let repo = ScheduleRepository::open()?;
    let mut categories = CategoryRegistry::load(repo.db())?;
    match action {
        CategoryAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(categories.all())?);
                return Ok(());
            }
            for category in categories.all() {
                println!("{}  {}  {}", category.id, category.name, category.color_hex);
            }
        }
        CategoryAction::Add { name, color } => {
            let category = ScheduleCategory::new(name, color);
            let id = category.id;
            categories.add(category);
            categories.save(repo.db())?;
            println!("category added: {id}");
        }
        CategoryAction::Remove { id } => {
            let id = parse_id(&id)?;
            if categories.remove(id) {
                categories.save(repo.db())?;
                println!("category removed (existing blocks keep the reference)");
            } else {
                println!("no category with id {id}");
            }
        }
        CategoryAction::Rename { id, name } => {
            let id = parse_id(&id)?;
            match categories.get(id).cloned() {
                Some(mut category) => {
                    category.name = name;
                    categories.update(category);
                    categories.save(repo.db())?;
                    println!("category renamed");
                }
                None => println!("no category with id {id}"),
            }
        }
        CategoryAction::Recolor { id, color } => {
            let id = parse_id(&id)?;
            match categories.get(id).cloned() {
                Some(mut category) => {
                    category.color_hex = color;
                    categories.update(category);
                    categories.save(repo.db())?;
                    println!("category recolored");
                }
                None => println!("no category with id {id}"),
            }
        }
        CategoryAction::Move { from, to } => {
            categories.move_item(from, to);
            categories.save(repo.db())?;
            println!("categories reordered");
        }
    }
    Ok(())
}
