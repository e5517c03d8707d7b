use clap::Subcommand;
use dayplan_core::{quote_of_day, CoreError, Quote, QuoteRegistry, ScheduleRepository};
use uuid::Uuid;

use super::common::parse_date;

#[derive(Subcommand)]
pub enum QuoteAction {
    /// Show the quote of the day
    Today {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },
    /// List all quotes
    List,
    /// Add a quote
    Add {
        text: String,
        #[arg(long, default_value = "")]
        author: String,
    },
    /// Remove a quote by id
    Remove { id: String },
}

pub fn run(action: QuoteAction) -> Result<(), CoreError> {
    let repo = ScheduleRepository::open()?;
    let mut quotes = QuoteRegistry::load(repo.db())?;
    match action {
        QuoteAction::Today { date } => {
            let date = parse_date(date.as_deref())?;
            match quote_of_day(quotes.all(), date) {
                Some(quote) => println!("\"{}\" -- {}", quote.text, quote.author),
                None => println!("no quotes recorded"),
            }
        }
        QuoteAction::List => {
            for quote in quotes.all() {
                println!("{}  \"{}\" -- {}", quote.id, quote.text, quote.author);
            }
        }
        QuoteAction::Add { text, author } => {
            let quote = Quote::new(text, author);
            let id = quote.id;
            quotes.add(quote);
            quotes.save(repo.db())?;
            println!("quote added: {id}");
        }
        QuoteAction::Remove { id } => {
            let id = Uuid::parse_str(&id)
                .map_err(|e| CoreError::Custom(format!("invalid quote id '{id}': {e}")))?;
            if quotes.remove(id) {
                quotes.save(repo.db())?;
                println!("quote removed");
            } else {
                println!("no quote with id {id}");
            }
        }
    }
    Ok(())
}
