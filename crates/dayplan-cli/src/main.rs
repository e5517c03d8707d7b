use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dayplan", version, about = "DayPlan CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Day overview, day event, paste, default workday
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Time block management
    Block {
        #[command(subcommand)]
        action: commands::block::BlockAction,
    },
    /// Todo slots
    Todo {
        #[command(subcommand)]
        action: commands::todo::TodoAction,
    },
    /// Tracking values and tracking item management
    Track {
        #[command(subcommand)]
        action: commands::track::TrackAction,
    },
    /// Category management
    Category {
        #[command(subcommand)]
        action: commands::category::CategoryAction,
    },
    /// Daily/weekly/monthly statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Quotes
    Quote {
        #[command(subcommand)]
        action: commands::quote::QuoteAction,
    },
    /// Training log
    Training {
        #[command(subcommand)]
        action: commands::training::TrainingAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Day { action } => commands::day::run(action),
        Commands::Block { action } => commands::block::run(action),
        Commands::Todo { action } => commands::todo::run(action),
        Commands::Track { action } => commands::track::run(action),
        Commands::Category { action } => commands::category::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Quote { action } => commands::quote::run(action),
        Commands::Training { action } => commands::training::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
