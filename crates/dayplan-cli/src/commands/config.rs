use clap::Subcommand;
use dayplan_core::{Config, CoreError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Set the category label used by the legacy overtime accounting
    SetOvertimeLabel { label: String },
    /// Set the default workday block (category label and times)
    SetWorkday {
        #[arg(long)]
        label: Option<String>,
        /// Start time (HH:mm)
        #[arg(long)]
        start: Option<String>,
        /// End time (HH:mm)
        #[arg(long)]
        end: Option<String>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), CoreError> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("work_label = {}", config.work_label);
            println!("overtime_label = {}", config.overtime_label);
            println!("default_work_start = {}", config.default_work_start);
            println!("default_work_end = {}", config.default_work_end);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::SetOvertimeLabel { label } => {
            let mut config = Config::load_or_default();
            config.overtime_label = label;
            config.save()?;
            println!("overtime label updated");
        }
        ConfigAction::SetWorkday { label, start, end } => {
            let mut config = Config::load_or_default();
            if let Some(label) = label {
                config.work_label = label;
            }
            if let Some(start) = start {
                super::common::parse_time(&start)?;
                config.default_work_start = start;
            }
            if let Some(end) = end {
                super::common::parse_time(&end)?;
                config.default_work_end = end;
            }
            config.save()?;
            println!("workday defaults updated");
        }
    }
    Ok(())
}
