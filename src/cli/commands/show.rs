use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::ledger::render_entry;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let tracker = open_tracker(cfg);
        let entry = tracker
            .find_by_id(*id)
            .ok_or(AppError::EntryNotFound(*id))?;
        print!("{}", render_entry(entry));
    }

    Ok(())
}
