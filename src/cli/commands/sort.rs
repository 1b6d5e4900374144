use super::{open_tracker, print_ledger};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Sort by a column and show the result.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sort { column } = cmd {
        let mut tracker = open_tracker(cfg);
        tracker.on_sort(*column);
        print_ledger(&tracker, cfg);
    }

    Ok(())
}
