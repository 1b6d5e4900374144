use super::{open_tracker, print_ledger};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let tracker = open_tracker(cfg);
        print_ledger(&tracker, cfg);
    }

    Ok(())
}
