use super::{open_tracker, print_ledger};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Delete one entry. Unknown ids are reported but not an error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut tracker = open_tracker(cfg);

        if tracker.on_delete(*id) {
            success(format!("Entry #{} has been deleted.", id));
        } else {
            info(format!("No entry #{}: nothing deleted.", id));
        }
        print_ledger(&tracker, cfg);
    }

    Ok(())
}
