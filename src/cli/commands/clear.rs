use super::{open_tracker, print_ledger};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::ClearOutcome;
use crate::ui::messages::{ask_confirmation, info, success};

/// Delete every entry after confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut tracker = open_tracker(cfg);

        let outcome = tracker.on_delete_all(|| {
            *yes
                || ask_confirmation(
                    "Are you sure you want to delete all entries? This action cannot be undone.",
                )
        });

        match outcome {
            ClearOutcome::NothingToDelete => info("No data to delete!"),
            ClearOutcome::Cancelled => info("Operation cancelled."),
            ClearOutcome::Cleared => {
                success("All entries have been deleted.");
                print_ledger(&tracker, cfg);
            }
        }
    }

    Ok(())
}
