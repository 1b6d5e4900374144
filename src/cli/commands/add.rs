use super::{open_tracker, print_ledger};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codec::format_minutes;
use crate::errors::AppResult;
use crate::models::RawInput;
use crate::ui::messages::success;

/// Add a new entry from raw form fields.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { form } = cmd {
        let input = RawInput::new(
            form.name.clone().unwrap_or_default(),
            form.plus_hours.clone().unwrap_or_default(),
            form.plus_minutes.clone().unwrap_or_default(),
            form.minus_hours.clone().unwrap_or_default(),
            form.minus_minutes.clone().unwrap_or_default(),
        );

        let mut tracker = open_tracker(cfg);
        let entry = tracker.add(&input);

        success(format!(
            "Added #{} {} ({}).",
            entry.id(),
            entry.name(),
            format_minutes(entry.sum(), true)
        ));
        print_ledger(&tracker, cfg);
    }

    Ok(())
}
