use super::{open_tracker, print_ledger};
use crate::cli::parser::{Commands, FormArgs};
use crate::config::Config;
use crate::core::codec::format_minutes;
use crate::errors::{AppError, AppResult};
use crate::models::{EditForm, RawInput};
use crate::ui::messages::{success, warning};

/// Overlay the flags that were given on top of the prefilled form.
fn merge(form: EditForm, args: &FormArgs) -> RawInput {
    let mut input = RawInput::from(form);
    let pick = |slot: &mut String, arg: &Option<String>| {
        if let Some(v) = arg {
            *slot = v.clone();
        }
    };
    pick(&mut input.name, &args.name);
    pick(&mut input.plus_hours, &args.plus_hours);
    pick(&mut input.plus_minutes, &args.plus_minutes);
    pick(&mut input.minus_hours, &args.minus_hours);
    pick(&mut input.minus_minutes, &args.minus_minutes);
    input
}

/// Open the entry in the edit form, apply the given fields and submit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, form } = cmd {
        let mut tracker = open_tracker(cfg);

        let prefilled = tracker
            .begin_edit(*id)
            .ok_or(AppError::EntryNotFound(*id))?;
        let input = merge(prefilled, form);

        match tracker.on_add(&input) {
            Some(entry) => success(format!(
                "Updated #{} {} ({}).",
                entry.id(),
                entry.name(),
                format_minutes(entry.sum(), true)
            )),
            None => warning(format!("Entry #{} no longer exists.", id)),
        }
        print_ledger(&tracker, cfg);
    }

    Ok(())
}
