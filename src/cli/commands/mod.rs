pub mod add;
pub mod clear;
pub mod config;
pub mod del;
pub mod edit;
pub mod list;
pub mod show;
pub mod sort;

use crate::config::Config;
use crate::core::Tracker;
use crate::storage::{FileStore, PersistenceGateway};
use crate::ui::ledger::render_view;
use crate::utils::date;

/// Open the ledger stored at the configured location.
pub(crate) fn open_tracker(cfg: &Config) -> Tracker {
    let backend = FileStore::new(cfg.storage_path());
    Tracker::open(PersistenceGateway::new(
        Box::new(backend),
        cfg.slot.clone(),
        date::today,
    ))
}

/// Re-render the table after a command, as the page did after each click.
pub(crate) fn print_ledger(tracker: &Tracker, cfg: &Config) {
    print!("{}", render_view(&tracker.view(), cfg.show_dates));
}
