pub mod entry;
pub mod sort;
pub mod view;

pub use entry::{Entry, EntryId};
pub use sort::{SortColumn, SortDirection, SortState};
pub use view::{ClearOutcome, EditForm, RawInput, View};
