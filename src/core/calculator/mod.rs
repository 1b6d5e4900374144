pub mod total;

pub use total::{Totals, total, totals};
