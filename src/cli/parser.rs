use crate::models::SortColumn;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rMinutes
/// CLI ledger of plus/minus minutes per person with a running total
#[derive(Parser)]
#[command(
    name = "rminutes",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small minutes ledger: add people with plus/minus time and keep a running total",
    long_about = None
)]
pub struct Cli {
    /// Override the storage file (useful for tests or a second ledger)
    #[arg(global = true, long = "storage")]
    pub storage: Option<String>,

    /// Override the slot key inside the storage file
    #[arg(global = true, long = "slot")]
    pub slot: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Raw form fields. Values are passed through untouched: non-digits are
/// dropped, blanks count as zero, each field is capped at 9999.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    #[arg(long, short = 'n', allow_hyphen_values = true, help = "Name (blank = auto NameN)")]
    pub name: Option<String>,

    #[arg(long = "plus-hours", allow_hyphen_values = true, help = "Plus: hours")]
    pub plus_hours: Option<String>,

    #[arg(long = "plus-minutes", allow_hyphen_values = true, help = "Plus: minutes")]
    pub plus_minutes: Option<String>,

    #[arg(long = "minus-hours", allow_hyphen_values = true, help = "Minus: hours")]
    pub minus_hours: Option<String>,

    #[arg(long = "minus-minutes", allow_hyphen_values = true, help = "Minus: minutes")]
    pub minus_minutes: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new entry
    Add {
        #[command(flatten)]
        form: FormArgs,
    },

    /// Edit an existing entry (fields left out keep their current value)
    Edit {
        id: u64,

        #[command(flatten)]
        form: FormArgs,
    },

    /// Delete one entry by id
    Del { id: u64 },

    /// Delete all entries and restart numbering
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Sort by a column; repeat to flip the direction
    Sort {
        #[arg(value_enum)]
        column: SortColumn,
    },

    /// Show the ledger with its total
    List,

    /// Show one entry in detail
    Show { id: u64 },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },
}
