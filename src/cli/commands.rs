//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixeldiary")]
#[command(about = "Personal diary kept on your device", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Day to open in the editor (e.g., today, yesterday, last monday, 2025-06-03)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Diagnostic log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Save the entry for a day
    Write {
        /// Day to write (default: today)
        #[arg(value_name = "DATE")]
        date: Option<String>,

        /// Entry text; opens the editor when omitted
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Show the entry for a day
    Show {
        /// Day to show (default: today)
        #[arg(value_name = "DATE")]
        date: Option<String>,
    },

    /// Browse entries, most recent first
    List {
        /// Case-insensitive text to look for in content or date (e.g., "June")
        #[arg(short, long)]
        search: Option<String>,

        /// Earliest date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Latest date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Maximum number of entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show a month with entry markers
    Calendar {
        /// Month as YYYY-MM, or a day to highlight (default: current month)
        #[arg(value_name = "MONTH|DATE")]
        target: Option<String>,
    },

    /// Show writing statistics
    Stats {
        /// Month to count as YYYY-MM (default: current month)
        #[arg(value_name = "MONTH")]
        month: Option<String>,
    },

    /// Delete the entry for a day
    Delete {
        /// Day to delete
        #[arg(value_name = "DATE")]
        date: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
