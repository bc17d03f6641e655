use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rFlightWatch
#[derive(Parser)]
#[command(
    name = "rflightwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Watch a flight-search page and email price-drop and low-seat alerts",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the directory holding state, logs and reports
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and data directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Run one monitoring pass (fetch, diff, alert, persist)
    Check {
        /// Skip the randomized startup delay
        #[arg(long = "no-delay")]
        no_delay: bool,

        /// Exit with a non-zero status when the run fails
        #[arg(long)]
        strict: bool,
    },

    /// Render price-trend charts and the HTML report from the price log
    Report {
        /// Output directory (default: data directory)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Print the tracked flight state
    State,

    /// Print the general error log
    Errors {
        /// Only the last N lines
        #[arg(long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        last: Option<usize>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
