use clap::{Parser, Subcommand};

/// Command-line interface definition for pointage
/// CLI application for the QR clock-in/clock-out system, backed by SQLite
#[derive(Parser)]
#[command(
    name = "pointage",
    version = env!("CARGO_PKG_VERSION"),
    about = "QR time-clock CLI: issue day codes, record scans, review punches",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show today's QR payload (day token, direction and scan URL)
    Qr {
        /// Regenerate the payload every minute so the entry/exit
        /// direction flips at the schedule boundary
        #[arg(long = "watch")]
        watch: bool,
    },

    /// Record one scan of the QR code (the clock-in workflow)
    Scan {
        /// Day token from the QR payload (QR-YYYY-MM-DD)
        #[arg(long = "token")]
        token: String,

        /// Punch direction: entree or sortie
        #[arg(long = "type")]
        direction: String,
    },

    /// List stored punches with summary statistics
    Records {
        /// Re-read the store periodically to pick up new punches
        #[arg(long = "watch")]
        watch: bool,

        /// Export the records to a CSV file
        #[arg(long = "export", value_name = "FILE")]
        export: Option<String>,
    },

    /// Manage the database (integrity checks, info)
    Db {
        #[arg(long = "check", help = "Check database and record integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
