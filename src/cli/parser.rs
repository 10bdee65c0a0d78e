use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for TrashReporter
/// CLI client to submit geotagged litter reports and track their status
#[derive(Parser)]
#[command(
    name = "trashreporter",
    version = env!("CARGO_PKG_VERSION"),
    about = "A litter reporting CLI: submit geotagged photo reports and track their status",
    long_about = None
)]
pub struct Cli {
    /// Override local store path (useful for tests or custom profiles)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the bundled endpoint file path
    #[arg(global = true, long = "env-file")]
    pub env_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the local store and configuration
    Init,

    /// Manage the API endpoint (view, override, reset)
    Config {
        /// Print the resolved endpoint
        #[arg(long = "print", help = "Print the resolved endpoint and its source")]
        print_config: bool,

        /// Show only which layer provides the endpoint
        #[arg(long = "source", help = "Show which layer provides the endpoint")]
        source: bool,

        /// Override the API host (stored until --reset)
        #[arg(long = "host", help = "Override the API host")]
        host: Option<String>,

        /// Override the API port; defaults to 2000 when only --host is given
        #[arg(
            long = "port",
            requires = "host",
            help = "Override the API port (default 2000)"
        )]
        port: Option<String>,

        /// Drop the override and return to the bundled endpoint file
        #[arg(
            long = "reset",
            conflicts_with = "host",
            help = "Clear the override and return to the bundled endpoint file"
        )]
        reset: bool,
    },

    /// Log in to a TrashReporter account
    Login {
        #[arg(long)]
        email: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Create a TrashReporter account
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Password (prompted with confirmation when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Drop the stored session
    Logout,

    /// Submit a new litter report
    Report {
        /// Photo of the litter (path to an image file)
        #[arg(long = "image", value_name = "FILE")]
        image: String,

        /// Latitude in decimal degrees
        #[arg(long = "lat", allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long = "lon", allow_hyphen_values = true)]
        lon: f64,

        /// Optional comment (max 500 characters)
        #[arg(long = "comment", default_value = "")]
        comment: String,
    },

    /// List reports submitted by this device
    Records {
        /// List the local journal without contacting the API
        #[arg(long = "local", help = "List the local journal without contacting the API")]
        local: bool,
    },

    /// Show device id, endpoint, session and cooldown state
    Status {
        /// Keep refreshing the countdown once per second until it expires
        #[arg(long = "watch", help = "Keep refreshing the countdown until it expires")]
        watch: bool,

        /// Also ping the API health endpoint
        #[arg(long = "ping", help = "Also ping the API health endpoint")]
        ping: bool,

        /// Clear the submission cooldown
        #[arg(long = "reset-cooldown", help = "Clear the submission cooldown")]
        reset_cooldown: bool,
    },

    /// Export the local report journal
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the local store
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup as .zip
        #[arg(long)]
        compress: bool,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
