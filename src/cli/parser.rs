use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for employes-demo
/// Builds a demonstration SQLite database of employee timesheets
#[derive(Parser)]
#[command(
    name = "employes-demo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create a demonstration SQLite database of employee timesheets and print its contents",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Defaults to `create` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recreate the database, seed it and print data and structure
    Create,

    /// Print the rows of an existing database
    Show,

    /// Print the column layout of an existing database
    Schema,

    /// Export the employee table
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Inspect the database (statistics, integrity checks)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
