use crate::infrastructure::LogConfig;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "adventure")]
#[command(version, about = "Local Adventure - pick a random family activity near you")]
pub struct Cli {
    /// JSON catalog to use instead of the built-in one
    #[arg(long, global = true, env = "ADVENTURE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Suppress all logs
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Logging setup selected by the global flags
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig::from_verbosity(self.verbose);
        if self.log_json {
            config = config.with_json();
        }
        if self.quiet {
            config = config.without_logs();
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest a random activity
    Suggest {
        /// Location substituted into the address
        #[arg(short = 'l', long)]
        location: String,

        /// Time of day ("any" adds no time note)
        #[arg(short = 't', long, default_value = "any")]
        time: String,

        /// Interest category, repeatable; none means any category
        #[arg(short = 'i', long = "interest")]
        interests: Vec<String>,

        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories and their activities
    Categories {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a JSON schema
    Schema {
        #[arg(value_enum, default_value_t = SchemaTarget::Result)]
        target: SchemaTarget,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaTarget {
    /// Activity result printed by `suggest --json`
    Result,
    /// Catalog accepted by `--catalog`
    Catalog,
}
