pub mod application;
pub mod cli;
pub mod infrastructure;

pub use cli::{Cli, Commands, SchemaTarget};
pub use infrastructure::{CatalogSource, CliError, LogConfig, Result};
