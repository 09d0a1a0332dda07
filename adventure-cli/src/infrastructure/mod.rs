pub mod catalog_source;
pub mod error;
pub mod observability;

pub use catalog_source::CatalogSource;
pub use error::{CliError, Result};
pub use observability::LogConfig;
