pub mod activity;
pub mod catalog;
pub mod category;
pub mod template;
pub mod time_frame;

pub use activity::{ActivityResult, ERROR_IMAGE_URL, FALLBACK_IMAGE_URL};
pub use catalog::{Catalog, CatalogError};
pub use category::{Category, UnknownCategory};
pub use template::{ActivityTemplate, LOCATION_PLACEHOLDER};
pub use time_frame::TimeFrame;
