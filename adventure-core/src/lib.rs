//! # Adventure Core
//!
//! Activity catalog and the random selector behind the local adventure
//! generator. The crate has no I/O; front ends pass in form input and render
//! the returned [`ActivityResult`].
//!
//! ```
//! use adventure_core::ActivitySelector;
//!
//! let result = ActivitySelector::builtin()
//!     .select("Springfield", "evening", &["Outdoors"])
//!     .unwrap();
//! assert!(result.address.ends_with(", Springfield"));
//! ```

mod activities;
pub mod application;
pub mod domain;

pub use application::{ActivitySelector, SelectionError, SelectionRequest};
pub use domain::{
    ActivityResult, ActivityTemplate, Catalog, CatalogError, Category, TimeFrame,
    UnknownCategory, ERROR_IMAGE_URL, FALLBACK_IMAGE_URL, LOCATION_PLACEHOLDER,
};
