//! # Adventure Yew
//!
//! Browser front end for the local adventure generator.

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod model;
pub mod service_worker;

// Re-exports for convenience
pub use app::{App, AppProps};
pub use components::{AdventureDialog, AdventureForm, InterestPicker, LoadingButton};
pub use config::AppConfig;
pub use hooks::{use_adventure, AdventureAction, AdventureState, UseAdventureHandle};
pub use model::{AdventureQuery, DialogContent};
