pub mod request;
pub mod selector;

pub use request::SelectionRequest;
pub use selector::{ActivitySelector, SelectionError};
