pub mod categories;
pub mod schema;
pub mod suggest;

pub use categories::list_categories;
pub use schema::print_schema;
pub use suggest::{suggest, SuggestOptions};
