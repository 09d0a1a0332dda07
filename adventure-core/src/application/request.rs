use crate::domain::{Category, TimeFrame};

/// Typed selection input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionRequest {
    pub location: String,
    pub time_frame: TimeFrame,
    /// Empty means every category in the catalog
    pub categories: Vec<Category>,
}

impl SelectionRequest {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn with_time_frame(mut self, time_frame: impl Into<TimeFrame>) -> Self {
        self.time_frame = time_frame.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }
}
