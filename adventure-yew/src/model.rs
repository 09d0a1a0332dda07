use adventure_core::{ActivityResult, ActivitySelector, Category, SelectionError, SelectionRequest};

/// Shown in the dialog whenever generation fails
pub const FALLBACK_ERROR_MESSAGE: &str = "Oops! We couldn't find an adventure right now. Please check your location or try different options!";

/// Options of the time select: (value, label)
pub const TIME_OPTIONS: &[(&str, &str)] = &[
    ("any", "Any time"),
    ("morning", "Morning"),
    ("afternoon", "Afternoon"),
    ("evening", "Evening"),
    ("weekend", "Weekend"),
];

/// Values collected from the adventure form
#[derive(Debug, Clone, PartialEq)]
pub struct AdventureQuery {
    pub location: String,
    pub time: String,
    pub interests: Vec<Category>,
}

impl Default for AdventureQuery {
    fn default() -> Self {
        Self {
            location: String::new(),
            time: TIME_OPTIONS[0].0.to_string(),
            interests: Vec::new(),
        }
    }
}

impl AdventureQuery {
    /// Check or uncheck an interest, keeping display order
    pub fn toggle_interest(&mut self, category: Category) {
        if let Some(index) = self.interests.iter().position(|c| *c == category) {
            self.interests.remove(index);
        } else {
            self.interests.push(category);
            self.interests.sort();
        }
    }

    pub fn to_request(&self) -> SelectionRequest {
        SelectionRequest::new(self.location.clone())
            .with_time_frame(self.time.as_str())
            .with_categories(self.interests.iter().copied())
    }

    pub fn generate(&self) -> Result<ActivityResult, SelectionError> {
        ActivitySelector::builtin().select_request(&self.to_request())
    }
}

/// What the dialog currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum DialogContent {
    Adventure(ActivityResult),
    Error(String),
}
