use crate::domain::{ActivityResult, TimeFrame};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Marker in an address template replaced by the caller's location
pub const LOCATION_PLACEHOLDER: &str = "{location}";

/// Reusable description of one activity before location customization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActivityTemplate {
    /// Display name (unique within its category)
    pub name: String,

    /// Display text, contains no placeholders
    pub description: String,

    /// Address with exactly one `{location}` placeholder
    pub address_template: String,

    /// Absolute URL of the venue, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl ActivityTemplate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        address_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            address_template: address_template.into(),
            website: None,
        }
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Number of placeholder tokens in the address template
    pub fn placeholder_count(&self) -> usize {
        self.address_template.matches(LOCATION_PLACEHOLDER).count()
    }

    /// Build the result for `location`, appending the time-frame sentence if any
    pub fn customize(&self, location: &str, time_frame: &TimeFrame) -> ActivityResult {
        let address = self
            .address_template
            .replacen(LOCATION_PLACEHOLDER, location, 1);

        let mut description = self.description.clone();
        if let Some(sentence) = time_frame.sentence() {
            description.push_str(&sentence);
        }

        ActivityResult {
            name: self.name.clone(),
            description,
            address,
            website: self.website.clone(),
        }
    }
}
