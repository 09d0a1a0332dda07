use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Image shown when the generated placeholder image fails to load
pub const FALLBACK_IMAGE_URL: &str =
    "https://placehold.co/800x400/ffb74d/ffffff?text=Adventure+Awaits!";

/// Image shown alongside an error message
pub const ERROR_IMAGE_URL: &str =
    "https://placehold.co/800x400/ffb74d/ffffff?text=Something+Went+Wrong";

const IMAGE_BASE_URL: &str = "https://placehold.co/800x400/81c784/ffffff?text=";

/// Activity customized for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActivityResult {
    /// Template name
    pub name: String,

    /// Template description, possibly followed by the time-frame sentence
    pub description: String,

    /// Address with the caller's location filled in
    pub address: String,

    /// Venue website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl ActivityResult {
    /// Placeholder image captioned with the activity name
    pub fn image_url(&self) -> String {
        let caption = self.name.split_whitespace().collect::<Vec<_>>().join(" ");
        format!("{}{}", IMAGE_BASE_URL, urlencoding::encode(&caption))
    }
}
