use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-of-day preference attached to a request
///
/// The string `"any"` is the sentinel for "no preference"; every other
/// string is kept as given and named in the description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeFrame {
    #[default]
    Any,
    Named(String),
}

impl TimeFrame {
    pub const ANY: &'static str = "any";

    pub fn is_any(&self) -> bool {
        matches!(self, TimeFrame::Any)
    }

    /// Sentence appended to the description, `None` for [`TimeFrame::Any`]
    pub fn sentence(&self) -> Option<String> {
        match self {
            TimeFrame::Any => None,
            TimeFrame::Named(name) => {
                Some(format!(" This activity is perfect for a {} outing!", name))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TimeFrame::Any => Self::ANY,
            TimeFrame::Named(name) => name,
        }
    }
}

impl From<&str> for TimeFrame {
    fn from(value: &str) -> Self {
        if value == Self::ANY {
            TimeFrame::Any
        } else {
            TimeFrame::Named(value.to_string())
        }
    }
}

impl From<String> for TimeFrame {
    fn from(value: String) -> Self {
        if value == Self::ANY {
            TimeFrame::Any
        } else {
            TimeFrame::Named(value)
        }
    }
}

impl From<TimeFrame> for String {
    fn from(value: TimeFrame) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
