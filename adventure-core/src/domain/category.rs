use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interest category grouping related activity templates
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Category {
    Outdoors,
    Creative,
    Learning,
    Active,
    Foodie,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Outdoors,
        Category::Creative,
        Category::Learning,
        Category::Active,
        Category::Foodie,
    ];

    /// Label shown to users and accepted by [`Category::from_str`]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Outdoors => "Outdoors",
            Category::Creative => "Creative",
            Category::Learning => "Learning",
            Category::Active => "Active",
            Category::Foodie => "Foodie",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Label that does not name any category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_label() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "outdoors".parse::<Category>(),
            Err(UnknownCategory("outdoors".to_string()))
        );
        assert!("Sports".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Category::Foodie.to_string(), "Foodie");
        assert_eq!(format!("{}", Category::Outdoors), "Outdoors");
    }

    #[test]
    fn test_ordering_follows_declaration() {
        let mut shuffled = vec![Category::Foodie, Category::Outdoors, Category::Learning];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Category::Outdoors, Category::Learning, Category::Foodie]
        );
    }
}
