use crate::activities::builtin;
use crate::domain::{ActivityTemplate, Category};
use schemars::JsonSchema;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Read-only mapping from category to its activity templates
///
/// Every category present holds at least one template and the catalog holds
/// at least one category. Both are checked on construction, so selection
/// never has to deal with an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Catalog {
    categories: BTreeMap<Category, Vec<ActivityTemplate>>,
}

/// Errors raised while building a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one category")]
    Empty,

    #[error("Category {0} has no activities")]
    EmptyCategory(Category),

    #[error("Activity '{name}' in {category} must have exactly one {{location}} placeholder, found {found}")]
    InvalidAddressTemplate {
        category: Category,
        name: String,
        found: usize,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Catalog {
    /// Build a catalog, checking the non-empty and placeholder invariants
    pub fn new(categories: BTreeMap<Category, Vec<ActivityTemplate>>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (category, templates) in &categories {
            if templates.is_empty() {
                return Err(CatalogError::EmptyCategory(*category));
            }
            for template in templates {
                let found = template.placeholder_count();
                if found != 1 {
                    return Err(CatalogError::InvalidAddressTemplate {
                        category: *category,
                        name: template.name.clone(),
                        found,
                    });
                }
            }
        }

        Ok(Self { categories })
    }

    /// Parse a catalog from a JSON object keyed by category label
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let categories: BTreeMap<Category, Vec<ActivityTemplate>> = serde_json::from_str(json)?;
        let catalog = Self::new(categories)?;
        tracing::debug!(
            categories = catalog.category_count(),
            templates = catalog.template_count(),
            "Loaded catalog from JSON"
        );
        Ok(catalog)
    }

    /// Process-wide built-in catalog, created on first use
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Catalog {
            categories: builtin::entries(),
        })
    }

    /// Categories in display order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    pub fn templates(&self, category: Category) -> Option<&[ActivityTemplate]> {
        self.categories.get(&category).map(Vec::as_slice)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains_key(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[ActivityTemplate])> {
        self.categories
            .iter()
            .map(|(category, templates)| (*category, templates.as_slice()))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn template_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
