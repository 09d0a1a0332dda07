use adventure_core::{
    ActivityResult, ActivitySelector, ActivityTemplate, Catalog, Category, SelectionError,
};
use cucumber::World;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEED: u64 = 2024;

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct AdventureWorld {
    /// Catalog the selector draws from (the system under test)
    pub catalog: Catalog,

    /// Seeded so scenario outcomes are stable
    pub rng: StdRng,

    /// Every successful result, in order
    pub results: Vec<ActivityResult>,

    /// Error of the last rejected request
    pub last_error: Option<SelectionError>,
}

impl AdventureWorld {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::builtin().clone(),
            rng: StdRng::seed_from_u64(SEED),
            results: Vec::new(),
            last_error: None,
        }
    }

    /// Run one selection and record its outcome
    pub fn select(&mut self, location: &str, time_frame: &str, categories: &[String]) {
        let selector = ActivitySelector::new(&self.catalog);
        match selector.select_with_rng(location, time_frame, categories, &mut self.rng) {
            Ok(result) => self.results.push(result),
            Err(err) => self.last_error = Some(err),
        }
    }

    /// Category and template a result was built from
    pub fn source_of(&self, result: &ActivityResult) -> (Category, &ActivityTemplate) {
        self.catalog
            .iter()
            .flat_map(|(category, templates)| templates.iter().map(move |t| (category, t)))
            .find(|(_, t)| {
                t.name == result.name
                    && t.website == result.website
                    && result.description.starts_with(&t.description)
            })
            .unwrap_or_else(|| panic!("'{}' is not in the catalog", result.name))
    }
}

impl Default for AdventureWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a comma-separated step argument into labels
pub fn labels(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}
