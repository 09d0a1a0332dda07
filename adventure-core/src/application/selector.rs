use crate::application::SelectionRequest;
use crate::domain::{ActivityResult, ActivityTemplate, Catalog, Category, TimeFrame, UnknownCategory};
use rand::Rng;

/// Errors returned by [`ActivitySelector`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// A requested label is not a category, or the catalog has no list for it.
    /// The whole request is rejected.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl From<UnknownCategory> for SelectionError {
    fn from(err: UnknownCategory) -> Self {
        SelectionError::UnknownCategory(err.0)
    }
}

/// Picks a random activity from a catalog and customizes it
///
/// Selection happens in two uniform stages: first a category among the
/// candidates, then a template within that category. Every candidate
/// category is equally likely no matter how many templates it holds.
#[derive(Debug, Clone, Copy)]
pub struct ActivitySelector<'a> {
    catalog: &'a Catalog,
}

impl Default for ActivitySelector<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ActivitySelector<'static> {
    /// Selector over the built-in catalog
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<'a> ActivitySelector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Select an activity for raw form input
    ///
    /// `categories` holds category labels; an empty slice means any category.
    pub fn select<S: AsRef<str>>(
        &self,
        location: &str,
        time_frame: &str,
        categories: &[S],
    ) -> Result<ActivityResult, SelectionError> {
        self.select_with_rng(location, time_frame, categories, &mut rand::thread_rng())
    }

    /// Same as [`ActivitySelector::select`] with an explicit random source
    pub fn select_with_rng<S, R>(
        &self,
        location: &str,
        time_frame: &str,
        categories: &[S],
        rng: &mut R,
    ) -> Result<ActivityResult, SelectionError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let categories = categories
            .iter()
            .map(|label| label.as_ref().parse::<Category>())
            .collect::<Result<Vec<_>, _>>()?;

        let request = SelectionRequest {
            location: location.to_string(),
            time_frame: TimeFrame::from(time_frame),
            categories,
        };

        self.select_request_with_rng(&request, rng)
    }

    pub fn select_request(
        &self,
        request: &SelectionRequest,
    ) -> Result<ActivityResult, SelectionError> {
        self.select_request_with_rng(request, &mut rand::thread_rng())
    }

    pub fn select_request_with_rng<R>(
        &self,
        request: &SelectionRequest,
        rng: &mut R,
    ) -> Result<ActivityResult, SelectionError>
    where
        R: Rng + ?Sized,
    {
        let candidates = self.candidates(&request.categories)?;
        let (category, template) = self.pick(&candidates, rng);

        tracing::debug!(
            %category,
            activity = %template.name,
            candidates = candidates.len(),
            time_frame = %request.time_frame,
            "Selected activity"
        );

        Ok(template.customize(&request.location, &request.time_frame))
    }

    /// Resolve the categories to draw from
    ///
    /// An empty request yields every catalog category. Duplicates are
    /// dropped so a repeated label does not gain weight.
    fn candidates(&self, requested: &[Category]) -> Result<Vec<Category>, SelectionError> {
        if requested.is_empty() {
            return Ok(self.catalog.categories().collect());
        }

        let mut candidates = Vec::with_capacity(requested.len());
        for category in requested {
            if !self.catalog.contains(*category) {
                tracing::warn!(%category, "Requested category is not in the catalog");
                return Err(SelectionError::UnknownCategory(category.to_string()));
            }
            if !candidates.contains(category) {
                candidates.push(*category);
            }
        }
        Ok(candidates)
    }

    fn pick<R>(&self, candidates: &[Category], rng: &mut R) -> (Category, &'a ActivityTemplate)
    where
        R: Rng + ?Sized,
    {
        // Catalog construction guarantees candidates and template lists are non-empty
        let category = candidates[rng.gen_range(0..candidates.len())];
        let templates = self.catalog.templates(category).unwrap_or_default();
        let template = &templates[rng.gen_range(0..templates.len())];
        (category, template)
    }
}
