use adventure_core::{Category, SelectionError};
use adventure_tests::{labels, AdventureWorld};
use cucumber::{then, when};
use std::collections::HashSet;

// ===== When Steps =====

#[when(expr = "I ask for an adventure in {string} at {string} time")]
async fn ask_once(world: &mut AdventureWorld, location: String, time: String) {
    world.select(&location, &time, &[]);
}

#[when(expr = "I ask {int} times for an adventure in {string} at {string} time")]
async fn ask_many(world: &mut AdventureWorld, times: usize, location: String, time: String) {
    for _ in 0..times {
        world.select(&location, &time, &[]);
    }
}

#[when(expr = "I ask for an adventure in {string} at {string} time interested in {string}")]
async fn ask_once_with_interests(
    world: &mut AdventureWorld,
    location: String,
    time: String,
    interests: String,
) {
    world.select(&location, &time, &labels(&interests));
}

#[when(expr = "I ask {int} times for an adventure in {string} at {string} time interested in {string}")]
async fn ask_many_with_interests(
    world: &mut AdventureWorld,
    times: usize,
    location: String,
    time: String,
    interests: String,
) {
    let interests = labels(&interests);
    for _ in 0..times {
        world.select(&location, &time, &interests);
    }
}

// ===== Then Steps =====

#[then(expr = "every address ends with {string}")]
async fn every_address_ends_with(world: &mut AdventureWorld, suffix: String) {
    assert!(!world.results.is_empty(), "No adventures generated");
    for result in &world.results {
        assert!(
            result.address.ends_with(&suffix),
            "'{}' does not end with '{}'",
            result.address,
            suffix
        );
        assert!(!result.address.contains("{location}"));
    }
}

#[then("every address is the template address with the location filled in")]
async fn every_address_filled(world: &mut AdventureWorld) {
    for result in &world.results {
        let (_, template) = world.source_of(result);
        let prefix = template.address_template.replacen("{location}", "", 1);
        assert!(result.address.starts_with(&prefix), "{}", result.address);
    }
}

#[then("every description matches its template exactly")]
async fn every_description_unchanged(world: &mut AdventureWorld) {
    assert!(!world.results.is_empty(), "No adventures generated");
    for result in &world.results {
        let (_, template) = world.source_of(result);
        assert_eq!(result.description, template.description);
    }
}

#[then(expr = "every description ends with {string}")]
async fn every_description_ends_with(world: &mut AdventureWorld, suffix: String) {
    assert!(!world.results.is_empty(), "No adventures generated");
    for result in &world.results {
        let (_, template) = world.source_of(result);
        assert_eq!(result.description, format!("{}{}", template.description, suffix));
    }
}

#[then(expr = "every adventure belongs to one of {string}")]
async fn every_adventure_in_categories(world: &mut AdventureWorld, allowed: String) {
    let allowed: Vec<Category> = labels(&allowed)
        .iter()
        .map(|label| label.parse().expect("Unknown category in step"))
        .collect();

    for result in &world.results {
        let (category, _) = world.source_of(result);
        assert!(
            allowed.contains(&category),
            "'{}' comes from {}",
            result.name,
            category
        );
    }
}

#[then("every activity in the catalog has been suggested")]
async fn every_activity_suggested(world: &mut AdventureWorld) {
    let seen: HashSet<&str> = world.results.iter().map(|r| r.name.as_str()).collect();
    for (category, templates) in world.catalog.iter() {
        for template in templates {
            assert!(
                seen.contains(template.name.as_str()),
                "'{}' from {} was never suggested",
                template.name,
                category
            );
        }
    }
}

#[then(expr = "{string} is chosen between {int} and {int} percent of the time")]
async fn category_share(world: &mut AdventureWorld, label: String, low: u32, high: u32) {
    let category: Category = label.parse().expect("Unknown category in step");
    let hits = world
        .results
        .iter()
        .filter(|result| world.source_of(result).0 == category)
        .count();

    let percent = hits as f64 * 100.0 / world.results.len() as f64;
    assert!(
        percent >= low as f64 && percent <= high as f64,
        "{} chosen {:.1}% of the time",
        category,
        percent
    );
}

#[then(expr = "the request is rejected with unknown category {string}")]
async fn rejected_unknown(world: &mut AdventureWorld, label: String) {
    assert_eq!(world.last_error, Some(SelectionError::UnknownCategory(label)));
    assert!(world.results.is_empty(), "A rejected request produced a result");
}
