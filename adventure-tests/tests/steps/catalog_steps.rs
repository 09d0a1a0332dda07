use adventure_core::{ActivityTemplate, Catalog, Category};
use adventure_tests::AdventureWorld;
use cucumber::given;
use std::collections::BTreeMap;

fn templates(category: Category, count: usize) -> Vec<ActivityTemplate> {
    (1..=count)
        .map(|n| {
            let name = format!("{} Spot {}", category, n);
            ActivityTemplate::new(
                name.clone(),
                format!("Visit {}.", name),
                format!("{}, {{location}}", name),
            )
        })
        .collect()
}

#[given("the built-in catalog")]
async fn builtin_catalog(world: &mut AdventureWorld) {
    world.catalog = Catalog::builtin().clone();
}

#[given(expr = "a catalog with {int} {string} activity and {int} {string} activities")]
async fn custom_catalog(
    world: &mut AdventureWorld,
    first_count: usize,
    first: String,
    second_count: usize,
    second: String,
) {
    let first: Category = first.parse().expect("Unknown category in step");
    let second: Category = second.parse().expect("Unknown category in step");

    let mut categories = BTreeMap::new();
    categories.insert(first, templates(first, first_count));
    categories.insert(second, templates(second, second_count));

    world.catalog = Catalog::new(categories).expect("Invalid test catalog");
}
