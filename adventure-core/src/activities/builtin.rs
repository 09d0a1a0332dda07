use crate::domain::{ActivityTemplate, Category};
use std::collections::BTreeMap;

/// (name, description, address template, website)
type Entry = (&'static str, &'static str, &'static str, &'static str);

const OUTDOORS: &[Entry] = &[
    (
        "Local Park Adventure",
        "Explore the beautiful local parks with walking trails, playgrounds, and picnic areas. Perfect for families to enjoy nature and get some fresh air!",
        "Main Street Park, {location}",
        "https://www.nps.gov",
    ),
    (
        "Nature Trail Hike",
        "Discover local wildlife and beautiful scenery on family-friendly hiking trails. Bring your camera to capture amazing nature photos!",
        "Nature Trail Head, {location}",
        "https://www.trails.com",
    ),
    (
        "Community Garden Visit",
        "Learn about plants and gardening while exploring beautiful community gardens. Many gardens offer workshops and seasonal activities!",
        "Community Garden Center, {location}",
        "https://www.communitygarden.org",
    ),
];

const CREATIVE: &[Entry] = &[
    (
        "Local Art Museum",
        "Discover amazing artwork and participate in hands-on art activities designed for families. Many museums offer special kids' programs!",
        "Art Museum, {location}",
        "https://www.artmuseum.org",
    ),
    (
        "Community Arts Center",
        "Join pottery classes, painting workshops, or craft sessions at your local arts center. Perfect for unleashing creativity together!",
        "Community Arts Center, {location}",
        "https://www.artscenter.org",
    ),
    (
        "Local Library Creative Time",
        "Participate in storytelling, craft sessions, and creative workshops at your local library. Libraries often have amazing free programs for families!",
        "Public Library, {location}",
        "https://www.library.org",
    ),
];

const LEARNING: &[Entry] = &[
    (
        "Science Museum Exploration",
        "Experience hands-on science exhibits and interactive displays that make learning fun for the whole family. Perfect for curious minds!",
        "Science Museum, {location}",
        "https://www.sciencemuseum.org",
    ),
    (
        "Historical Society Tour",
        "Learn about local history through guided tours, historical artifacts, and interactive exhibits. Discover the fascinating stories of your community!",
        "Historical Society, {location}",
        "https://www.historicalsociety.org",
    ),
    (
        "Planetarium Show",
        "Explore the wonders of space through immersive planetarium shows and astronomy programs. Learn about stars, planets, and the universe!",
        "Planetarium, {location}",
        "https://www.planetarium.org",
    ),
];

const ACTIVE: &[Entry] = &[
    (
        "Family Bowling",
        "Enjoy strikes and spares at your local bowling alley with family-friendly lanes, bumpers for kids, and fun arcade games!",
        "Bowling Center, {location}",
        "https://www.bowlingcenter.com",
    ),
    (
        "Community Recreation Center",
        "Stay active with swimming, basketball, or fitness classes at your local recreation center. Many centers offer family swim times and activities!",
        "Recreation Center, {location}",
        "https://www.recreationcenter.org",
    ),
    (
        "Mini Golf Adventure",
        "Challenge the family to a fun round of mini golf with creative obstacles and themes. Perfect for all ages and skill levels!",
        "Mini Golf Course, {location}",
        "https://www.minigolf.com",
    ),
];

const FOODIE: &[Entry] = &[
    (
        "Local Farmers Market",
        "Explore fresh local produce, artisanal foods, and family-friendly vendors at your community farmers market. Perfect for food discovery!",
        "Farmers Market, {location}",
        "https://www.farmersmarket.org",
    ),
    (
        "Family Cooking Class",
        "Learn to prepare delicious meals together in a fun, family-oriented cooking class. Create memories while learning new recipes!",
        "Culinary School, {location}",
        "https://www.cookingschool.com",
    ),
    (
        "Local Ice Cream Shop",
        "Treat the family to delicious homemade ice cream with unique flavors and fun toppings. Perfect for a sweet family outing!",
        "Ice Cream Parlor, {location}",
        "https://www.icecreamshop.com",
    ),
];

fn entries_for(category: Category) -> &'static [Entry] {
    match category {
        Category::Outdoors => OUTDOORS,
        Category::Creative => CREATIVE,
        Category::Learning => LEARNING,
        Category::Active => ACTIVE,
        Category::Foodie => FOODIE,
    }
}

/// Built-in templates for every category
pub(crate) fn entries() -> BTreeMap<Category, Vec<ActivityTemplate>> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let templates = entries_for(category)
                .iter()
                .map(|(name, description, address, website)| {
                    ActivityTemplate::new(*name, *description, *address).with_website(*website)
                })
                .collect();
            (category, templates)
        })
        .collect()
}
