/// Word lists the demo catalog draws product names from.
pub const ADJECTIVES: &[&str] = &[
    "Classic", "Compact", "Deluxe", "Handmade", "Minimal", "Rustic", "Sleek", "Vintage",
];

pub const NOUNS: &[&str] = &[
    "Lamp", "Chair", "Kettle", "Backpack", "Speaker", "Notebook", "Planter", "Watch",
];

pub const DEFAULT_CATEGORIES: &[&str] = &["Electronics", "Home", "Outdoors", "Stationery"];

/// Builds a display name from two word-list indices.
pub fn product_name(adjective: usize, noun: usize) -> String {
    format!(
        "{} {}",
        ADJECTIVES[adjective % ADJECTIVES.len()],
        NOUNS[noun % NOUNS.len()]
    )
}

pub fn image_path(index: usize) -> String {
    format!("images/product-{:03}.jpg", index + 1)
}
