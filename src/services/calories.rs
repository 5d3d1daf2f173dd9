/// kcal per 100 g used when a label matches nothing in the table
pub const DEFAULT_KCAL_PER_100: u32 = 200;

/// Calories per 100 g by canonical food name.
///
/// Kept as an ordered slice: the substring fallback in [`kcal_per_100`] takes the
/// first matching entry, so declaration order decides ties.
pub const CALORIE_TABLE: &[(&str, u32)] = &[
    ("banana", 89),
    ("apple", 52),
    ("orange", 47),
    ("strawberry", 33),
    ("blueberry", 57),
    ("tomato", 18),
    ("carrot", 41),
    ("broccoli", 34),
    ("cucumber", 16),
    ("potato", 77),
    ("pizza", 266),
    ("cheeseburger", 295),
    ("hamburger", 250),
    ("hotdog", 290),
    ("bagel", 250),
    ("doughnut", 452),
    ("donut", 452),
    ("ice cream", 207),
    ("pretzel", 380),
    ("croissant", 406),
    ("muffin", 296),
    ("burrito", 206),
    ("taco", 226),
    ("sushi", 130),
    ("fried rice", 163),
    ("spaghetti", 158),
    ("french fries", 312),
    ("pancake", 227),
    ("waffle", 291),
    ("fruit", 60),
    ("vegetable", 35),
    ("sandwich", 250),
    ("dessert", 300),
];

/// Common spellings mapped onto table keys
const ALIASES: &[(&str, &str)] = &[
    ("fries", "french fries"),
    ("donut", "doughnut"),
    ("cheese burger", "cheeseburger"),
    ("burger", "hamburger"),
    ("icecream", "ice cream"),
];

/// Lowercase, trim and resolve aliases into a canonical label
pub fn normalize(label: &str) -> String {
    let cleaned = label.trim().to_lowercase();

    ALIASES
        .iter()
        .find(|(alias, _)| *alias == cleaned)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(cleaned)
}

/// Look up kcal per 100 g for a canonical label.
///
/// Exact key first, then the first key that contains or is contained in the
/// label, then [`DEFAULT_KCAL_PER_100`].
pub fn kcal_per_100(canonical: &str) -> u32 {
    if let Some((_, kcal)) = CALORIE_TABLE.iter().find(|(name, _)| *name == canonical) {
        return *kcal;
    }

    CALORIE_TABLE
        .iter()
        .find(|(name, _)| canonical.contains(name) || name.contains(canonical))
        .map(|(name, kcal)| {
            log::debug!("🔎 '{}' matched table entry '{}' by substring", canonical, name);
            *kcal
        })
        .unwrap_or_else(|| {
            log::debug!("❔ No calorie entry for '{}', using default", canonical);
            DEFAULT_KCAL_PER_100
        })
}

/// Scale a per-100 g value to the given portion, rounded to whole kcal
pub fn estimate(kcal_per_100: u32, grams: f64) -> i64 {
    (f64::from(kcal_per_100) * grams / 100.0).round() as i64
}
