// Popular-ingredient suggestions offered before any search

/// Ingredients offered as one-tap searches; displayed as written, searched
/// lowercased
pub const POPULAR_INGREDIENTS: &[&str] = &[
    "Chicken", "Pasta", "Rice", "salt", "Fish",
    "Tomato", "Cheese", "Mushroom", "Potato", "Onion",
    "Garlic", "Broccoli", "Spinach", "Carrot", "Chocolate",
];
