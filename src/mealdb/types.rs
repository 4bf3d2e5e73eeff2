//! Wire types for TheMealDB JSON API
//!
//! Every endpoint answers with the same envelope: a `meals` array, or null
//! when nothing matched. Recipes carry a handful of stable display fields
//! plus numbered ingredient/measure slots (strIngredient1.., strMeasure1..)
//! whose values may be null or blank.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Matches the id segment of the common YouTube URL shapes
/// (watch?v=, youtu.be/, embed/, v/, u/<x>/)
static YOUTUBE_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*$")
        .expect("YouTube id pattern is valid")
});

/// A recipe as returned by TheMealDB.
///
/// The filter endpoint returns a reduced shape (id, name, thumbnail), so all
/// other fields are optional. Fields this app does not interpret end up in
/// `extra` untouched, alongside the numbered ingredient/measure slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Option<String>>,
}

impl Meal {
    /// Ingredient/measure pairs in slot order, skipping blank slots.
    ///
    /// The map iterates keys lexicographically (strIngredient10 before
    /// strIngredient2), so pairs are re-sorted by their numeric suffix.
    /// A missing or blank measure comes back as an empty string.
    pub fn ingredient_pairs(&self) -> Vec<(String, String)> {
        let mut numbered: Vec<(u32, String)> = self
            .extra
            .iter()
            .filter_map(|(key, value)| {
                let n = key.strip_prefix("strIngredient")?.parse::<u32>().ok()?;
                let ingredient = value.as_deref()?.trim();
                if ingredient.is_empty() {
                    None
                } else {
                    Some((n, ingredient.to_string()))
                }
            })
            .collect();
        numbered.sort_by_key(|(n, _)| *n);

        numbered
            .into_iter()
            .map(|(n, ingredient)| {
                let measure = self
                    .extra
                    .get(&format!("strMeasure{}", n))
                    .and_then(|v| v.as_deref())
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_string();
                (ingredient, measure)
            })
            .collect()
    }

    /// Extract the 11-character video id from the recipe's YouTube URL.
    ///
    /// Returns None when there is no URL, the URL has an unknown shape, or
    /// the captured id is not exactly 11 characters.
    pub fn youtube_video_id(&self) -> Option<&str> {
        let url = self.youtube.as_deref()?;
        let id = YOUTUBE_ID_RE.captures(url)?.get(2)?.as_str();
        if id.len() == 11 {
            Some(id)
        } else {
            None
        }
    }
}

/// Response envelope shared by every endpoint
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

impl MealsEnvelope {
    /// The meals array, with null collapsing to empty
    pub fn into_meals(self) -> Vec<Meal> {
        self.meals.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal_with_extra(pairs: &[(&str, Option<&str>)]) -> Meal {
        Meal {
            id: "52772".to_string(),
            name: "Teriyaki Chicken Casserole".to_string(),
            category: Some("Chicken".to_string()),
            area: Some("Japanese".to_string()),
            instructions: None,
            thumbnail: None,
            youtube: None,
            extra: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.map(|s| s.to_string())))
                .collect(),
        }
    }

    #[test]
    fn test_deserialize_full_meal() {
        let json = r#"{
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strInstructions": "Preheat oven to 350 F.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
            "strIngredient1": "soy sauce",
            "strIngredient2": "water",
            "strIngredient3": null,
            "strMeasure1": "3/4 cup",
            "strMeasure2": "1/2 cup",
            "strMeasure3": null,
            "strSource": null
        }"#;

        let meal: Meal = serde_json::from_str(json).unwrap();
        assert_eq!(meal.id, "52772");
        assert_eq!(meal.name, "Teriyaki Chicken Casserole");
        assert_eq!(meal.category.as_deref(), Some("Chicken"));
        assert_eq!(meal.area.as_deref(), Some("Japanese"));
        assert_eq!(
            meal.extra.get("strIngredient1"),
            Some(&Some("soy sauce".to_string()))
        );
        assert_eq!(meal.extra.get("strIngredient3"), Some(&None));
    }

    #[test]
    fn test_deserialize_filter_shape() {
        // The filter endpoint sends only id, name, and thumbnail
        let json = r#"{
            "strMeal": "Brown Stew Chicken",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/sypxpx1515365095.jpg",
            "idMeal": "52940"
        }"#;

        let meal: Meal = serde_json::from_str(json).unwrap();
        assert_eq!(meal.id, "52940");
        assert_eq!(meal.category, None);
        assert_eq!(meal.youtube, None);
        assert!(meal.extra.is_empty());
    }

    #[test]
    fn test_favorites_round_trip() {
        let json = r#"{
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup"
        }"#;
        let meal: Meal = serde_json::from_str(json).unwrap();

        let stored = serde_json::to_string(&vec![meal.clone()]).unwrap();
        let reloaded: Vec<Meal> = serde_json::from_str(&stored).unwrap();
        assert_eq!(reloaded, vec![meal]);
    }

    #[test]
    fn test_ingredient_pairs_follow_slot_numbers() {
        // Ten or more slots force the lexicographic/numeric ordering apart
        let meal = meal_with_extra(&[
            ("strIngredient1", Some("soy sauce")),
            ("strIngredient2", Some("water")),
            ("strIngredient10", Some("sesame seeds")),
            ("strIngredient11", Some("rice")),
            ("strMeasure1", Some("3/4 cup")),
            ("strMeasure2", Some("1/2 cup")),
            ("strMeasure10", Some("2 tbsp")),
            ("strMeasure11", Some("3 cups")),
        ]);

        let pairs = meal.ingredient_pairs();
        assert_eq!(
            pairs,
            vec![
                ("soy sauce".to_string(), "3/4 cup".to_string()),
                ("water".to_string(), "1/2 cup".to_string()),
                ("sesame seeds".to_string(), "2 tbsp".to_string()),
                ("rice".to_string(), "3 cups".to_string()),
            ]
        );
    }

    #[test]
    fn test_ingredient_pairs_skip_blank_slots() {
        let meal = meal_with_extra(&[
            ("strIngredient1", Some("chicken")),
            ("strIngredient2", Some("")),
            ("strIngredient3", None),
            ("strIngredient4", Some("  ")),
            ("strIngredient5", Some("garlic")),
            ("strMeasure1", Some("1 whole")),
            ("strMeasure5", None),
        ]);

        let pairs = meal.ingredient_pairs();
        assert_eq!(
            pairs,
            vec![
                ("chicken".to_string(), "1 whole".to_string()),
                ("garlic".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_youtube_video_id_url_shapes() {
        let mut meal = meal_with_extra(&[]);

        meal.youtube = Some("https://www.youtube.com/watch?v=4aZr5hZXP_s".to_string());
        assert_eq!(meal.youtube_video_id(), Some("4aZr5hZXP_s"));

        meal.youtube = Some("https://youtu.be/4aZr5hZXP_s".to_string());
        assert_eq!(meal.youtube_video_id(), Some("4aZr5hZXP_s"));

        meal.youtube = Some("https://www.youtube.com/embed/4aZr5hZXP_s".to_string());
        assert_eq!(meal.youtube_video_id(), Some("4aZr5hZXP_s"));

        meal.youtube = Some("https://www.youtube.com/watch?v=4aZr5hZXP_s&t=42".to_string());
        assert_eq!(meal.youtube_video_id(), Some("4aZr5hZXP_s"));
    }

    #[test]
    fn test_youtube_video_id_rejects_bad_urls() {
        let mut meal = meal_with_extra(&[]);

        assert_eq!(meal.youtube_video_id(), None);

        meal.youtube = Some("".to_string());
        assert_eq!(meal.youtube_video_id(), None);

        meal.youtube = Some("https://example.com/video.mp4".to_string());
        assert_eq!(meal.youtube_video_id(), None);

        // Captured id must be exactly 11 characters
        meal.youtube = Some("https://www.youtube.com/watch?v=short".to_string());
        assert_eq!(meal.youtube_video_id(), None);
    }

    #[test]
    fn test_envelope_null_meals_is_empty() {
        let envelope: MealsEnvelope = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(envelope.into_meals().is_empty());

        // An absent meals key behaves the same
        let envelope: MealsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.into_meals().is_empty());
    }
}
