//! Core recipe types for recipedeck.
//!
//! This module defines the fundamental data structure for a single recipe
//! and the builtin seed set the store starts from.

use serde::{Deserialize, Serialize};

/// A single recipe in the collection.
///
/// Recipes are immutable values: once created they are never edited or
/// removed, only appended after. The `id` is assigned by the store and is
/// unique within it for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier, assigned by the store.
    pub id: i64,

    /// Recipe title. Non-empty when the recipe comes through the add flow;
    /// the store itself does not enforce this.
    pub title: String,

    /// Free-form ingredient text.
    pub ingredients: String,

    /// Free-form preparation steps.
    pub steps: String,
}

impl Recipe {
    /// Create a new recipe with the given id and fields.
    #[must_use]
    pub fn new(
        id: i64,
        title: impl Into<String>,
        ingredients: impl Into<String>,
        steps: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            ingredients: ingredients.into(),
            steps: steps.into(),
        }
    }

    /// A one-line summary for list output.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("#{} {}", self.id, self.title)
    }
}

/// The two builtin seed recipes every fresh store starts with.
///
/// Ids are fixed at 1 and 2 so that the first appended recipe is always
/// assigned id 3.
#[must_use]
pub fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            1,
            "Nihari",
            "1 kg beef shank, 1/4 cup ghee, 2 large onions, Ginger-garlic paste, \
             Nihari masala, Flour slurry",
            "1. Brown beef in ghee with onions. 2. Add spices and water, then slow \
             cook for 4-6 hours until tender. 3. Thicken the gravy with a flour \
             slurry. 4. Garnish with ginger, cilantro, and lemon.",
        ),
        Recipe::new(
            2,
            "Chicken Tikka Masala",
            "1 lb chicken, 1 cup yogurt, 1 tbsp ginger-garlic paste, 1 can crushed \
             tomatoes, 1 cup heavy cream, Spices",
            "1. Marinate chicken. 2. Grill chicken. 3. Make the sauce. 4. Combine \
             and simmer.",
        ),
    ]
}
