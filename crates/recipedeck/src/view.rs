//! Consumer-side display states.
//!
//! Resolving a detail route against a snapshot is the consumer's job, and a
//! missing id is an expected display state, not an error.

use crate::recipe::Recipe;

/// The display state of a detail view for a requested recipe id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// The recipe was found in the snapshot.
    Found(Recipe),
    /// No recipe with the requested id exists; shown as "not found".
    NotFound(i64),
}

impl DetailView {
    /// Resolve a requested id against a snapshot of the collection.
    #[must_use]
    pub fn resolve(recipes: &[Recipe], id: i64) -> Self {
        recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .map_or(Self::NotFound(id), Self::Found)
    }

    /// Whether the recipe was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The found recipe, if any.
    #[must_use]
    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            Self::Found(recipe) => Some(recipe),
            Self::NotFound(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecipeStore;

    #[test]
    fn test_resolve_found() {
        let store = RecipeStore::new();
        let snapshot = store.snapshot();

        let view = DetailView::resolve(&snapshot, 1);
        assert!(view.is_found());
        assert_eq!(view.recipe().unwrap().title, "Nihari");
    }

    #[test]
    fn test_resolve_not_found_is_display_state() {
        let store = RecipeStore::new();
        let snapshot = store.snapshot();

        // Missing ids resolve to a display state rather than failing.
        let view = DetailView::resolve(&snapshot, 99);
        assert_eq!(view, DetailView::NotFound(99));
        assert!(!view.is_found());
        assert!(view.recipe().is_none());
    }

    #[test]
    fn test_resolve_on_empty_snapshot() {
        let view = DetailView::resolve(&[], 1);
        assert_eq!(view, DetailView::NotFound(1));
    }

    #[test]
    fn test_resolve_appended_recipe() {
        let store = RecipeStore::new();
        let added = store.add("Soup", "Water", "Boil");

        let view = DetailView::resolve(&store.snapshot(), added.id);
        assert_eq!(view, DetailView::Found(added));
    }
}
