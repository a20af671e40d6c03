//! Caller-side validation for the add flow.
//!
//! The store accepts anything; non-blank fields are the add flow's contract.
//! This module gives that contract a type so every consumer applies the same
//! checks before calling [`crate::store::RecipeStore::add`].

use thiserror::Error;

/// Errors produced by draft validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// A required field is empty or whitespace-only.
    #[error("{field} must not be blank")]
    BlankField {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// An unvalidated recipe entered by the user.
///
/// A draft carries the three user-supplied fields; the id is assigned by the
/// store at append time, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    /// Recipe title.
    pub title: String,
    /// Free-form ingredient text.
    pub ingredients: String,
    /// Free-form preparation steps.
    pub steps: String,
}

impl RecipeDraft {
    /// Create a draft from the three user-supplied fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        ingredients: impl Into<String>,
        steps: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            ingredients: ingredients.into(),
            steps: steps.into(),
        }
    }

    /// Check that no field is blank.
    ///
    /// Fields are checked in form order; the first blank one is reported.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::BlankField`] naming the first empty or
    /// whitespace-only field.
    pub fn validate(&self) -> Result<(), DraftError> {
        for (field, value) in [
            ("title", &self.title),
            ("ingredients", &self.ingredients),
            ("steps", &self.steps),
        ] {
            if value.trim().is_empty() {
                return Err(DraftError::BlankField { field });
            }
        }
        Ok(())
    }

    /// Check whether the draft would pass validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft() {
        let draft = RecipeDraft::new("Soup", "Water, Salt", "Boil it");
        assert!(draft.validate().is_ok());
        assert!(draft.is_valid());
    }

    #[test]
    fn test_blank_title() {
        let draft = RecipeDraft::new("", "Water", "Boil");
        assert_eq!(
            draft.validate(),
            Err(DraftError::BlankField { field: "title" })
        );
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let draft = RecipeDraft::new("   ", "Water", "Boil");
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_blank_ingredients() {
        let draft = RecipeDraft::new("Soup", "", "Boil");
        assert_eq!(
            draft.validate(),
            Err(DraftError::BlankField {
                field: "ingredients"
            })
        );
    }

    #[test]
    fn test_blank_steps() {
        let draft = RecipeDraft::new("Soup", "Water", "\t\n");
        assert_eq!(
            draft.validate(),
            Err(DraftError::BlankField { field: "steps" })
        );
    }

    #[test]
    fn test_first_blank_field_reported() {
        let draft = RecipeDraft::new("", "", "");
        assert_eq!(
            draft.validate(),
            Err(DraftError::BlankField { field: "title" })
        );
    }

    #[test]
    fn test_draft_error_display() {
        let err = DraftError::BlankField { field: "title" };
        assert_eq!(err.to_string(), "title must not be blank");
    }

    #[test]
    fn test_draft_clone_eq() {
        let draft = RecipeDraft::new("A", "B", "C");
        assert_eq!(draft, draft.clone());
    }
}
