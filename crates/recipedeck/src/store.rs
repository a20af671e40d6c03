//! The recipe store for recipedeck.
//!
//! This module provides the single source of truth for the recipe
//! collection: an in-memory, session-lifetime list seeded at construction,
//! grown only by appending, and observed through immutable snapshots or a
//! live watch subscription.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tracing::debug;

use crate::config::Config;
use crate::recipe::{builtin_recipes, Recipe};

/// A point-in-time, immutable view of the store's collection.
///
/// Snapshots are cheap to clone and never change after being taken; later
/// appends produce new snapshots instead.
pub type Snapshot = Arc<Vec<Recipe>>;

/// In-memory owner of the recipe collection.
///
/// The store enforces one invariant: ids are unique, with the next id always
/// derived as `1 + max(existing ids)` (or 1 for an empty store). The
/// collection grows monotonically by one recipe per [`RecipeStore::add`]
/// call; nothing is ever edited, removed, or reordered.
///
/// Mutation is guarded by a single lock, so the store can be shared across
/// threads even though the original design only ever wrote from one place.
/// Every successful append publishes a fresh [`Snapshot`] to subscribers,
/// in call order.
#[derive(Debug)]
pub struct RecipeStore {
    /// The authoritative collection, insertion order preserved.
    recipes: Mutex<Vec<Recipe>>,
    /// Publishes a snapshot after every append; also holds the latest
    /// snapshot for lock-free reads.
    tx: watch::Sender<Snapshot>,
}

impl RecipeStore {
    /// Create a store seeded with the two builtin recipes (ids 1 and 2).
    #[must_use]
    pub fn new() -> Self {
        Self::with_recipes(builtin_recipes())
    }

    /// Create an empty store. The first appended recipe gets id 1.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_recipes(Vec::new())
    }

    /// Create a store from an explicit initial collection.
    ///
    /// This supports external seeding, including non-contiguous ids; the
    /// next assigned id is still `1 + max`. The caller must supply recipes
    /// with pairwise distinct ids.
    #[must_use]
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<i64> = recipes.iter().map(|r| r.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "initial recipes must have unique ids"
        );

        let (tx, _rx) = watch::channel(Arc::new(recipes.clone()));
        Self {
            recipes: Mutex::new(recipes),
            tx,
        }
    }

    /// Create a store according to the given configuration.
    ///
    /// Starts from the builtin seeds when `seed.builtin` is enabled (empty
    /// otherwise), then appends each extra configured seed recipe through
    /// the normal add path so ids stay store-assigned.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let store = if config.seed.builtin {
            Self::new()
        } else {
            Self::empty()
        };

        for extra in &config.seed.extra {
            let recipe = store.add(&extra.title, &extra.ingredients, &extra.steps);
            debug!(id = recipe.id, title = %recipe.title, "Seeded extra recipe");
        }

        store
    }

    /// Get the current collection as an immutable snapshot.
    ///
    /// Entries appear in insertion order: seed recipes first, then appended
    /// recipes in append order. Never fails and never blocks.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    /// Append a new recipe and return it.
    ///
    /// The id is assigned as `1 + max(existing ids)`, or 1 for an empty
    /// store. The operation cannot fail: the store performs no validation
    /// and will accept blank fields when called directly. Non-blank checks
    /// belong to the caller (see [`crate::draft::RecipeDraft`]).
    pub fn add(
        &self,
        title: impl Into<String>,
        ingredients: impl Into<String>,
        steps: impl Into<String>,
    ) -> Recipe {
        // An append can't leave the list half-written, so a poisoned lock
        // still holds a valid collection.
        let mut recipes = self
            .recipes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let id = recipes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let recipe = Recipe::new(id, title, ingredients, steps);
        recipes.push(recipe.clone());

        // Publish while still holding the lock so snapshots go out in
        // append order.
        self.tx.send_replace(Arc::new(recipes.clone()));

        debug!(id, title = %recipe.title, "Added recipe");
        recipe
    }

    /// Look up a recipe by id in the current collection.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<Recipe> {
        self.snapshot().iter().find(|r| r.id == id).cloned()
    }

    /// Subscribe to collection changes.
    ///
    /// The receiver starts at the current snapshot and sees a new one after
    /// every append. Snapshots are published in append order; a reader that
    /// falls behind observes only the latest state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    /// Number of recipes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Check whether the store holds no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Get statistics about the store.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        let snapshot = self.snapshot();
        let max_id = snapshot.iter().map(|r| r.id).max().unwrap_or(0);
        StoreStats {
            total_recipes: snapshot.len(),
            next_id: max_id + 1,
        }
    }
}

impl Default for RecipeStore {
    /// Same as [`RecipeStore::new`]: seeded with the builtin recipes.
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of recipes currently held.
    pub total_recipes: usize,
    /// The id the next appended recipe will receive.
    pub next_id: i64,
}
