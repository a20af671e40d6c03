//! `recipedeck` - An in-memory recipe collection
//!
//! This library provides the core functionality for holding a session-lifetime
//! recipe collection in memory: seeded at startup, grown one append at a time,
//! and observed by readers through snapshots or a live subscription.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod draft;
pub mod error;
pub mod logging;
pub mod recipe;
pub mod route;
pub mod store;
pub mod view;

pub use config::Config;
pub use draft::{DraftError, RecipeDraft};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use recipe::{builtin_recipes, Recipe};
pub use route::Route;
pub use store::{RecipeStore, Snapshot, StoreStats};
pub use view::DetailView;
