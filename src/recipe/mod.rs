//! Recipe Module
//!
//! Fabrication recipes and the read-only store that serves them:
//! - Model: recipes and their step templates
//! - Store: keyed lookup, embedded table, optional table-from-file

mod model;
mod store;

pub use model::{Recipe, StepTemplate};
pub use store::RecipeStore;
