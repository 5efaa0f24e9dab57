//! Game-review data model types, field validation, and YAML seed loading.
//!
//! This crate defines the read views and inputs for the review site without
//! any database dependencies. `gamerev-db` persists and assembles them.

pub mod types;
pub mod validate;
pub mod yaml;

pub use types::*;
pub use validate::ValidationError;
pub use yaml::{load_seed, load_seed_dir, YamlError};
