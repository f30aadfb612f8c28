//! Utility modules
//!
//! Error handling, logging setup and slug generation shared by the group
//! creation path.

pub mod errors;
pub mod logging;
pub mod slugify;

pub use errors::{GroupError, StoreError, Result, StoreResult};
pub use slugify::{DefaultSlugifier, Slugifier};
