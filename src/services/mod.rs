//! Services module
//!
//! Collaborators the group creation path consumes through narrow
//! interfaces, together with their default implementations.

pub mod classifier;
pub mod hooks;
pub mod oracle;

pub use classifier::{IdentifierClassifier, PatternClassifier};
pub use hooks::{GroupHooks, HookRegistry, NoopHooks, ACTION_GROUP_CREATE, FILTER_GROUP_CREATE};
pub use oracle::{NameCollisionOracle, StoreNameOracle};
