//! Community groups
//!
//! Creation of named member groups for a community platform: name
//! validation across the user, group and privilege namespaces, assembly of
//! the group record, and its materialization into a Redis-style store
//! together with the secondary indexes used for listings and slug lookup.

pub mod config;
pub mod groups;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use groups::GroupService;
pub use models::{CreateGroupRequest, Group};
pub use storage::{KeyValueStore, MemoryStore, RedisStore};
pub use utils::errors::{GroupError, StoreError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
