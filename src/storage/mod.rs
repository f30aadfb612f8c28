//! Storage module
//!
//! The key-value and sorted-set primitives that group creation writes
//! through. Every write is idempotent: re-adding the same member or field
//! leaves the structure unchanged, which is what makes re-running a failed
//! creation safe.

pub mod memory;
pub mod redis;

pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

use std::collections::HashMap;
use async_trait::async_trait;
use crate::utils::errors::StoreResult;

/// One entry of a bulk sorted-set write
#[derive(Debug, Clone, PartialEq)]
pub struct SortedSetEntry {
    pub key: String,
    pub score: f64,
    pub member: String,
}

impl SortedSetEntry {
    pub fn new(key: impl Into<String>, score: f64, member: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            score,
            member: member.into(),
        }
    }
}

/// Backing store for group records and their indexes
///
/// No transaction discipline is assumed. Writes to disjoint keys are
/// independent and may interleave freely with concurrent callers.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    // ───────────────────────────── Hashes ─────────────────────────────

    /// Merge the given fields into the hash at `key`
    async fn set_object(&self, key: &str, fields: &[(String, String)]) -> StoreResult<()>;

    /// Read the whole hash, `None` when the key does not exist
    async fn get_object(&self, key: &str) -> StoreResult<Option<HashMap<String, String>>>;

    async fn set_object_field(&self, key: &str, field: &str, value: &str) -> StoreResult<()>;

    async fn get_object_field(&self, key: &str, field: &str) -> StoreResult<Option<String>>;

    async fn is_object_field(&self, key: &str, field: &str) -> StoreResult<bool>;

    // ─────────────────────────── Sorted sets ──────────────────────────

    /// Add or re-score `member`
    async fn sorted_set_add(&self, key: &str, score: f64, member: &str) -> StoreResult<()>;

    /// Add several members, possibly across different sets
    async fn sorted_set_add_bulk(&self, entries: &[SortedSetEntry]) -> StoreResult<()>;

    async fn is_sorted_set_member(&self, key: &str, member: &str) -> StoreResult<bool>;

    async fn sorted_set_score(&self, key: &str, member: &str) -> StoreResult<Option<f64>>;

    // ─────────────────────────────── Sets ─────────────────────────────

    async fn set_add(&self, key: &str, member: &str) -> StoreResult<()>;

    async fn is_set_member(&self, key: &str, member: &str) -> StoreResult<bool>;
}
