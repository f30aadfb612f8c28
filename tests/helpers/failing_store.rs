//! Store wrapper with fault injection
//!
//! Delegates to a [`MemoryStore`] and fails the n-th write (1-based) while
//! armed. Reads always pass through.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use community_groups::storage::{KeyValueStore, MemoryStore, SortedSetEntry};
use community_groups::utils::errors::{StoreError, StoreResult};

pub struct FailingStore {
    pub inner: Arc<MemoryStore>,
    writes: AtomicUsize,
    fail_at: usize,
    armed: AtomicBool,
}

impl FailingStore {
    pub fn new(inner: Arc<MemoryStore>, fail_at: usize) -> Self {
        Self {
            inner,
            writes: AtomicUsize::new(0),
            fail_at,
            armed: AtomicBool::new(true),
        }
    }

    /// Let every further write through
    pub fn disarm(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn tick(&self) -> StoreResult<()> {
        let n = self.writes.fetch_add(1, Ordering::SeqCst) + 1;
        if self.armed.load(Ordering::SeqCst) && n == self.fail_at {
            return Err(StoreError::Backend(format!("injected failure on write {}", n)));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn set_object(&self, key: &str, fields: &[(String, String)]) -> StoreResult<()> {
        self.tick()?;
        self.inner.set_object(key, fields).await
    }

    async fn get_object(&self, key: &str) -> StoreResult<Option<HashMap<String, String>>> {
        self.inner.get_object(key).await
    }

    async fn set_object_field(&self, key: &str, field: &str, value: &str) -> StoreResult<()> {
        self.tick()?;
        self.inner.set_object_field(key, field, value).await
    }

    async fn get_object_field(&self, key: &str, field: &str) -> StoreResult<Option<String>> {
        self.inner.get_object_field(key, field).await
    }

    async fn is_object_field(&self, key: &str, field: &str) -> StoreResult<bool> {
        self.inner.is_object_field(key, field).await
    }

    async fn sorted_set_add(&self, key: &str, score: f64, member: &str) -> StoreResult<()> {
        self.tick()?;
        self.inner.sorted_set_add(key, score, member).await
    }

    async fn sorted_set_add_bulk(&self, entries: &[SortedSetEntry]) -> StoreResult<()> {
        self.tick()?;
        self.inner.sorted_set_add_bulk(entries).await
    }

    async fn is_sorted_set_member(&self, key: &str, member: &str) -> StoreResult<bool> {
        self.inner.is_sorted_set_member(key, member).await
    }

    async fn sorted_set_score(&self, key: &str, member: &str) -> StoreResult<Option<f64>> {
        self.inner.sorted_set_score(key, member).await
    }

    async fn set_add(&self, key: &str, member: &str) -> StoreResult<()> {
        self.tick()?;
        self.inner.set_add(key, member).await
    }

    async fn is_set_member(&self, key: &str, member: &str) -> StoreResult<bool> {
        self.inner.is_set_member(key, member).await
    }
}
