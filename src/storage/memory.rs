//! In-process store
//!
//! Implements the full store contract over plain maps behind a tokio
//! `RwLock`. Used for embedding and tests; it also exposes read helpers for
//! inspecting whole indexes, which the trait deliberately does not.

use std::collections::{BTreeSet, HashMap};
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::utils::errors::StoreResult;
use crate::utils::logging::log_store_operation;
use super::{KeyValueStore, SortedSetEntry};

#[derive(Debug, Default)]
struct MemoryState {
    hashes: HashMap<String, HashMap<String, String>>,
    sorted_sets: HashMap<String, HashMap<String, f64>>,
    sets: HashMap<String, BTreeSet<String>>,
}

/// Store backed by process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Members of a sorted set ordered by score, then by member
    pub async fn sorted_set_members(&self, key: &str) -> Vec<(String, f64)> {
        let state = self.state.read().await;
        let mut members: Vec<(String, f64)> = state
            .sorted_sets
            .get(key)
            .map(|set| set.iter().map(|(m, s)| (m.clone(), *s)).collect())
            .unwrap_or_default();
        members.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        members
    }

    /// Members of an unordered set, sorted for stable comparison
    pub async fn set_members(&self, key: &str) -> Vec<String> {
        let state = self.state.read().await;
        state
            .sets
            .get(key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Every key currently holding data, sorted
    pub async fn keys(&self) -> Vec<String> {
        let state = self.state.read().await;
        let mut keys: Vec<String> = state
            .hashes
            .keys()
            .chain(state.sorted_sets.keys())
            .chain(state.sets.keys())
            .cloned()
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn set_object(&self, key: &str, fields: &[(String, String)]) -> StoreResult<()> {
        log_store_operation("set_object", key);
        let mut state = self.state.write().await;
        let hash = state.hashes.entry(key.to_string()).or_default();
        for (field, value) in fields {
            hash.insert(field.clone(), value.clone());
        }
        Ok(())
    }

    async fn get_object(&self, key: &str) -> StoreResult<Option<HashMap<String, String>>> {
        let state = self.state.read().await;
        Ok(state.hashes.get(key).filter(|hash| !hash.is_empty()).cloned())
    }

    async fn set_object_field(&self, key: &str, field: &str, value: &str) -> StoreResult<()> {
        log_store_operation("set_object_field", key);
        let mut state = self.state.write().await;
        state
            .hashes
            .entry(key.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        Ok(())
    }

    async fn get_object_field(&self, key: &str, field: &str) -> StoreResult<Option<String>> {
        let state = self.state.read().await;
        Ok(state.hashes.get(key).and_then(|hash| hash.get(field)).cloned())
    }

    async fn is_object_field(&self, key: &str, field: &str) -> StoreResult<bool> {
        let state = self.state.read().await;
        Ok(state.hashes.get(key).is_some_and(|hash| hash.contains_key(field)))
    }

    async fn sorted_set_add(&self, key: &str, score: f64, member: &str) -> StoreResult<()> {
        log_store_operation("sorted_set_add", key);
        let mut state = self.state.write().await;
        state
            .sorted_sets
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string(), score);
        Ok(())
    }

    async fn sorted_set_add_bulk(&self, entries: &[SortedSetEntry]) -> StoreResult<()> {
        let mut state = self.state.write().await;
        for entry in entries {
            log_store_operation("sorted_set_add_bulk", &entry.key);
            state
                .sorted_sets
                .entry(entry.key.clone())
                .or_default()
                .insert(entry.member.clone(), entry.score);
        }
        Ok(())
    }

    async fn is_sorted_set_member(&self, key: &str, member: &str) -> StoreResult<bool> {
        Ok(self.sorted_set_score(key, member).await?.is_some())
    }

    async fn sorted_set_score(&self, key: &str, member: &str) -> StoreResult<Option<f64>> {
        let state = self.state.read().await;
        Ok(state.sorted_sets.get(key).and_then(|set| set.get(member)).copied())
    }

    async fn set_add(&self, key: &str, member: &str) -> StoreResult<()> {
        log_store_operation("set_add", key);
        let mut state = self.state.write().await;
        state
            .sets
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string());
        Ok(())
    }

    async fn is_set_member(&self, key: &str, member: &str) -> StoreResult<bool> {
        let state = self.state.read().await;
        Ok(state.sets.get(key).is_some_and(|set| set.contains(member)))
    }
}
