//! Redis store implementation
//!
//! Maps the store primitives onto Redis hashes, sorted sets and sets through
//! a shared connection manager. Every key is namespaced with the configured
//! prefix.

use std::collections::HashMap;
use async_trait::async_trait;
use ::redis::AsyncCommands;
use tracing::debug;
use crate::config::RedisConfig;
use crate::utils::errors::StoreResult;
use crate::utils::logging::log_store_operation;
use super::{KeyValueStore, SortedSetEntry};

/// Redis-backed store
#[derive(Clone)]
pub struct RedisStore {
    /// Redis connection manager
    connection_manager: ::redis::aio::ConnectionManager,
    /// Redis configuration
    config: RedisConfig,
}

impl RedisStore {
    /// Connect to Redis and create a store
    pub async fn new(config: RedisConfig) -> StoreResult<Self> {
        let client = ::redis::Client::open(config.url.as_str())?;
        let connection_manager = ::redis::aio::ConnectionManager::new(client).await?;

        debug!(url = %config.url, prefix = %config.prefix, "Connected to Redis");
        Ok(Self {
            connection_manager,
            config,
        })
    }

    /// Test Redis connection
    pub async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.connection_manager.clone();
        let _: String = ::redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.config.prefix, key)
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn set_object(&self, key: &str, fields: &[(String, String)]) -> StoreResult<()> {
        if fields.is_empty() {
            return Ok(());
        }
        let full_key = self.full_key(key);
        log_store_operation("set_object", &full_key);
        let mut conn = self.connection_manager.clone();
        let _: () = conn.hset_multiple(&full_key, fields).await?;
        Ok(())
    }

    async fn get_object(&self, key: &str) -> StoreResult<Option<HashMap<String, String>>> {
        let mut conn = self.connection_manager.clone();
        let hash: HashMap<String, String> = conn.hgetall(self.full_key(key)).await?;
        // HGETALL answers an empty map for missing keys
        Ok(if hash.is_empty() { None } else { Some(hash) })
    }

    async fn set_object_field(&self, key: &str, field: &str, value: &str) -> StoreResult<()> {
        let full_key = self.full_key(key);
        log_store_operation("set_object_field", &full_key);
        let mut conn = self.connection_manager.clone();
        let _: () = conn.hset(&full_key, field, value).await?;
        Ok(())
    }

    async fn get_object_field(&self, key: &str, field: &str) -> StoreResult<Option<String>> {
        let mut conn = self.connection_manager.clone();
        let value: Option<String> = conn.hget(self.full_key(key), field).await?;
        Ok(value)
    }

    async fn is_object_field(&self, key: &str, field: &str) -> StoreResult<bool> {
        let mut conn = self.connection_manager.clone();
        let exists: bool = conn.hexists(self.full_key(key), field).await?;
        Ok(exists)
    }

    async fn sorted_set_add(&self, key: &str, score: f64, member: &str) -> StoreResult<()> {
        let full_key = self.full_key(key);
        log_store_operation("sorted_set_add", &full_key);
        let mut conn = self.connection_manager.clone();
        let _: () = conn.zadd(&full_key, member, score).await?;
        Ok(())
    }

    async fn sorted_set_add_bulk(&self, entries: &[SortedSetEntry]) -> StoreResult<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let mut pipe = ::redis::pipe();
        for entry in entries {
            let full_key = self.full_key(&entry.key);
            log_store_operation("sorted_set_add_bulk", &full_key);
            pipe.zadd(full_key, &entry.member, entry.score).ignore();
        }
        let mut conn = self.connection_manager.clone();
        let _: () = pipe.query_async(&mut conn).await?;
        Ok(())
    }

    async fn is_sorted_set_member(&self, key: &str, member: &str) -> StoreResult<bool> {
        Ok(self.sorted_set_score(key, member).await?.is_some())
    }

    async fn sorted_set_score(&self, key: &str, member: &str) -> StoreResult<Option<f64>> {
        let mut conn = self.connection_manager.clone();
        let score: Option<f64> = conn.zscore(self.full_key(key), member).await?;
        Ok(score)
    }

    async fn set_add(&self, key: &str, member: &str) -> StoreResult<()> {
        let full_key = self.full_key(key);
        log_store_operation("set_add", &full_key);
        let mut conn = self.connection_manager.clone();
        let _: () = conn.sadd(&full_key, member).await?;
        Ok(())
    }

    async fn is_set_member(&self, key: &str, member: &str) -> StoreResult<bool> {
        let mut conn = self.connection_manager.clone();
        let is_member: bool = conn.sismember(self.full_key(key), member).await?;
        Ok(is_member)
    }
}
