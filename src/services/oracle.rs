//! Name-collision oracle
//!
//! Answers whether a name is already taken by a user or an ordinary group.
//! Both namespaces are keyed by slug, so `"Book Club"` collides with an
//! existing `"book-club"`.

use std::sync::Arc;
use async_trait::async_trait;
use crate::groups::keys;
use crate::storage::KeyValueStore;
use crate::utils::errors::StoreResult;
use crate::utils::slugify::Slugifier;

/// Checks users and ordinary groups for a name
#[async_trait]
pub trait NameCollisionOracle: Send + Sync {
    async fn name_in_use(&self, name: &str) -> StoreResult<bool>;
}

/// Oracle reading the user and group slug maps from the store
#[derive(Clone)]
pub struct StoreNameOracle {
    store: Arc<dyn KeyValueStore>,
    slugifier: Arc<dyn Slugifier>,
}

impl StoreNameOracle {
    pub fn new(store: Arc<dyn KeyValueStore>, slugifier: Arc<dyn Slugifier>) -> Self {
        Self { store, slugifier }
    }
}

#[async_trait]
impl NameCollisionOracle for StoreNameOracle {
    async fn name_in_use(&self, name: &str) -> StoreResult<bool> {
        let slug = self.slugifier.slugify(name);
        if slug.is_empty() {
            return Ok(false);
        }
        let (user_exists, group_exists) = tokio::try_join!(
            self.store.is_object_field(keys::USER_SLUG_MAP, &slug),
            self.store.is_object_field(keys::GROUP_SLUG_MAP, &slug),
        )?;
        Ok(user_exists || group_exists)
    }
}
