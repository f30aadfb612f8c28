//! Existence check run before a group is created
//!
//! Advisory only: the check and the later write are not atomic, so two
//! concurrent creators can both pass it for the same name.

use crate::groups::keys;
use crate::services::{IdentifierClassifier, NameCollisionOracle};
use crate::storage::KeyValueStore;
use crate::utils::errors::StoreResult;

pub struct ExistenceChecker<'a> {
    store: &'a dyn KeyValueStore,
    oracle: &'a dyn NameCollisionOracle,
    classifier: &'a dyn IdentifierClassifier,
}

impl<'a> ExistenceChecker<'a> {
    pub fn new(
        store: &'a dyn KeyValueStore,
        oracle: &'a dyn NameCollisionOracle,
        classifier: &'a dyn IdentifierClassifier,
    ) -> Self {
        Self {
            store,
            oracle,
            classifier,
        }
    }

    /// True when the name collides with a user, a group, or a recorded privilege group
    pub async fn exists(&self, name: &str) -> StoreResult<bool> {
        let (in_use, privilege_exists) = tokio::try_join!(
            self.oracle.name_in_use(name),
            self.privilege_group_exists(name),
        )?;
        Ok(in_use || privilege_exists)
    }

    async fn privilege_group_exists(&self, name: &str) -> StoreResult<bool> {
        if !self.classifier.is_privilege_group(name) {
            return Ok(false);
        }
        self.store
            .is_sorted_set_member(keys::GROUPS_BY_CREATETIME, name)
            .await
    }
}
