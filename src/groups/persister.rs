//! Group persistence
//!
//! Writes the record and its denormalized indexes in a fixed order:
//!
//! 1. creation-order index
//! 2. primary record
//! 3. owners set and member join-time index, with an owner
//! 4. the three visible indexes, for groups that are neither hidden nor system
//! 5. slug map, for non-privilege groups
//!
//! The sequence is not atomic and nothing is rolled back. Each step is a
//! set-style write, so re-running the whole sequence after a partial failure
//! converges on the same state.

use tracing::debug;
use crate::groups::keys;
use crate::models::Group;
use crate::services::IdentifierClassifier;
use crate::storage::{KeyValueStore, SortedSetEntry};
use crate::utils::errors::Result;

pub struct GroupPersister<'a> {
    store: &'a dyn KeyValueStore,
    classifier: &'a dyn IdentifierClassifier,
}

impl<'a> GroupPersister<'a> {
    pub fn new(store: &'a dyn KeyValueStore, classifier: &'a dyn IdentifierClassifier) -> Self {
        Self { store, classifier }
    }

    /// `timestamp` is the owner's join time; index scores use `group.createtime`
    pub async fn persist(&self, group: &Group, owner_uid: Option<&str>, timestamp: i64) -> Result<()> {
        let name = group.name.as_str();
        let createtime = group.createtime as f64;

        self.store
            .sorted_set_add(keys::GROUPS_BY_CREATETIME, createtime, name)
            .await?;
        self.store.set_object(&keys::group(name), &group.to_fields()).await?;

        if let Some(owner_uid) = owner_uid {
            self.store.set_add(&keys::owners(name), owner_uid).await?;
            self.store
                .sorted_set_add(&keys::members(name), timestamp as f64, owner_uid)
                .await?;
        }

        if group.is_visible() {
            self.store
                .sorted_set_add_bulk(&[
                    SortedSetEntry::new(keys::VISIBLE_BY_CREATETIME, createtime, name),
                    SortedSetEntry::new(
                        keys::VISIBLE_BY_MEMBER_COUNT,
                        group.member_count as f64,
                        name,
                    ),
                    SortedSetEntry::new(keys::VISIBLE_BY_NAME, 0.0, keys::visible_name_member(name)),
                ])
                .await?;
        }

        if !self.classifier.is_privilege_group(name) {
            self.store
                .set_object_field(keys::GROUP_SLUG_MAP, &group.slug, name)
                .await?;
        }

        debug!(group = %name, visible = group.is_visible(), owner = ?owner_uid, "Group persisted");
        Ok(())
    }
}
