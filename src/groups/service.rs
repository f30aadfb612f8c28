//! Group creation service
//!
//! Entry point for creating groups. A call runs, in order: name validation,
//! the existence check, the pre-create filter hook, persistence, a read-back
//! of the primary record and the post-create action hook. Any failure aborts
//! the remaining steps and is returned as-is.
//!
//! Uniqueness under concurrent creators is not guaranteed here. The
//! existence check is a fast-fail and the primary record write is
//! last-writer-wins.

use std::sync::Arc;
use chrono::Utc;
use tracing::{debug, info, warn};
use crate::config::GroupsConfig;
use crate::groups::builder::{build_group, DerivedFlags, RecordInput};
use crate::groups::existence::ExistenceChecker;
use crate::groups::keys;
use crate::groups::persister::GroupPersister;
use crate::groups::validation::NameValidator;
use crate::models::{CreateGroupPayload, CreateGroupRequest, Group};
use crate::services::{
    GroupHooks, IdentifierClassifier, NameCollisionOracle, NoopHooks, PatternClassifier,
    StoreNameOracle, ACTION_GROUP_CREATE,
};
use crate::storage::KeyValueStore;
use crate::utils::errors::{GroupError, Result};
use crate::utils::logging::log_group_event;
use crate::utils::slugify::{DefaultSlugifier, Slugifier};

/// Creates groups and reads them back
#[derive(Clone)]
pub struct GroupService {
    store: Arc<dyn KeyValueStore>,
    classifier: Arc<dyn IdentifierClassifier>,
    slugifier: Arc<dyn Slugifier>,
    oracle: Arc<dyn NameCollisionOracle>,
    hooks: Arc<dyn GroupHooks>,
    maximum_name_length: usize,
}

impl GroupService {
    /// Service with the default collaborators for the given settings
    pub fn new(store: Arc<dyn KeyValueStore>, config: &GroupsConfig) -> Result<Self> {
        let classifier = Arc::new(PatternClassifier::from_config(config)?);
        let slugifier: Arc<dyn Slugifier> = Arc::new(DefaultSlugifier);
        let oracle = Arc::new(StoreNameOracle::new(store.clone(), slugifier.clone()));

        Ok(Self {
            store,
            classifier,
            slugifier,
            oracle,
            hooks: Arc::new(NoopHooks),
            maximum_name_length: config.maximum_group_name_length,
        })
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn GroupHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_oracle(mut self, oracle: Arc<dyn NameCollisionOracle>) -> Self {
        self.oracle = oracle;
        self
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn IdentifierClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_slugifier(mut self, slugifier: Arc<dyn Slugifier>) -> Self {
        self.slugifier = slugifier;
        self
    }

    /// Create a group and return the record as stored
    pub async fn create(&self, request: CreateGroupRequest) -> Result<Group> {
        let timestamp = request
            .timestamp
            .filter(|ts| *ts != 0)
            .unwrap_or_else(|| Utc::now().timestamp_millis());

        let name = match self.validator().validate_value(&request.name) {
            Ok(name) => name.to_string(),
            Err(e) => {
                debug!(name = ?request.name, error = %e, "Group name rejected");
                return Err(e);
            }
        };

        if self.existence().exists(&name).await? {
            warn!(group = %name, "Group already exists");
            return Err(GroupError::GroupAlreadyExists { name });
        }

        let flags = DerivedFlags::derive(&request, &name, self.classifier.as_ref());
        let group = build_group(
            RecordInput {
                name: &name,
                request: &request,
                timestamp,
                flags,
            },
            self.slugifier.as_ref(),
        );

        let CreateGroupPayload { group, data } = self
            .hooks
            .filter_create(CreateGroupPayload {
                group,
                data: request,
            })
            .await?;

        GroupPersister::new(self.store.as_ref(), self.classifier.as_ref())
            .persist(&group, data.owner(), timestamp)
            .await?;

        let stored = self
            .get_group_data(&group.name)
            .await?
            .ok_or_else(|| GroupError::GroupNotFound {
                name: group.name.clone(),
            })?;

        self.hooks.action_create(&stored).await;

        log_group_event(&stored.name, ACTION_GROUP_CREATE, data.owner());
        info!(
            group = %stored.name,
            slug = %stored.slug,
            member_count = stored.member_count,
            "Group created"
        );
        Ok(stored)
    }

    /// Read a group's primary record
    pub async fn get_group_data(&self, name: &str) -> Result<Option<Group>> {
        let key = keys::group(name);
        match self.store.get_object(&key).await? {
            Some(fields) => Ok(Some(Group::from_fields(&key, &fields)?)),
            None => Ok(None),
        }
    }

    /// Whether a group of this name is in the creation-order index
    pub async fn exists(&self, name: &str) -> Result<bool> {
        Ok(self
            .store
            .is_sorted_set_member(keys::GROUPS_BY_CREATETIME, name)
            .await?)
    }

    /// Resolve a slug to the group name it belongs to
    pub async fn get_group_name_by_slug(&self, slug: &str) -> Result<Option<String>> {
        Ok(self.store.get_object_field(keys::GROUP_SLUG_MAP, slug).await?)
    }

    pub fn is_privilege_group(&self, name: &str) -> bool {
        self.classifier.is_privilege_group(name)
    }

    pub fn system_groups(&self) -> &[String] {
        self.classifier.system_groups()
    }

    /// Check a name without touching the store
    pub fn validate_group_name(&self, name: &str) -> Result<()> {
        self.validator().validate(name)
    }

    fn validator(&self) -> NameValidator<'_> {
        NameValidator::new(
            self.classifier.as_ref(),
            self.slugifier.as_ref(),
            self.maximum_name_length,
        )
    }

    fn existence(&self) -> ExistenceChecker<'_> {
        ExistenceChecker::new(
            self.store.as_ref(),
            self.oracle.as_ref(),
            self.classifier.as_ref(),
        )
    }
}

impl std::fmt::Debug for GroupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupService")
            .field("maximum_name_length", &self.maximum_name_length)
            .finish_non_exhaustive()
    }
}
