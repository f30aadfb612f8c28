//! Extension points around group creation
//!
//! `filter_create` runs before anything is written and may rewrite the
//! candidate record. `action_create` runs after the read-back and cannot
//! affect the outcome.

use async_trait::async_trait;
use tracing::debug;
use crate::models::{CreateGroupPayload, Group};
use crate::utils::errors::{GroupError, Result};

/// Event name of the pre-create filter
pub const FILTER_GROUP_CREATE: &str = "filter:group.create";
/// Event name of the post-create action
pub const ACTION_GROUP_CREATE: &str = "action:group.create";

/// Dispatcher for group creation hooks
#[async_trait]
pub trait GroupHooks: Send + Sync {
    /// Transform the candidate before persistence, failures abort creation
    async fn filter_create(&self, payload: CreateGroupPayload) -> Result<CreateGroupPayload>;

    /// Notify listeners about the stored record
    async fn action_create(&self, group: &Group);
}

/// Hooks that do nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

#[async_trait]
impl GroupHooks for NoopHooks {
    async fn filter_create(&self, payload: CreateGroupPayload) -> Result<CreateGroupPayload> {
        Ok(payload)
    }

    async fn action_create(&self, _group: &Group) {}
}

type FilterFn = Box<dyn Fn(CreateGroupPayload) -> std::result::Result<CreateGroupPayload, String> + Send + Sync>;
type ActionFn = Box<dyn Fn(&Group) + Send + Sync>;

/// Ordered list of in-process hook listeners
///
/// Filters run in registration order, each receiving the previous output.
#[derive(Default)]
pub struct HookRegistry {
    filters: Vec<FilterFn>,
    actions: Vec<ActionFn>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_filter_create<F>(mut self, filter: F) -> Self
    where
        F: Fn(CreateGroupPayload) -> std::result::Result<CreateGroupPayload, String> + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn on_action_create<F>(mut self, action: F) -> Self
    where
        F: Fn(&Group) + Send + Sync + 'static,
    {
        self.actions.push(Box::new(action));
        self
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("filters", &self.filters.len())
            .field("actions", &self.actions.len())
            .finish()
    }
}

#[async_trait]
impl GroupHooks for HookRegistry {
    async fn filter_create(&self, payload: CreateGroupPayload) -> Result<CreateGroupPayload> {
        let mut payload = payload;
        for filter in &self.filters {
            payload = filter(payload)
                .map_err(|e| GroupError::Hook(format!("{}: {}", FILTER_GROUP_CREATE, e)))?;
        }
        Ok(payload)
    }

    async fn action_create(&self, group: &Group) {
        debug!(
            event = ACTION_GROUP_CREATE,
            group = %group.name,
            listeners = self.actions.len(),
            "Dispatching hook"
        );
        for action in &self.actions {
            action(group);
        }
    }
}
