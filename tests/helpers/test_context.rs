//! Test context for unified test setup

use std::sync::Arc;
use community_groups::config::GroupsConfig;
use community_groups::services::GroupHooks;
use community_groups::storage::MemoryStore;
use community_groups::GroupService;

/// Group service over a fresh in-memory store
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub service: GroupService,
}

impl TestContext {
    pub fn new() -> Self {
        Self::new_with_config(test_groups_config())
    }

    pub fn new_with_config(config: GroupsConfig) -> Self {
        // Initialize logging once
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let store = Arc::new(MemoryStore::new());
        let service = GroupService::new(store.clone(), &config)
            .expect("default group config is valid");

        Self { store, service }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn GroupHooks>) -> Self {
        self.service = self.service.with_hooks(hooks);
        self
    }
}

/// Defaults with a short name limit so length tests stay readable
pub fn test_groups_config() -> GroupsConfig {
    GroupsConfig {
        maximum_group_name_length: 32,
        ..GroupsConfig::default()
    }
}
