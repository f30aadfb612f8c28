//! Community groups
//!
//! Operator entry point: creates a single group against the configured
//! Redis and prints the stored record.
//!
//! The group is described by environment variables:
//! `GROUP_NAME` (required), `GROUP_OWNER_UID`, `GROUP_DESCRIPTION`,
//! `GROUP_HIDDEN`, `GROUP_PRIVATE`.

use std::sync::Arc;
use anyhow::Context;
use tracing::{error, info};

use community_groups::{
    config::Settings,
    models::FlagValue,
    storage::RedisStore,
    utils::logging,
    CreateGroupRequest, GroupService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("loading settings")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", community_groups::info());

    info!("Connecting to Redis...");
    let store = RedisStore::new(settings.redis.clone()).await?;
    store.ping().await?;

    let service = GroupService::new(Arc::new(store), &settings.groups)?;

    let request = request_from_env()?;
    match service.create(request).await {
        Ok(group) => {
            println!("{}", serde_json::to_string_pretty(&group)?);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, severity = %e.severity(), "Group creation failed");
            Err(e.into())
        }
    }
}

fn request_from_env() -> anyhow::Result<CreateGroupRequest> {
    let name = std::env::var("GROUP_NAME").context("GROUP_NAME must be set")?;
    let flag = |var: &str| std::env::var(var).ok().map(FlagValue::Text);

    let mut request = CreateGroupRequest::new(name);
    request.owner_uid = std::env::var("GROUP_OWNER_UID").ok();
    request.description = std::env::var("GROUP_DESCRIPTION").ok();
    request.hidden = flag("GROUP_HIDDEN");
    request.private = flag("GROUP_PRIVATE");
    Ok(request)
}
