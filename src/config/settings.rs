//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub redis: RedisConfig,
    pub logging: LoggingConfig,
    pub groups: GroupsConfig,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedisConfig {
    pub url: String,
    /// Prepended to every key the store touches
    pub prefix: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily-rolling log file, stdout only when unset
    pub file_path: Option<String>,
}

/// Group naming rules
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupsConfig {
    pub maximum_group_name_length: usize,
    pub system_groups: Vec<String>,
    pub privilege_group_pattern: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();
        let settings = config::Config::builder()
            .set_default("redis.url", defaults.redis.url)?
            .set_default("redis.prefix", defaults.redis.prefix)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default(
                "groups.maximum_group_name_length",
                defaults.groups.maximum_group_name_length as i64,
            )?
            .set_default("groups.system_groups", defaults.groups.system_groups)?
            .set_default(
                "groups.privilege_group_pattern",
                defaults.groups.privilege_group_pattern,
            )?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("COMMUNITY_GROUPS").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::GroupError> {
        super::validation::validate_settings(self)
    }
}

impl Default for GroupsConfig {
    fn default() -> Self {
        Self {
            maximum_group_name_length: 255,
            system_groups: [
                "registered-users",
                "verified-users",
                "unverified-users",
                "banned-users",
                "administrators",
                "Global Moderators",
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
            privilege_group_pattern: r"^cid:(?:-?\d+|admin):privileges:[\w\-:]+$".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            redis: RedisConfig {
                url: "redis://localhost:6379".to_string(),
                prefix: String::new(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
            groups: GroupsConfig::default(),
        }
    }
}
