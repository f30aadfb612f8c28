//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{GroupError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_redis_config(&settings.redis)?;
    validate_logging_config(&settings.logging)?;
    validate_groups_config(&settings.groups)?;

    Ok(())
}

/// Validate Redis configuration
fn validate_redis_config(config: &super::RedisConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(GroupError::Config(
            "Redis URL is required".to_string()
        ));
    }

    let schemes = ["redis://", "rediss://", "redis+unix://", "unix://"];
    if !schemes.iter().any(|scheme| config.url.starts_with(scheme)) {
        return Err(GroupError::Config(
            format!("Invalid Redis URL scheme: {}. Expected one of {:?}", config.url, schemes)
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(GroupError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(GroupError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

/// Validate group naming rules
fn validate_groups_config(config: &super::GroupsConfig) -> Result<()> {
    if config.maximum_group_name_length == 0 {
        return Err(GroupError::Config(
            "Maximum group name length must be greater than 0".to_string()
        ));
    }

    if let Err(e) = regex::Regex::new(&config.privilege_group_pattern) {
        return Err(GroupError::Config(
            format!("Invalid privilege group pattern: {}", e)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_empty_redis_url() {
        let mut settings = Settings::default();
        settings.redis.url.clear();
        assert!(matches!(validate_settings(&settings), Err(GroupError::Config(_))));
    }

    #[test]
    fn test_redis_url_scheme() {
        let mut settings = Settings::default();
        settings.redis.url = "http://localhost:6379".to_string();
        assert!(matches!(validate_settings(&settings), Err(GroupError::Config(_))));

        settings.redis.url = "rediss://cache.internal:6380/2".to_string();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "loud".to_string();
        assert!(matches!(validate_settings(&settings), Err(GroupError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_name_length() {
        let mut settings = Settings::default();
        settings.groups.maximum_group_name_length = 0;
        assert!(matches!(validate_settings(&settings), Err(GroupError::Config(_))));
    }

    #[test]
    fn test_rejects_broken_privilege_pattern() {
        let mut settings = Settings::default();
        settings.groups.privilege_group_pattern = "^cid:(".to_string();
        assert!(matches!(validate_settings(&settings), Err(GroupError::Config(_))));
    }
}
