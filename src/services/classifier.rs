//! Identifier classification
//!
//! Decides which names encode privilege grants and which are reserved for
//! the platform. Privilege groups bypass the length limit and the colon
//! rule, and never enter the slug map.

use regex::Regex;
use crate::config::GroupsConfig;
use crate::utils::errors::{GroupError, Result};

/// Classifies group identifiers
pub trait IdentifierClassifier: Send + Sync {
    fn is_privilege_group(&self, name: &str) -> bool;

    fn system_groups(&self) -> &[String];

    fn is_system_group(&self, name: &str) -> bool {
        self.system_groups().iter().any(|group| group == name)
    }
}

/// Classifier driven by a privilege-name pattern and a reserved list
#[derive(Debug, Clone)]
pub struct PatternClassifier {
    privilege_pattern: Regex,
    system_groups: Vec<String>,
}

impl PatternClassifier {
    pub fn new(privilege_pattern: &str, system_groups: Vec<String>) -> Result<Self> {
        let privilege_pattern = Regex::new(privilege_pattern)
            .map_err(|e| GroupError::Config(format!("Invalid privilege group pattern: {}", e)))?;
        Ok(Self {
            privilege_pattern,
            system_groups,
        })
    }

    pub fn from_config(config: &GroupsConfig) -> Result<Self> {
        Self::new(&config.privilege_group_pattern, config.system_groups.clone())
    }
}

impl IdentifierClassifier for PatternClassifier {
    fn is_privilege_group(&self, name: &str) -> bool {
        self.privilege_pattern.is_match(name)
    }

    fn system_groups(&self) -> &[String] {
        &self.system_groups
    }
}
