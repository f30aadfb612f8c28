//! Group name validation
//!
//! Rules are applied in order and the first failure wins. Nothing here
//! touches the store.

use serde_json::Value;
use crate::services::IdentifierClassifier;
use crate::utils::errors::{GroupError, Result};
use crate::utils::slugify::Slugifier;

/// Name reserved for anonymous visitors
pub const GUESTS_GROUP: &str = "guests";

/// Validates candidate group names
pub struct NameValidator<'a> {
    classifier: &'a dyn IdentifierClassifier,
    slugifier: &'a dyn Slugifier,
    maximum_length: usize,
}

impl<'a> NameValidator<'a> {
    pub fn new(
        classifier: &'a dyn IdentifierClassifier,
        slugifier: &'a dyn Slugifier,
        maximum_length: usize,
    ) -> Self {
        Self {
            classifier,
            slugifier,
            maximum_length,
        }
    }

    /// Validate a name as submitted, returning it as a string on success
    ///
    /// Absent, `null`, `false`, `0` and `""` count as missing. Any other
    /// non-string value is invalid.
    pub fn validate_value<'v>(&self, name: &'v Value) -> Result<&'v str> {
        let missing = match name {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64().map_or(true, |f| f == 0.0 || f.is_nan()),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        };
        if missing {
            return Err(GroupError::NameTooShort);
        }

        let name = name.as_str().ok_or(GroupError::InvalidName)?;
        self.validate(name)?;
        Ok(name)
    }

    pub fn validate(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(GroupError::NameTooShort);
        }

        let is_privilege = self.classifier.is_privilege_group(name);

        // measured in UTF-16 code units
        if !is_privilege && name.encode_utf16().count() > self.maximum_length {
            return Err(GroupError::NameTooLong);
        }

        if name == GUESTS_GROUP || (!is_privilege && name.contains(':')) {
            return Err(GroupError::InvalidName);
        }

        if name.contains('/') || self.slugifier.slugify(name).is_empty() {
            return Err(GroupError::InvalidName);
        }

        Ok(())
    }
}
