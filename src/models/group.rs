//! Group model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::utils::errors::{StoreError, StoreResult};

/// Persisted group record
///
/// Flags are stored as numeric `0`/`1` so that the record round-trips
/// through a flat string hash without losing its encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    pub slug: String,
    pub createtime: i64,
    pub user_title: String,
    pub user_title_enabled: u8,
    pub description: String,
    pub member_count: u64,
    pub hidden: u8,
    pub system: u8,
    pub private: u8,
    pub disable_join_requests: u8,
    pub disable_leave: u8,
}

impl Group {
    pub fn is_hidden(&self) -> bool {
        self.hidden != 0
    }

    pub fn is_system(&self) -> bool {
        self.system != 0
    }

    /// Hidden and system groups stay out of the public listings
    pub fn is_visible(&self) -> bool {
        !self.is_hidden() && !self.is_system()
    }

    /// Encode the record as hash fields
    pub fn to_fields(&self) -> Vec<(String, String)> {
        vec![
            ("name".to_string(), self.name.clone()),
            ("slug".to_string(), self.slug.clone()),
            ("createtime".to_string(), self.createtime.to_string()),
            ("userTitle".to_string(), self.user_title.clone()),
            ("userTitleEnabled".to_string(), self.user_title_enabled.to_string()),
            ("description".to_string(), self.description.clone()),
            ("memberCount".to_string(), self.member_count.to_string()),
            ("hidden".to_string(), self.hidden.to_string()),
            ("system".to_string(), self.system.to_string()),
            ("private".to_string(), self.private.to_string()),
            ("disableJoinRequests".to_string(), self.disable_join_requests.to_string()),
            ("disableLeave".to_string(), self.disable_leave.to_string()),
        ]
    }

    /// Decode a record read back from the store
    ///
    /// Missing text fields default to empty, missing numbers to zero. Any
    /// non-zero flag is coerced to `1`.
    pub fn from_fields(key: &str, fields: &HashMap<String, String>) -> StoreResult<Self> {
        let text = |field: &str| fields.get(field).cloned().unwrap_or_default();

        let name = fields.get("name").cloned().ok_or_else(|| StoreError::Corrupt {
            key: key.to_string(),
            field: "name".to_string(),
            reason: "missing".to_string(),
        })?;

        Ok(Self {
            slug: text("slug"),
            createtime: parse_number(key, fields, "createtime")?,
            user_title: text("userTitle"),
            user_title_enabled: parse_flag(key, fields, "userTitleEnabled")?,
            description: text("description"),
            member_count: parse_number(key, fields, "memberCount")?,
            hidden: parse_flag(key, fields, "hidden")?,
            system: parse_flag(key, fields, "system")?,
            private: parse_flag(key, fields, "private")?,
            disable_join_requests: parse_flag(key, fields, "disableJoinRequests")?,
            disable_leave: parse_flag(key, fields, "disableLeave")?,
            name,
        })
    }
}

fn parse_number<T>(key: &str, fields: &HashMap<String, String>, field: &str) -> StoreResult<T>
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    match fields.get(field) {
        None => Ok(T::default()),
        Some(raw) if raw.is_empty() => Ok(T::default()),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| StoreError::Corrupt {
            key: key.to_string(),
            field: field.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn parse_flag(key: &str, fields: &HashMap<String, String>, field: &str) -> StoreResult<u8> {
    let value: i64 = parse_number(key, fields, field)?;
    Ok(u8::from(value != 0))
}

/// Loosely typed flag as submitted by callers
///
/// Accepts booleans, numbers and numeric strings. Interpretation follows
/// integer parsing of the leading digits, so `"1abc"` reads as `1` and
/// `"yes"` reads as nothing at all. Booleans have no integer reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FlagValue {
    /// Integer reading of the flag, `None` when it does not parse
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FlagValue::Bool(_) => None,
            FlagValue::Int(i) => Some(*i),
            FlagValue::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            FlagValue::Float(_) => None,
            FlagValue::Text(s) => parse_leading_int(s),
        }
    }

    pub fn is_one(&self) -> bool {
        self.as_int() == Some(1)
    }

    pub fn is_zero(&self) -> bool {
        self.as_int() == Some(0)
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        FlagValue::Int(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Text(value.to_string())
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Input for group creation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    /// Kept untyped so that missing and non-string names can be told apart
    #[serde(default)]
    pub name: serde_json::Value,
    pub timestamp: Option<i64>,
    pub owner_uid: Option<String>,
    pub user_title: Option<String>,
    pub user_title_enabled: Option<FlagValue>,
    pub description: Option<String>,
    pub hidden: Option<FlagValue>,
    pub system: Option<FlagValue>,
    pub private: Option<FlagValue>,
    pub disable_join_requests: Option<FlagValue>,
    pub disable_leave: Option<FlagValue>,
}

impl CreateGroupRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: serde_json::Value::String(name.into()),
            ..Self::default()
        }
    }

    pub fn with_owner(mut self, owner_uid: impl Into<String>) -> Self {
        self.owner_uid = Some(owner_uid.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// The name when it was supplied as a string
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_str()
    }

    /// Owner uid, treating an empty string as absent
    pub fn owner(&self) -> Option<&str> {
        self.owner_uid.as_deref().filter(|uid| !uid.is_empty())
    }
}

/// Payload handed to the pre-create filter hook
///
/// The hook may rewrite `group` before it is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupPayload {
    pub group: Group,
    pub data: CreateGroupRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Group {
        Group {
            name: "book-club".to_string(),
            slug: "book-club".to_string(),
            createtime: 1000,
            user_title: "book-club".to_string(),
            user_title_enabled: 0,
            description: String::new(),
            member_count: 1,
            hidden: 0,
            system: 0,
            private: 1,
            disable_join_requests: 0,
            disable_leave: 0,
        }
    }

    #[test]
    fn test_fields_decode_into_the_same_record() {
        let group = sample();
        let fields: HashMap<String, String> = group.to_fields().into_iter().collect();
        assert_eq!(Group::from_fields("group:book-club", &fields).unwrap(), group);
    }

    #[test]
    fn test_from_fields_coerces_flags() {
        let mut fields: HashMap<String, String> = sample().to_fields().into_iter().collect();
        fields.insert("hidden".to_string(), "7".to_string());
        fields.remove("description");
        let group = Group::from_fields("group:book-club", &fields).unwrap();
        assert_eq!(group.hidden, 1);
        assert_eq!(group.description, "");
    }

    #[test]
    fn test_from_fields_rejects_garbage_numbers() {
        let mut fields: HashMap<String, String> = sample().to_fields().into_iter().collect();
        fields.insert("memberCount".to_string(), "many".to_string());
        let err = Group::from_fields("group:book-club", &fields).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref field, .. } if field == "memberCount"));
    }

    #[test]
    fn test_from_fields_requires_name() {
        let fields = HashMap::new();
        assert!(Group::from_fields("group:x", &fields).is_err());
    }

    #[test]
    fn test_flag_value_parsing() {
        assert_eq!(FlagValue::from("1").as_int(), Some(1));
        assert_eq!(FlagValue::from(" 1abc").as_int(), Some(1));
        assert_eq!(FlagValue::from("-3").as_int(), Some(-3));
        assert_eq!(FlagValue::from("yes").as_int(), None);
        assert_eq!(FlagValue::from("").as_int(), None);
        assert_eq!(FlagValue::Float(1.9).as_int(), Some(1));
        assert_eq!(FlagValue::from(true).as_int(), None);
        assert!(!FlagValue::from(true).is_one());
        assert!(!FlagValue::from(false).is_zero());
        assert!(FlagValue::from(0_i64).is_zero());
    }

    #[test]
    fn test_request_deserializes_loose_flags() {
        let request: CreateGroupRequest = serde_json::from_str(
            r#"{"name":"book-club","ownerUid":"u42","hidden":"1","private":0,"system":true}"#,
        )
        .unwrap();
        assert_eq!(request.name_str(), Some("book-club"));
        assert_eq!(request.owner(), Some("u42"));
        assert!(request.hidden.as_ref().unwrap().is_one());
        assert!(request.private.as_ref().unwrap().is_zero());
        assert_eq!(request.system, Some(FlagValue::Bool(true)));
    }

    #[test]
    fn test_request_keeps_non_string_names() {
        let request: CreateGroupRequest = serde_json::from_str(r#"{"name":42}"#).unwrap();
        assert_eq!(request.name_str(), None);
        assert_eq!(request.name, serde_json::json!(42));
    }

    #[test]
    fn test_visibility() {
        let mut group = sample();
        assert!(group.is_visible());
        group.system = 1;
        assert!(!group.is_visible());
        group.system = 0;
        group.hidden = 1;
        assert!(!group.is_visible());
    }
}
