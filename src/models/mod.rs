//! Data models module
//!
//! This module contains the group record and the inputs used to create it

pub mod group;

pub use group::{Group, CreateGroupRequest, CreateGroupPayload, FlagValue};
