//! Group record assembly
//!
//! All defaulting happens here, in one pass, from a named-field input.
//! The builder never reads the store.
//!
//! | field               | default / rule                                        |
//! |---------------------|-------------------------------------------------------|
//! | userTitle           | the name when absent or empty                         |
//! | userTitleEnabled    | 1 iff the flag parses to 1                            |
//! | description         | empty                                                 |
//! | memberCount         | 1 with an owner, else 0                               |
//! | hidden              | 1 iff the flag parses to 1                            |
//! | system              | `true`, parses to 1, reserved or privilege name       |
//! | private             | 1 unless the flag parses to 0                         |
//! | disableJoinRequests | always 1 for `administrators`, else flag parses to 1  |
//! | disableLeave        | 1 iff the flag parses to 1                            |

use crate::models::{CreateGroupRequest, FlagValue, Group};
use crate::services::IdentifierClassifier;
use crate::utils::slugify::Slugifier;

/// Group whose join requests can never be enabled
pub const ADMINISTRATORS_GROUP: &str = "administrators";

/// Flags derived from the request before the record is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedFlags {
    pub is_system: bool,
    pub is_hidden: bool,
    pub is_private: bool,
    pub disable_join_requests: bool,
    pub disable_leave: bool,
    pub member_count: u64,
}

impl DerivedFlags {
    pub fn derive(
        request: &CreateGroupRequest,
        name: &str,
        classifier: &dyn IdentifierClassifier,
    ) -> Self {
        let is_set = |flag: &Option<FlagValue>| flag.as_ref().is_some_and(FlagValue::is_one);

        let is_system = matches!(request.system, Some(FlagValue::Bool(true)))
            || is_set(&request.system)
            || classifier.is_system_group(name)
            || classifier.is_privilege_group(name);

        let disable_join_requests =
            name == ADMINISTRATORS_GROUP || is_set(&request.disable_join_requests);

        Self {
            is_system,
            is_hidden: is_set(&request.hidden),
            is_private: !request.private.as_ref().is_some_and(FlagValue::is_zero),
            disable_join_requests,
            disable_leave: is_set(&request.disable_leave),
            member_count: u64::from(request.owner().is_some()),
        }
    }
}

/// Everything the builder needs, by name
#[derive(Debug, Clone, Copy)]
pub struct RecordInput<'a> {
    pub name: &'a str,
    pub request: &'a CreateGroupRequest,
    pub timestamp: i64,
    pub flags: DerivedFlags,
}

pub fn build_group(input: RecordInput<'_>, slugifier: &dyn Slugifier) -> Group {
    let RecordInput {
        name,
        request,
        timestamp,
        flags,
    } = input;

    let user_title = request
        .user_title
        .as_deref()
        .filter(|title| !title.is_empty())
        .unwrap_or(name)
        .to_string();
    let user_title_enabled = request
        .user_title_enabled
        .as_ref()
        .is_some_and(FlagValue::is_one);

    Group {
        name: name.to_string(),
        slug: slugifier.slugify(name),
        createtime: timestamp,
        user_title,
        user_title_enabled: u8::from(user_title_enabled),
        description: request.description.clone().unwrap_or_default(),
        member_count: flags.member_count,
        hidden: u8::from(flags.is_hidden),
        system: u8::from(flags.is_system),
        private: u8::from(flags.is_private),
        disable_join_requests: u8::from(flags.disable_join_requests),
        disable_leave: u8::from(flags.disable_leave),
    }
}
