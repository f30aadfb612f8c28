//! Request fixtures

use community_groups::CreateGroupRequest;

pub const TEST_TIMESTAMP: i64 = 1000;
pub const TEST_OWNER: &str = "u42";

/// A plain group created at [`TEST_TIMESTAMP`]
pub fn group_request(name: &str) -> CreateGroupRequest {
    CreateGroupRequest::new(name).with_timestamp(TEST_TIMESTAMP)
}

/// A plain group with [`TEST_OWNER`] as its first member
pub fn owned_group_request(name: &str) -> CreateGroupRequest {
    group_request(name).with_owner(TEST_OWNER)
}

pub fn hidden_group_request(name: &str) -> CreateGroupRequest {
    let mut request = group_request(name);
    request.hidden = Some(1_i64.into());
    request
}

pub fn system_group_request(name: &str) -> CreateGroupRequest {
    let mut request = group_request(name);
    request.system = Some(true.into());
    request
}
