//! Store key layout for groups

/// Every group name, scored by creation time
pub const GROUPS_BY_CREATETIME: &str = "groups:createtime";
pub const VISIBLE_BY_CREATETIME: &str = "groups:visible:createtime";
pub const VISIBLE_BY_MEMBER_COUNT: &str = "groups:visible:memberCount";
/// Members are `lowercase:Original` with score 0, for case-insensitive range lookups
pub const VISIBLE_BY_NAME: &str = "groups:visible:name";
/// Hash of slug -> group name
pub const GROUP_SLUG_MAP: &str = "groupslug:groupname";
/// Hash of user slug -> uid, owned by the user subsystem
pub const USER_SLUG_MAP: &str = "userslug:uid";

pub fn group(name: &str) -> String {
    format!("group:{}", name)
}

pub fn owners(name: &str) -> String {
    format!("group:{}:owners", name)
}

pub fn members(name: &str) -> String {
    format!("group:{}:members", name)
}

pub fn visible_name_member(name: &str) -> String {
    format!("{}:{}", name.to_lowercase(), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_shapes() {
        assert_eq!(group("book-club"), "group:book-club");
        assert_eq!(owners("book-club"), "group:book-club:owners");
        assert_eq!(members("book-club"), "group:book-club:members");
        assert_eq!(visible_name_member("Book Club"), "book club:Book Club");
    }
}
