//! Group creation
//!
//! Validation, existence checking, record assembly and persistence for new
//! groups, sequenced by [`GroupService`].

pub mod builder;
pub mod existence;
pub mod keys;
pub mod persister;
pub mod service;
pub mod validation;

pub use builder::{build_group, DerivedFlags, RecordInput, ADMINISTRATORS_GROUP};
pub use existence::ExistenceChecker;
pub use persister::GroupPersister;
pub use service::GroupService;
pub use validation::{NameValidator, GUESTS_GROUP};
