//! Value objects - immutable types that represent domain concepts

mod permissions;

pub use permissions::{Permissions, RolePermissionTable};
