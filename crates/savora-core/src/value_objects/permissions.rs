//! Permission bitflags and the role-to-permission table.
//!
//! The table is an explicitly loaded configuration object passed into
//! authorization checks, not a process-wide static: the server builds one at
//! startup (defaults plus optional configured grants) and threads it through
//! application state.

use std::collections::HashMap;

use bitflags::bitflags;

bitflags! {
    /// Permission flags, stored nowhere - derived from role names at
    /// authorization time through a [`RolePermissionTable`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u64 {
        /// Create, edit, delete restaurants
        const MANAGE_RESTAURANTS  = 1 << 0;
        /// Create, edit, delete branches
        const MANAGE_BRANCHES     = 1 << 1;
        /// Create, edit, delete menus and menu items
        const MANAGE_MENUS        = 1 << 2;
        /// Confirm, complete, cancel orders
        const MANAGE_ORDERS       = 1 << 3;
        /// Place orders
        const PLACE_ORDERS        = 1 << 4;
        /// Create, edit users and grant roles
        const MANAGE_USERS        = 1 << 5;
        /// Edit cuisine type reference data
        const MANAGE_CUISINES     = 1 << 6;
        /// Bypass all permission checks
        const ADMINISTRATOR       = 1 << 7;

        /// Default permissions for a freshly registered account
        const DEFAULT = Self::PLACE_ORDERS.bits();
    }
}

impl Permissions {
    /// Check if the permission set contains a required permission.
    ///
    /// Administrators bypass all permission checks.
    #[inline]
    pub fn has(&self, permission: Permissions) -> bool {
        if self.contains(Permissions::ADMINISTRATOR) {
            return true;
        }
        self.contains(permission)
    }
}

/// Role name -> permission set mapping.
#[derive(Debug, Clone)]
pub struct RolePermissionTable {
    grants: HashMap<String, Permissions>,
}

impl RolePermissionTable {
    /// Empty table; roles resolve to no permissions
    pub fn empty() -> Self {
        Self {
            grants: HashMap::new(),
        }
    }

    /// Add or extend a role's grant
    pub fn grant(&mut self, role: impl Into<String>, permissions: Permissions) {
        *self
            .grants
            .entry(role.into())
            .or_insert(Permissions::empty()) |= permissions;
    }

    /// Parse grants in the `role=PERM|PERM,role=PERM` configuration form.
    /// Permission names are the flag names; unknown names are rejected.
    pub fn apply_grants(&mut self, spec: &str) -> Result<(), String> {
        for entry in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (role, perms) = entry
                .split_once('=')
                .ok_or_else(|| format!("malformed grant entry: {entry}"))?;
            let mut set = Permissions::empty();
            for name in perms.split('|').map(str::trim) {
                set |= Permissions::from_name(name)
                    .ok_or_else(|| format!("unknown permission: {name}"))?;
            }
            self.grant(role.trim(), set);
        }
        Ok(())
    }

    /// Combined permissions of a set of role names. Unknown roles
    /// contribute nothing.
    pub fn permissions_for<'a, I>(&self, roles: I) -> Permissions
    where
        I: IntoIterator<Item = &'a str>,
    {
        roles
            .into_iter()
            .filter_map(|role| self.grants.get(role))
            .fold(Permissions::empty(), |acc, p| acc | *p)
    }
}

impl Default for RolePermissionTable {
    /// Built-in roles of the platform
    fn default() -> Self {
        let mut table = Self::empty();
        table.grant("admin", Permissions::ADMINISTRATOR);
        table.grant(
            "restaurant-admin",
            Permissions::MANAGE_RESTAURANTS
                | Permissions::MANAGE_BRANCHES
                | Permissions::MANAGE_MENUS
                | Permissions::MANAGE_ORDERS,
        );
        table.grant(
            "branch-manager",
            Permissions::MANAGE_MENUS | Permissions::MANAGE_ORDERS,
        );
        table.grant("customer", Permissions::DEFAULT);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_administrator_bypasses_checks() {
        let perms = Permissions::ADMINISTRATOR;
        assert!(perms.has(Permissions::MANAGE_RESTAURANTS));
        assert!(perms.has(Permissions::MANAGE_USERS));
    }

    #[test]
    fn test_default_table_roles() {
        let table = RolePermissionTable::default();
        let perms = table.permissions_for(["branch-manager"]);
        assert!(perms.has(Permissions::MANAGE_MENUS));
        assert!(!perms.has(Permissions::MANAGE_RESTAURANTS));
    }

    #[test]
    fn test_roles_combine() {
        let table = RolePermissionTable::default();
        let perms = table.permissions_for(["customer", "branch-manager"]);
        assert!(perms.has(Permissions::PLACE_ORDERS));
        assert!(perms.has(Permissions::MANAGE_ORDERS));
    }

    #[test]
    fn test_unknown_role_grants_nothing() {
        let table = RolePermissionTable::default();
        assert_eq!(table.permissions_for(["waiter"]), Permissions::empty());
    }

    #[test]
    fn test_flag_names_resolve() {
        assert_eq!(
            Permissions::from_name("MANAGE_ORDERS"),
            Some(Permissions::MANAGE_ORDERS)
        );
        assert_eq!(
            Permissions::from_name("ADMINISTRATOR"),
            Some(Permissions::ADMINISTRATOR)
        );
        assert_eq!(Permissions::from_name("FLY"), None);
    }

    #[test]
    fn test_apply_grants_parsing() {
        let mut table = RolePermissionTable::empty();
        table
            .apply_grants("waiter=MANAGE_ORDERS|PLACE_ORDERS, host=PLACE_ORDERS")
            .unwrap();
        assert!(table
            .permissions_for(["waiter"])
            .has(Permissions::MANAGE_ORDERS));
        assert!(table.permissions_for(["host"]).has(Permissions::PLACE_ORDERS));
    }

    #[test]
    fn test_apply_grants_rejects_unknown_permission() {
        let mut table = RolePermissionTable::empty();
        assert!(table.apply_grants("waiter=FLY").is_err());
    }
}
