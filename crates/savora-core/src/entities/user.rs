//! User entity - represents a platform account

use chrono::{DateTime, Utc};

/// User entity. Role names are loaded alongside the user from the
/// `user_roles` join and feed both JWT claims and permission checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: i64, email: String, username: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            username,
            first_name: None,
            last_name: None,
            roles: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Display name: "First Last" when both are present, username otherwise
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => self.username.clone(),
        }
    }

    /// Check whether the user carries a given role name
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user = User::new(1, "a@b.com".into(), "amir".into());
        assert_eq!(user.display_name(), "amir");

        user.first_name = Some("Amir".into());
        user.last_name = Some("Khan".into());
        assert_eq!(user.display_name(), "Amir Khan");
    }

    #[test]
    fn test_has_role() {
        let mut user = User::new(1, "a@b.com".into(), "amir".into());
        assert!(!user.has_role("admin"));
        user.roles.push("admin".into());
        assert!(user.has_role("admin"));
    }
}
