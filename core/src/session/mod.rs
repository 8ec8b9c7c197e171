//! Session context and role policy.
//!
//! The dashboard keeps the signed-in user and access token in browser
//! storage. Instead of reading that storage from deep inside components, a
//! [`Session`] is restored once at startup, handed to whoever needs identity
//! or role information, and cleared on logout.
//!
//! # Role policy
//!
//! Account owners are created without any `roles`; sub-users always carry at
//! least one (e.g. `subuser`). [`Role::of`] therefore resolves, in order:
//!
//! 1. `role == "admin"` → [`Role::Admin`]
//! 2. `roles` empty → [`Role::Admin`] (account owner)
//! 3. `roles` contains `"admin"` → [`Role::Admin`]
//! 4. otherwise → [`Role::User`]

use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};

/// Storage key of the serialized user.
pub const USER_KEY: &str = "user";
/// Storage key of the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key of the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// All keys written by a login and removed by a logout.
pub const STORAGE_KEYS: [&str; 3] = [USER_KEY, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY];

// =============================================================================
// User
// =============================================================================

/// The user record kept alongside the token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Effective permission level in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Resolve the role of a user (see module docs for the policy).
    pub fn of(user: &SessionUser) -> Role {
        if user.role.as_deref() == Some("admin") {
            return Role::Admin;
        }
        if user.roles.is_empty() || user.roles.iter().any(|r| r == "admin") {
            return Role::Admin;
        }
        Role::User
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// A signed-in user and their access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: SessionUser,
    pub token: String,
    pub role: Role,
}

impl Session {
    pub fn new(user: SessionUser, token: impl Into<String>) -> Self {
        let role = Role::of(&user);
        Self { user, token: token.into(), role }
    }

    /// Restore from the stored user JSON and access token.
    pub fn restore(user_json: Option<&str>, token: Option<&str>) -> SessionResult<Self> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(SessionError::MissingToken)?;
        let user_json = user_json.ok_or(SessionError::MissingUser)?;
        let user: SessionUser = serde_json::from_str(user_json)?;
        Ok(Self::new(user, token))
    }

    /// Serialized user, as written under [`USER_KEY`].
    pub fn user_json(&self) -> String {
        serde_json::to_string(&self.user).unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether this session may open `section`.
    pub fn can_access(&self, section: Section) -> bool {
        section.allows(self.role)
    }

    /// Sidebar entries visible to this session.
    pub fn navigation(&self) -> Vec<Section> {
        Section::ALL.into_iter().filter(|s| self.can_access(*s)).collect()
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Top-level dashboard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Campaigns,
    ActivityLogs,
    UserManagement,
    SystemSettings,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Campaigns,
        Section::ActivityLogs,
        Section::UserManagement,
        Section::SystemSettings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Campaigns => "Campaigns",
            Section::ActivityLogs => "Activity Logs",
            Section::UserManagement => "User Management",
            Section::SystemSettings => "System Settings",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Section::Dashboard => "/dashboard",
            Section::Campaigns => "/campaigns",
            Section::ActivityLogs => "/activity",
            Section::UserManagement => "/users",
            Section::SystemSettings => "/settings",
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        match self {
            Section::Dashboard | Section::Campaigns => true,
            Section::ActivityLogs | Section::UserManagement | Section::SystemSettings => {
                role == Role::Admin
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Option<&str>, roles: &[&str]) -> SessionUser {
        SessionUser {
            id: "u1".into(),
            name: "Jo".into(),
            email: "jo@example.com".into(),
            role: role.map(String::from),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_role_policy() {
        assert_eq!(Role::of(&user(Some("admin"), &["subuser"])), Role::Admin);
        assert_eq!(Role::of(&user(None, &[])), Role::Admin);
        assert_eq!(Role::of(&user(None, &["subuser", "admin"])), Role::Admin);
        assert_eq!(Role::of(&user(None, &["subuser"])), Role::User);
        assert_eq!(Role::of(&user(Some("user"), &["subuser"])), Role::User);
    }

    #[test]
    fn test_restore() {
        let json = r#"{"_id":"42","name":"Sam","email":"sam@x.io","roles":["subuser"]}"#;
        let session = Session::restore(Some(json), Some("tok")).unwrap();
        assert_eq!(session.user.id, "42");
        assert_eq!(session.token, "tok");
        assert!(!session.is_admin());
    }

    #[test]
    fn test_restore_failures() {
        assert!(matches!(Session::restore(Some("{}"), None), Err(SessionError::MissingToken)));
        assert!(matches!(Session::restore(Some("{}"), Some("")), Err(SessionError::MissingToken)));
        assert!(matches!(Session::restore(None, Some("t")), Err(SessionError::MissingUser)));
        assert!(matches!(
            Session::restore(Some("not json"), Some("t")),
            Err(SessionError::MalformedUser(_))
        ));
    }

    #[test]
    fn test_user_json_round_trip() {
        let session = Session::new(user(None, &[]), "t");
        let restored = Session::restore(Some(session.user_json().as_str()), Some("t")).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_navigation_by_role() {
        let admin = Session::new(user(None, &[]), "t");
        assert_eq!(admin.navigation().len(), 5);

        let sub = Session::new(user(None, &["subuser"]), "t");
        assert_eq!(sub.navigation(), vec![Section::Dashboard, Section::Campaigns]);
        assert!(!sub.can_access(Section::UserManagement));
    }
}
