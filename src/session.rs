//! In-memory auth session — the bearer credential and signed-in user.
//!
//! The core never issues tokens; the login flow hands them in and logout
//! drops them. Nothing here is persisted: a reload starts signed out.

use serde::{Deserialize, Serialize};

/// The signed-in user, as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Holds the current credential for the lifetime of the app session.
#[derive(Debug, Default)]
pub struct AuthSession {
    token: Option<String>,
    user: Option<UserProfile>,
}

impl AuthSession {
    /// Start signed out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fresh credential, replacing any previous one.
    pub fn log_in(&mut self, token: String, user: UserProfile) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Drop the credential and user.
    pub fn log_out(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserProfile {
        UserProfile {
            id: "u1".into(),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[test]
    fn new_session_is_signed_out() {
        let session = AuthSession::new();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn log_in_installs_credential() {
        let mut session = AuthSession::new();
        session.log_in("jwt-abc".into(), user("Alice"));

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("jwt-abc"));
        assert_eq!(session.user().unwrap().name, "Alice");
    }

    #[test]
    fn log_in_replaces_previous_credential() {
        let mut session = AuthSession::new();
        session.log_in("jwt-old".into(), user("Alice"));
        session.log_in("jwt-new".into(), user("Bob"));

        assert_eq!(session.token(), Some("jwt-new"));
        assert_eq!(session.user().unwrap().name, "Bob");
    }

    #[test]
    fn log_out_drops_everything() {
        let mut session = AuthSession::new();
        session.log_in("jwt-abc".into(), user("Alice"));
        session.log_out();

        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }
}
