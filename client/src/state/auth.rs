//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication itself lives in the backend. The widget only learns who is
//! signed in so it can show a name, and leaves the page when nobody is.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Name shown in the sidebar header; empty until the user has loaded.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.display_name().to_owned())
            .unwrap_or_default()
    }
}
