//! Login redirect shared by the page and logout flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page belongs to the backend, so leaving the widget is a full
//! navigation rather than a router transition.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Backend-served login page.
pub const LOGIN_PAGE: &str = "/login.html";

/// Navigate the whole window to [`LOGIN_PAGE`].
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PAGE);
        }
    }
}
