use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

// =============================================================
// display_name
// =============================================================

#[test]
fn display_name_empty_without_user() {
    assert_eq!(AuthState::default().display_name(), "");
}

#[test]
fn display_name_prefers_name_then_email() {
    let named = AuthState {
        user: Some(User { name: Some("Meera".to_owned()), email: "meera@example.com".to_owned() }),
        loading: false,
    };
    assert_eq!(named.display_name(), "Meera");

    let unnamed = AuthState {
        user: Some(User { name: None, email: "meera@example.com".to_owned() }),
        loading: false,
    };
    assert_eq!(unnamed.display_name(), "meera@example.com");
}
