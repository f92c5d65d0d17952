//! Reusable view components.
//!
//! ARCHITECTURE
//! ============
//! Components read `ChatState` / `AuthState` from context and report user
//! intent through callbacks; the page decides what network work follows.

pub mod chat_input;
pub mod debug_panel;
pub mod history_sidebar;
pub mod path_selector;
pub mod transcript;
