//! Client-side widget state.
//!
//! DESIGN
//! ======
//! Everything here is plain data plus pure transitions so it can be tested
//! without a DOM. Components read it through context signals and only change
//! it through the methods on [`chat::ChatState`].

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod history;
pub mod selection;
pub mod transcript;
