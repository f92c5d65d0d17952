//! Networking modules for the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls and classifies replies, `types` defines the
//! shared wire schema.

pub mod api;
pub mod types;
