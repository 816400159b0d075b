//! Networking modules for the auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls and `types` defines the wire schema shared
//! with the server's JSON responses.

pub mod api;
pub mod types;
