//! Service layer: credential store access and token crypto.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes stay thin by delegating all database and crypto work here. Each
//! service owns its error enum; handlers map those errors onto wire responses.

pub mod auth;
pub mod token;
