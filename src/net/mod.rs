//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `types` defines the wire schema, and `error`
//! carries the failure modes callers degrade on.

pub mod api;
pub mod error;
pub mod types;
