//! Networking modules for the host's auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST calls the auth collaborator needs and `types` defines
//! the shared wire schema.

pub mod api;
pub mod types;
