//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `preferences`) so components depend on
//! small focused models.

pub mod auth;
pub mod preferences;
