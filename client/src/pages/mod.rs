//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-level layout and delegates shared chrome to
//! `components`. Protected pages are wrapped by `ProtectedRoute` in `app`,
//! never guarded from inside.

pub mod activities;
pub mod community;
pub mod dashboard;
pub mod journal;
pub mod not_found;
pub mod settings;
pub mod sign_in;
pub mod sign_up;
pub mod step_work;
