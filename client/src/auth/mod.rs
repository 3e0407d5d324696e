//! Route authorization and the auth collaborator capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` exposes session status to the UI as an injected capability and
//! `guard` turns that status into a render/redirect decision for protected
//! routes.

pub mod guard;
pub mod provider;
