//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and settings controls. Anything that needs
//! session state receives it as a prop.

pub mod navigation;
pub mod page_header;
pub mod protected_route;
pub mod quote_bar;
pub mod setting_section;
pub mod toggle_switch;
