//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the snapshot and renders to a
//! terminal frame:
//! - Read-only access to view data
//! - No side effects or state mutations

pub mod combatant;
pub mod footer;
pub mod header;
pub mod messages;
pub mod story;
