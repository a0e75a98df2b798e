//! Combat resolution primitives.
//!
//! Pure functions for damage plus the [`Strike`] record the engine emits for
//! every applied attack. Turn order lives in [`crate::engine`].
//!
//! - `resolve_damage`: critical roll + damage for one attack
//! - `calculate_damage`: damage for a known critical outcome
//! - `is_critical`: roll-vs-chance check

pub mod damage;
pub mod result;

pub use damage::{DamageRoll, calculate_damage, is_critical, resolve_damage};
pub use result::Strike;
