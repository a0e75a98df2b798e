//! Terminal presentation components: the read-only side of the client.
//!
//! Everything here renders a [`game_core::GameSnapshot`] plus the combat log
//! and never touches the session.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
