//! Terminal UI: a two-screen browser over the view-models.
//!
//! The MVI features (`users`, `todos`, `nav`) hold the screen state; the
//! rest of this module is rendering and input plumbing that subscribes to
//! the view-models and re-renders on every change.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod nav;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod todos;
pub mod users;
