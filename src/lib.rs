//! todoview: a terminal browser for JSONPlaceholder users and their todos.
//!
//! Layering, outermost first:
//! - `ui`: ratatui rendering, input, and the MVI features (state + intent +
//!   reducer) for the two screens and the navigation root
//! - `vm`: view-models that spawn fetches and publish state through
//!   `tokio::sync::watch` channels
//! - `api`: the reqwest gateway behind the [`api::TodoApi`] trait seam
//! - `config` / `logging`: TOML configuration and opt-in file tracing

pub mod api;
pub mod config;
pub mod logging;
pub mod ui;
pub mod vm;
