//! Remote data gateway for the JSONPlaceholder-style API.
//!
//! The gateway is the only component that touches the network. It exposes
//! two read-only operations behind the [`TodoApi`] trait so the state
//! machines can be driven by a fake in tests. Every failure is normalized
//! into [`ApiError`]; nothing downstream ever sees a raw `reqwest::Error`.

mod error;
mod gateway;
mod types;

pub use error::ApiError;
pub use gateway::{HttpGateway, TodoApi};
pub use types::{Address, Company, Geo, Todo, User};
