//! View-models: the glue between the pure reducers and the runtime.
//!
//! Each view-model owns one MVI feature's state, publishes the latest
//! value through a `tokio::sync::watch` channel, and spawns the gateway
//! fetches as tokio tasks. Reducers stay pure; everything effectful lives
//! here.
//!
//! A superseding `load` does not cancel the in-flight one — whichever task
//! finishes last writes the state (last write wins), matching the original
//! app's behavior.

mod nav;
mod todos;
mod users;

pub use nav::NavModel;
pub use todos::TodoListViewModel;
pub use users::UserListViewModel;
