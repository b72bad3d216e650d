//! User list feature: Loading → Loaded/Failed over the `/users` fetch.

mod intent;
mod reducer;
mod state;

pub use intent::UsersIntent;
pub use reducer::{UsersReducer, MSG_NO_INTERNET, MSG_NO_USERS, MSG_TIMEOUT, MSG_UNKNOWN};
pub use state::UserListState;
