use crate::api::{ApiError, User};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UsersIntent {
    /// A (re)load was initiated; the screen shows the spinner.
    LoadStarted,
    /// The gateway answered successfully.
    Loaded(Vec<User>),
    /// The gateway call failed.
    Failed(ApiError),
}

impl Intent for UsersIntent {}
