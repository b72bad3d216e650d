use crate::api::ApiError;
use crate::ui::mvi::Reducer;
use crate::ui::users::intent::UsersIntent;
use crate::ui::users::state::UserListState;

pub const MSG_NO_USERS: &str = "No users found";
pub const MSG_NO_INTERNET: &str = "No internet connection. Please check your network settings.";
pub const MSG_TIMEOUT: &str = "Connection timeout. Please try again.";
pub const MSG_UNKNOWN: &str = "An unknown error occurred";

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UserListState;
    type Intent = UsersIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UsersIntent::LoadStarted => UserListState::Loading,
            UsersIntent::Loaded(users) => {
                if users.is_empty() {
                    // An empty result is surfaced as a failure, not as an
                    // empty success screen. Kept from the original app.
                    UserListState::Failed(MSG_NO_USERS.to_string())
                } else {
                    UserListState::Loaded(users)
                }
            }
            UsersIntent::Failed(err) => UserListState::Failed(user_message(&err)),
        }
    }
}

/// Three-bucket mapping: connectivity, timeout, everything else.
fn user_message(err: &ApiError) -> String {
    match err {
        ApiError::Unreachable(_) => MSG_NO_INTERNET.to_string(),
        ApiError::Timeout => MSG_TIMEOUT.to_string(),
        other => {
            let message = other.to_string();
            if message.is_empty() {
                MSG_UNKNOWN.to_string()
            } else {
                message
            }
        }
    }
}
