use crate::api::User;
use crate::ui::mvi::UiState;

/// Lifecycle of the user list fetch. Exactly one variant is active; every
/// (re)load passes through `Loading` before reaching a terminal variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UserListState {
    #[default]
    Loading,
    Loaded(Vec<User>),
    Failed(String),
}

impl UiState for UserListState {}

impl UserListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn users(&self) -> Option<&[User]> {
        match self {
            Self::Loaded(users) => Some(users),
            _ => None,
        }
    }
}
