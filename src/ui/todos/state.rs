use crate::api::Todo;
use crate::ui::mvi::UiState;

/// Lifecycle of one user's todo fetch. Re-selecting a user replaces the
/// whole state; nothing is merged or appended.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TodoListState {
    #[default]
    Loading,
    Loaded(Vec<Todo>),
    Failed(String),
}

impl UiState for TodoListState {}

impl TodoListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn todos(&self) -> Option<&[Todo]> {
        match self {
            Self::Loaded(todos) => Some(todos),
            _ => None,
        }
    }
}
