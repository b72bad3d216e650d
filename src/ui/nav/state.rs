use crate::ui::mvi::UiState;

/// Root of the UI: exactly one screen is active. `TodosFor` only ever
/// carries an id and name drawn from a previously fetched user.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NavState {
    #[default]
    UserList,
    TodosFor { user_id: u32, user_name: String },
}

impl UiState for NavState {}

impl NavState {
    pub fn is_user_list(&self) -> bool {
        matches!(self, Self::UserList)
    }
}
