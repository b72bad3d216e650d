use crate::ui::mvi::Reducer;
use crate::ui::todos::intent::TodosIntent;
use crate::ui::todos::state::TodoListState;
use crate::ui::users::MSG_NO_INTERNET;

pub const MSG_NO_TODOS: &str = "No todos found for this user";
pub const MSG_LOAD_FAILED: &str = "Failed to load todos";

pub struct TodosReducer;

impl Reducer for TodosReducer {
    type State = TodoListState;
    type Intent = TodosIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TodosIntent::LoadStarted { .. } => TodoListState::Loading,
            TodosIntent::Loaded(todos) => {
                if todos.is_empty() {
                    // Same empty-is-failure policy as the user list.
                    TodoListState::Failed(MSG_NO_TODOS.to_string())
                } else {
                    TodoListState::Loaded(todos)
                }
            }
            // Two buckets here, not three: any transport failure (including
            // timeouts) reads as a connectivity problem, everything else
            // gets the generic message.
            TodosIntent::Failed(err) if err.is_transport_failure() => {
                TodoListState::Failed(MSG_NO_INTERNET.to_string())
            }
            TodosIntent::Failed(_) => TodoListState::Failed(MSG_LOAD_FAILED.to_string()),
        }
    }
}
