use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::NavState;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::SelectUser { user_id, user_name } => {
                NavState::TodosFor { user_id, user_name }
            }
            // Unconditional: going back never touches the todo list's
            // state, so a re-selected user briefly shows stale data until
            // the new load lands.
            NavIntent::GoBack => NavState::UserList,
            NavIntent::BackPressed => match state {
                NavState::TodosFor { .. } => NavState::UserList,
                NavState::UserList => NavState::UserList,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todos_screen() -> NavState {
        NavState::TodosFor {
            user_id: 1,
            user_name: "Leanne Graham".to_string(),
        }
    }

    #[test]
    fn select_user_opens_todo_screen() {
        let state = NavReducer::reduce(
            NavState::UserList,
            NavIntent::SelectUser {
                user_id: 1,
                user_name: "Leanne Graham".to_string(),
            },
        );
        assert_eq!(state, todos_screen());
    }

    #[test]
    fn go_back_returns_to_user_list() {
        let state = NavReducer::reduce(todos_screen(), NavIntent::GoBack);
        assert_eq!(state, NavState::UserList);
    }

    #[test]
    fn back_signal_acts_like_go_back_on_todo_screen() {
        let state = NavReducer::reduce(todos_screen(), NavIntent::BackPressed);
        assert_eq!(state, NavState::UserList);
    }

    #[test]
    fn back_signal_is_suppressed_on_user_list() {
        let state = NavReducer::reduce(NavState::UserList, NavIntent::BackPressed);
        assert_eq!(state, NavState::UserList);
    }
}
