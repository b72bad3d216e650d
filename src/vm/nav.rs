//! Navigation model: root of the UI.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::api::{TodoApi, User};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavState};
use crate::vm::todos::TodoListViewModel;

/// Tracks which screen is visible and drives the todo view-model when a
/// user is selected. Going back deliberately leaves the todo state alone.
pub struct NavModel<A: TodoApi> {
    tx: watch::Sender<NavState>,
    todos: TodoListViewModel<A>,
}

impl<A: TodoApi> NavModel<A> {
    pub fn new(api: Arc<A>) -> Self {
        let (tx, _rx) = watch::channel(NavState::UserList);
        Self {
            tx,
            todos: TodoListViewModel::new(api),
        }
    }

    /// Latest-value observable for the rendering layer.
    pub fn subscribe(&self) -> watch::Receiver<NavState> {
        self.tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> NavState {
        self.tx.borrow().clone()
    }

    /// The todo view-model this navigation owns.
    pub fn todos(&self) -> &TodoListViewModel<A> {
        &self.todos
    }

    /// Open the todo screen for `user` and kick off its fetch.
    pub fn select_user(&self, user: &User) {
        debug!(user_id = user.id, name = %user.name, "user selected");
        self.apply(NavIntent::SelectUser {
            user_id: user.id,
            user_name: user.name.clone(),
        });
        self.todos.load(user.id);
    }

    /// Return to the user list. Todo state is left as-is.
    pub fn go_back(&self) {
        self.apply(NavIntent::GoBack);
    }

    /// System-level back signal; a no-op while on the user list.
    pub fn back_pressed(&self) {
        self.apply(NavIntent::BackPressed);
    }

    fn apply(&self, intent: NavIntent) {
        let current = self.tx.borrow().clone();
        self.tx.send_replace(NavReducer::reduce(current, intent));
    }
}
