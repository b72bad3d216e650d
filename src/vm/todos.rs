//! View-model for the todo list screen.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::api::TodoApi;
use crate::ui::mvi::Reducer;
use crate::ui::todos::{TodoListState, TodosIntent, TodosReducer};

/// Owns the todo list state machine. Unlike the user list it is not
/// auto-started: nothing happens until `load(user_id)` is called, and a
/// call for a different user replaces the state wholesale.
pub struct TodoListViewModel<A: TodoApi> {
    api: Arc<A>,
    tx: watch::Sender<TodoListState>,
}

impl<A: TodoApi> TodoListViewModel<A> {
    pub fn new(api: Arc<A>) -> Self {
        let (tx, _rx) = watch::channel(TodoListState::Loading);
        Self { api, tx }
    }

    /// Latest-value observable for the rendering layer.
    pub fn subscribe(&self) -> watch::Receiver<TodoListState> {
        self.tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> TodoListState {
        self.tx.borrow().clone()
    }

    /// Fetch todos for one user. An in-flight fetch for a previous user is
    /// not cancelled; whichever response lands last wins.
    pub fn load(&self, user_id: u32) {
        self.apply(TodosIntent::LoadStarted { user_id });

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let intent = match api.fetch_todos(user_id).await {
                Ok(todos) => {
                    debug!(count = todos.len(), user_id, "todo list loaded");
                    TodosIntent::Loaded(todos)
                }
                Err(err) => {
                    debug!(%err, user_id, "todo list load failed");
                    TodosIntent::Failed(err)
                }
            };
            let current = tx.borrow().clone();
            tx.send_replace(TodosReducer::reduce(current, intent));
        });
    }

    fn apply(&self, intent: TodosIntent) {
        let current = self.tx.borrow().clone();
        self.tx.send_replace(TodosReducer::reduce(current, intent));
    }
}
