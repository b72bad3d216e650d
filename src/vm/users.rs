//! View-model for the user list screen.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::api::TodoApi;
use crate::ui::mvi::Reducer;
use crate::ui::users::{UserListState, UsersIntent, UsersReducer};

/// Owns the user list state machine and its fetch lifecycle.
///
/// The first load starts automatically on construction, so this must be
/// created inside a tokio runtime.
pub struct UserListViewModel<A: TodoApi> {
    api: Arc<A>,
    tx: watch::Sender<UserListState>,
}

impl<A: TodoApi> UserListViewModel<A> {
    pub fn new(api: Arc<A>) -> Self {
        let (tx, _rx) = watch::channel(UserListState::Loading);
        let vm = Self { api, tx };
        vm.load();
        vm
    }

    /// Latest-value observable for the rendering layer.
    pub fn subscribe(&self) -> watch::Receiver<UserListState> {
        self.tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UserListState {
        self.tx.borrow().clone()
    }

    /// Start (or restart) the users fetch. Always passes through Loading
    /// first; an already-pending fetch is not cancelled.
    pub fn load(&self) {
        self.apply(UsersIntent::LoadStarted);

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let intent = match api.fetch_users().await {
                Ok(users) => {
                    debug!(count = users.len(), "user list loaded");
                    UsersIntent::Loaded(users)
                }
                Err(err) => {
                    debug!(%err, "user list load failed");
                    UsersIntent::Failed(err)
                }
            };
            let current = tx.borrow().clone();
            tx.send_replace(UsersReducer::reduce(current, intent));
        });
    }

    /// Retry after an error. Identical to `load` and safe to call from
    /// any state.
    pub fn retry(&self) {
        self.load();
    }

    fn apply(&self, intent: UsersIntent) {
        let current = self.tx.borrow().clone();
        self.tx.send_replace(UsersReducer::reduce(current, intent));
    }
}
