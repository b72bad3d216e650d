//! Top-level UI state: owns the view-models and the cursor positions.

use std::sync::Arc;

use crate::api::TodoApi;
use crate::ui::nav::NavState;
use crate::ui::todos::TodoListState;
use crate::ui::users::UserListState;
use crate::vm::{NavModel, UserListViewModel};

pub struct App<A: TodoApi> {
    users: UserListViewModel<A>,
    nav: NavModel<A>,
    /// Cursor into the loaded user list.
    selected_user: usize,
    /// Cursor into the loaded todo list (drives scrolling).
    selected_todo: usize,
    should_quit: bool,
}

impl<A: TodoApi> App<A> {
    /// Builds the view-models and starts the initial users fetch. Must be
    /// called inside a tokio runtime.
    pub fn new(api: Arc<A>) -> Self {
        Self {
            users: UserListViewModel::new(Arc::clone(&api)),
            nav: NavModel::new(api),
            selected_user: 0,
            selected_todo: 0,
            should_quit: false,
        }
    }

    pub fn user_list_state(&self) -> UserListState {
        self.users.state()
    }

    pub fn todo_list_state(&self) -> TodoListState {
        self.nav.todos().state()
    }

    pub fn nav_state(&self) -> NavState {
        self.nav.state()
    }

    pub fn selected_user(&self) -> usize {
        self.selected_user
    }

    pub fn selected_todo(&self) -> usize {
        self.selected_todo
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Move the active list's cursor one row up.
    pub fn move_up(&mut self) {
        match self.nav.state() {
            NavState::UserList => {
                self.selected_user = self.selected_user.saturating_sub(1);
            }
            NavState::TodosFor { .. } => {
                self.selected_todo = self.selected_todo.saturating_sub(1);
            }
        }
    }

    /// Move the active list's cursor one row down, clamped to the loaded
    /// list's length.
    pub fn move_down(&mut self) {
        match self.nav.state() {
            NavState::UserList => {
                let len = self.users.state().users().map_or(0, <[_]>::len);
                if self.selected_user + 1 < len {
                    self.selected_user += 1;
                }
            }
            NavState::TodosFor { .. } => {
                let len = self.nav.todos().state().todos().map_or(0, <[_]>::len);
                if self.selected_todo + 1 < len {
                    self.selected_todo += 1;
                }
            }
        }
    }

    /// Open the todo screen for the user under the cursor. No-op unless
    /// the user list is loaded and visible.
    pub fn open_selected(&mut self) {
        if !self.nav.state().is_user_list() {
            return;
        }
        if let UserListState::Loaded(users) = self.users.state() {
            if let Some(user) = users.get(self.selected_user) {
                self.selected_todo = 0;
                self.nav.select_user(user);
            }
        }
    }

    /// System back signal: returns to the user list, suppressed when
    /// already there.
    pub fn back(&mut self) {
        self.nav.back_pressed();
    }

    /// Retry affordance for whichever screen shows an error.
    pub fn retry(&mut self) {
        match self.nav.state() {
            NavState::UserList => {
                self.selected_user = 0;
                self.users.retry();
            }
            NavState::TodosFor { user_id, .. } => {
                self.selected_todo = 0;
                self.nav.todos().load(user_id);
            }
        }
    }
}
