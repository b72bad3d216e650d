//! Shared test utilities: a scriptable fake gateway and sample data.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::sync::Semaphore;

use todoview::api::{Address, ApiError, Company, Geo, Todo, TodoApi, User};
use todoview::ui::todos::TodoListState;
use todoview::ui::users::UserListState;

/// Fake `TodoApi` that answers from scripted result queues.
///
/// With a gate attached, every call blocks until the test releases a
/// permit, which makes "state is Loading while the fetch is pending"
/// observable without sleeps.
pub struct FakeApi {
    users: Mutex<VecDeque<Result<Vec<User>, ApiError>>>,
    todos: Mutex<VecDeque<Result<Vec<Todo>, ApiError>>>,
    todo_calls: Mutex<Vec<u32>>,
    gate: Option<Arc<Semaphore>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(VecDeque::new()),
            todos: Mutex::new(VecDeque::new()),
            todo_calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Attach a zero-permit gate; `release` lets one call proceed.
    pub fn gated() -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let mut api = Self::new();
        api.gate = Some(Arc::clone(&gate));
        (api, gate)
    }

    pub fn script_users(&self, result: Result<Vec<User>, ApiError>) {
        self.users.lock().unwrap().push_back(result);
    }

    pub fn script_todos(&self, result: Result<Vec<Todo>, ApiError>) {
        self.todos.lock().unwrap().push_back(result);
    }

    /// The user ids `fetch_todos` was called with, in order.
    pub fn todo_calls(&self) -> Vec<u32> {
        self.todo_calls.lock().unwrap().clone()
    }
}

impl TodoApi for FakeApi {
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        self.users
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("users script exhausted".to_string())))
    }

    async fn fetch_todos(&self, user_id: u32) -> Result<Vec<Todo>, ApiError> {
        self.todo_calls.lock().unwrap().push(user_id);
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        self.todos
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("todos script exhausted".to_string())))
    }
}

pub fn sample_user(id: u32, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: "Bret".to_string(),
        email: "Sincere@april.biz".to_string(),
        phone: "1-770-736-8031 x56442".to_string(),
        website: "hildegard.org".to_string(),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}

pub fn sample_todo(id: u32, user_id: u32, completed: bool) -> Todo {
    Todo {
        id,
        user_id,
        title: format!("todo #{id}"),
        completed,
    }
}

/// Await the next non-Loading user list state.
pub async fn user_terminal_state(rx: &mut watch::Receiver<UserListState>) -> UserListState {
    loop {
        let state = rx.borrow().clone();
        if !state.is_loading() {
            return state;
        }
        rx.changed().await.expect("user list channel closed");
    }
}

/// Await the next non-Loading todo list state.
pub async fn todo_terminal_state(rx: &mut watch::Receiver<TodoListState>) -> TodoListState {
    loop {
        let state = rx.borrow().clone();
        if !state.is_loading() {
            return state;
        }
        rx.changed().await.expect("todo list channel closed");
    }
}
