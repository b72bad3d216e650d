use crate::api::{ApiError, Todo};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TodosIntent {
    /// A fetch for `user_id` was initiated.
    LoadStarted { user_id: u32 },
    /// The gateway answered successfully.
    Loaded(Vec<Todo>),
    /// The gateway call failed.
    Failed(ApiError),
}

impl Intent for TodosIntent {}
