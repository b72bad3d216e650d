use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NavIntent {
    /// A user was picked from the list.
    SelectUser { user_id: u32, user_name: String },
    /// Explicit back affordance (back button in the top bar).
    GoBack,
    /// System-level back signal. Equivalent to `GoBack` on the todo
    /// screen, suppressed entirely on the user list.
    BackPressed,
}

impl Intent for NavIntent {}
