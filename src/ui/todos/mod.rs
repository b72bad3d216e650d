//! Todo list feature: per-user Loading → Loaded/Failed over the `/todos`
//! fetch. Not auto-started — replaced wholesale each time a user is picked.

mod intent;
mod reducer;
mod state;

pub use intent::TodosIntent;
pub use reducer::{TodosReducer, MSG_LOAD_FAILED, MSG_NO_TODOS};
pub use state::TodoListState;
