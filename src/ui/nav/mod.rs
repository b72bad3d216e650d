//! Screen navigation feature: which of the two screens is visible.

mod intent;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::NavState;
