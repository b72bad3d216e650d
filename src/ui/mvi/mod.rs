//! Model-View-Intent (MVI) primitives.
//!
//! Every screen-facing state in this app is a small MVI feature:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of what the screen shows
//! - **Intent**: a user action or a gateway result
//! - **Reducer**: pure function `(State, Intent) -> State`; the only place
//!   transitions happen
//!
//! View-models feed gateway results in as intents and publish the reduced
//! state through a watch channel.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
