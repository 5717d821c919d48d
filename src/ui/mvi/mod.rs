//! Model-View-Intent (MVI) primitives.
//!
//! Unidirectional data flow for the screen: every user action or system
//! event becomes an intent, a pure reducer folds it into new state, and the
//! view is drawn from state alone.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
