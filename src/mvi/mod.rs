//! Unidirectional state flow for the relief store.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! A view reads a [`State`] snapshot, user actions become [`Intent`]s, and a
//! [`Reducer`] folds each intent into the next snapshot.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
