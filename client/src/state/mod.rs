//! Reactive application state.
//!
//! DESIGN
//! ======
//! Plain data structs wrapped in `RwSignal`s by the components that own
//! them, so the transitions stay testable without a reactive runtime.

pub mod auth;
pub mod listing;
