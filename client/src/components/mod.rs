//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome shared by several pages while reading
//! session state from Leptos context providers.

pub mod guarded;
pub mod portal_header;
