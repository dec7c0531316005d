//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it declares its access policy,
//! loads data through `portal::services`, and delegates shared chrome to
//! `components`.

pub mod admin;
pub mod admin_categories;
pub mod admin_history;
pub mod admin_media;
pub mod admin_tutors;
pub mod home;
pub mod sign_in;
pub mod signup;
pub mod student;
pub mod tutor;
