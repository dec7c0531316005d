//! Browser-facing helpers behind the pages.
//!
//! `guard` turns `portal` access decisions into navigation; `storage` backs
//! the token store with `localStorage`.

pub mod guard;
pub mod storage;
