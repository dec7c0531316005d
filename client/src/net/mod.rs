//! Network layer.
//!
//! Wraps the browser `fetch` API behind the `portal` transport seam; all
//! request shaping and response interpretation happens in `portal`.

pub mod transport;
