//! # folio
//!
//! Leptos + WASM client for a single-page personal portfolio.
//!
//! The one stateful piece is the theme controller in [`state::theme`]: it
//! resolves the stored, OS, or fallback theme at load, persists explicit
//! toggles, and follows OS color-scheme changes until the user chooses.
//! Everything else is page wiring: mobile navigation, smooth-scroll anchors,
//! hero parallax, active-link highlighting, and one-shot scroll reveals.
//!
//! Browser bindings compile only with the `csr` feature; without it the
//! crate builds natively so the state and geometry modules can be tested.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod state;
pub mod util;
