//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from component logic. Geometry
//! and thresholds are plain functions; DOM bindings compile only with `csr`.

pub mod keys;
pub mod reveal;
pub mod scroll;
#[cfg(feature = "csr")]
pub mod scroll_dom;
#[cfg(feature = "csr")]
pub mod theme_dom;
pub mod typing;
