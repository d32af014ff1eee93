//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `nav`, `page`) so components depend on
//! small focused models and the logic stays testable without a browser.

pub mod nav;
pub mod page;
pub mod theme;
