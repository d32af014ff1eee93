//! Mobile navigation menu state.
//!
//! DESIGN
//! ======
//! Kept separate from theme state so the navbar can render `aria-expanded`
//! and the body scroll lock straight from one value.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Close on `Escape`. Returns `true` when the key closed the menu.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.close();
            return true;
        }
        false
    }

    pub const fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// `overflow` value for `<body>`; scrolling is locked while the menu is open.
    pub const fn body_overflow(self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}
