//! Scroll-derived page state: active nav link, hero parallax, nav
//! background, scroll-to-top.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::util::scroll::{Highlight, Parallax, SectionBounds, highlight, nav_scrolled, parallax, show_scroll_top};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageScroll {
    pub active_section: Option<String>,
    /// Last hero offset applied; `None` until the first sample inside the hero.
    pub hero: Option<Parallax>,
    pub show_scroll_top: bool,
    pub nav_scrolled: bool,
}

impl PageScroll {
    /// Fold one scroll sample into the state.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64, sections: &[SectionBounds]) {
        match highlight(scroll_y, sections) {
            Highlight::Clear => self.active_section = None,
            Highlight::Keep => {}
            Highlight::Section(id) => {
                if self.active_section.as_deref() != Some(id) {
                    self.active_section = Some(id.to_owned());
                }
            }
        }
        if let Some(hero) = parallax(scroll_y, viewport_height) {
            self.hero = Some(hero);
        }
        self.show_scroll_top = show_scroll_top(scroll_y);
        self.nav_scrolled = nav_scrolled(scroll_y);
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section.as_deref() == Some(id)
    }
}
