//! Scroll and pointer geometry for anchors, hero parallax, nav state, and
//! project card tilt.
//!
//! These are pure functions over numbers read from the DOM so the listeners
//! in `app` stay small and the thresholds are testable natively.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Extra space left between the fixed header and an anchor target.
pub const ANCHOR_EXTRA_OFFSET: f64 = 20.0;
pub const PARALLAX_FACTOR: f64 = 0.3;
pub const PARALLAX_FADE: f64 = 0.5;
/// A section counts as active this many pixels before its top reaches the viewport top.
pub const SECTION_LEAD: f64 = 150.0;
pub const HIGHLIGHT_CLEAR_BELOW: f64 = 100.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
/// The nav gains its `scrolled` styling past this offset.
pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;

pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
/// Pixels of pointer travel per degree of rotation.
pub const TILT_DAMPING: f64 = 20.0;
pub const TILT_HOVER_SCALE: f64 = 1.02;

/// Fragment that always means the document origin.
pub const TOP_ANCHOR: &str = "top";

/// Where an in-page link should scroll to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor<'a> {
    /// `#top`. Resolved to offset zero without measuring any element, since
    /// the hero that sits there is translated by the parallax.
    Top,
    Element(&'a str),
}

/// Target of an in-page `href`, or `None` for `#`, empty, or external links.
pub fn anchor_target(href: &str) -> Option<Anchor<'_>> {
    match href.strip_prefix('#')? {
        "" => None,
        TOP_ANCHOR => Some(Anchor::Top),
        id => Some(Anchor::Element(id)),
    }
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn anchor_scroll_top(rect_top: f64, page_y: f64, header_height: f64) -> f64 {
    rect_top + page_y - header_height - ANCHOR_EXTRA_OFFSET
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub translate_y: f64,
    pub opacity: f64,
}

impl Parallax {
    pub fn transform(self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

/// Hero offset for the current scroll position, or `None` once the hero
/// has scrolled past and the last applied value should stay.
pub fn parallax(scroll_y: f64, viewport_height: f64) -> Option<Parallax> {
    if viewport_height <= 0.0 || scroll_y >= viewport_height {
        return None;
    }
    Some(Parallax {
        translate_y: scroll_y * PARALLAX_FACTOR,
        opacity: 1.0 - (scroll_y / viewport_height) * PARALLAX_FADE,
    })
}

/// Document-space extent of a `section[id]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// What the nav highlight should do after a scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight<'a> {
    /// Near the top of the page; no link is active.
    Clear,
    /// Between sections; leave the current highlight alone.
    Keep,
    Section(&'a str),
}

pub fn highlight(scroll_y: f64, sections: &[SectionBounds]) -> Highlight<'_> {
    if scroll_y < HIGHLIGHT_CLEAR_BELOW {
        return Highlight::Clear;
    }
    // Later sections win when ranges overlap.
    sections
        .iter()
        .rev()
        .find(|section| {
            let top = section.top - SECTION_LEAD;
            scroll_y > top && scroll_y <= top + section.height
        })
        .map_or(Highlight::Keep, |section| Highlight::Section(&section.id))
}

pub fn show_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD
}

/// 3D hover tilt of a project card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl Tilt {
    /// Flat and unscaled; applied when the pointer leaves the card.
    pub const REST: Tilt = Tilt { rotate_x: 0.0, rotate_y: 0.0, scale: 1.0 };

    pub fn transform(self) -> String {
        format!(
            "perspective({TILT_PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg) scale({})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}

/// Tilt for a pointer at (`x`, `y`) relative to the card's top-left corner.
/// The card leans away from the pointer, flat at its center.
pub fn tilt(x: f64, y: f64, width: f64, height: f64) -> Tilt {
    Tilt {
        rotate_x: (y - height / 2.0) / TILT_DAMPING,
        rotate_y: (width / 2.0 - x) / TILT_DAMPING,
        scale: TILT_HOVER_SCALE,
    }
}
