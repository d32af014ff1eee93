//! DOM side of scroll handling: sampling, anchor scrolling, scroll-to-top.
//!
//! ARCHITECTURE
//! ============
//! A single passive `scroll` listener schedules at most one sample per
//! animation frame. Each sample reads the scroll offset, viewport height, and
//! `section[id]` extents, then folds them into the shared `PageScroll` signal.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::state::page::PageScroll;
use crate::util::scroll::{Anchor, SectionBounds, anchor_scroll_top, anchor_target};

const SECTION_SELECTOR: &str = "section[id]";
const HEADER_SELECTOR: &str = ".topnav";

fn section_bounds(document: &Document) -> Vec<SectionBounds> {
    let Ok(list) = document.query_selector_all(SECTION_SELECTOR) else {
        return Vec::new();
    };
    let mut sections = Vec::new();
    for i in 0..list.length() {
        if let Some(node) = list.item(i)
            && let Ok(section) = node.dyn_into::<HtmlElement>()
        {
            sections.push(SectionBounds {
                id: section.id(),
                top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            });
        }
    }
    sections
}

fn header_height(document: &Document) -> f64 {
    match document.query_selector(HEADER_SELECTOR) {
        Ok(Some(header)) => header
            .dyn_into::<HtmlElement>()
            .map_or(0.0, |header| f64::from(header.offset_height())),
        _ => 0.0,
    }
}

fn sample(window: &Window, page: RwSignal<PageScroll>) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .map_or(0.0, |height| height.as_f64().unwrap_or(0.0));
    let sections = window.document().map(|d| section_bounds(&d)).unwrap_or_default();
    page.update(|p| p.on_scroll(scroll_y, viewport_height, &sections));
}

/// Keep `page` in sync with the window scroll position for the page lifetime.
pub fn track_scroll(page: RwSignal<PageScroll>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let ticking = Rc::new(Cell::new(false));
    let frame_window = window.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        if ticking.replace(true) {
            return;
        }
        let done = Rc::clone(&ticking);
        let sample_window = frame_window.clone();
        let frame = Closure::once_into_js(move || {
            done.set(false);
            sample(&sample_window, page);
        });
        if frame_window.request_animation_frame(frame.unchecked_ref()).is_err() {
            ticking.set(false);
            sample(&frame_window, page);
        }
    }) as Box<dyn FnMut()>);

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("scroll listener not installed: {err:?}");
        return;
    }
    on_scroll.forget();

    sample(&window, page);
}

fn smooth_scroll(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smoothly scroll to the element an in-page `href` points at.
///
/// Returns `false` when `href` is not an in-page anchor or its target is
/// missing, leaving default navigation in place.
pub fn scroll_to_anchor(href: &str) -> bool {
    let id = match anchor_target(href) {
        None => return false,
        Some(Anchor::Top) => {
            scroll_to_top();
            return true;
        }
        Some(Anchor::Element(id)) => id,
    };
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return false;
    };
    let page_y = window.scroll_y().unwrap_or(0.0);
    let top = anchor_scroll_top(target.get_bounding_client_rect().top(), page_y, header_height(&document));
    smooth_scroll(&window, top);
    true
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        smooth_scroll(&window, 0.0);
    }
}
