//! One-shot scroll reveal and skill-bar fill.
//!
//! Elements matching [`REVEAL_SELECTOR`] get the `revealed` class the first
//! time they intersect the viewport, staggered by their position in the
//! observer batch. Skill bars animate from zero to their inline width once
//! half visible. Both observers stop watching an element after it fires.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const REVEAL_SELECTOR: &str =
    ".section, .project-card, .edu-card, .ach-card, .skill-group, .contact-card, .bar-row";
pub const REVEALED_CLASS: &str = "revealed";
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 50;

pub const SKILL_BAR_SELECTOR: &str = ".bar-fill";
pub const SKILL_BAR_THRESHOLD: f64 = 0.5;
pub const SKILL_BAR_DELAY_MS: u32 = 100;

/// Delay before revealing the `index`-th entry of an observer batch.
pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(REVEAL_STAGGER_MS)
}

#[cfg(feature = "csr")]
mod dom {
    use gloo_timers::callback::Timeout;
    use js_sys::Array;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::*;

    type EntryHandler = Box<dyn FnMut(Array, IntersectionObserver)>;

    /// Observe every element matching `selector`, calling `on_visible` with
    /// the element and its index in the batch the first time it intersects.
    fn observe_once(
        document: &Document,
        selector: &str,
        threshold: f64,
        root_margin: Option<&str>,
        mut on_visible: impl FnMut(Element, usize) + 'static,
    ) {
        let targets = match document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("reveal selector {selector:?} rejected: {err:?}");
                return;
            }
        };

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for (index, entry) in entries.iter().enumerate() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                on_visible(target, index);
            }
        }) as EntryHandler);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("IntersectionObserver unavailable: {err:?}");
                return;
            }
        };
        // Observers live for the whole page view.
        callback.forget();

        for i in 0..targets.length() {
            if let Some(node) = targets.item(i)
                && let Ok(element) = node.dyn_into::<Element>()
            {
                observer.observe(&element);
            }
        }
    }

    /// Install the reveal and skill-bar observers on the current document.
    pub fn observe_page(document: &Document) {
        observe_once(document, REVEAL_SELECTOR, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |element, index| {
            Timeout::new(stagger_delay(index), move || {
                if let Err(err) = element.class_list().add_1(REVEALED_CLASS) {
                    log::debug!("reveal class not added: {err:?}");
                }
            })
            .forget();
        });

        observe_once(document, SKILL_BAR_SELECTOR, SKILL_BAR_THRESHOLD, None, |element, _| {
            let Ok(fill) = element.dyn_into::<HtmlElement>() else {
                return;
            };
            let style = fill.style();
            let target_width = style.get_property_value("width").unwrap_or_default();
            if let Err(err) = style.set_property("width", "0") {
                log::debug!("skill bar reset failed: {err:?}");
                return;
            }
            Timeout::new(SKILL_BAR_DELAY_MS, move || {
                if let Err(err) = fill.style().set_property("width", &target_width) {
                    log::debug!("skill bar fill failed: {err:?}");
                }
            })
            .forget();
        });
    }
}

#[cfg(feature = "csr")]
pub use dom::observe_page;
