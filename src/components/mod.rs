//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared signals from context (`ThemeName`, `NavMenu`,
//! `PageScroll`) and render them; browser listeners live in `util` and `app`.
//! The event helpers below have no-op twins so components render natively.

pub mod hero;
pub mod navbar;
pub mod scroll_top;
pub mod sections;
pub mod theme_toggle;

/// Smooth-scroll an in-page link instead of jumping.
#[cfg(feature = "csr")]
pub(crate) fn follow_anchor(ev: &leptos::ev::MouseEvent, href: &str) {
    if crate::util::scroll_dom::scroll_to_anchor(href) {
        ev.prevent_default();
    }
}

#[cfg(not(feature = "csr"))]
pub(crate) fn follow_anchor(_ev: &leptos::ev::MouseEvent, _href: &str) {}

/// Click the focused card on Enter or Space. Keys pressed on a link or
/// button inside the card keep their own behavior.
#[cfg(feature = "csr")]
pub(crate) fn activate_on_key(ev: leptos::ev::KeyboardEvent) {
    use wasm_bindgen::JsCast;

    if !crate::util::keys::is_activation_key(&ev.key()) {
        return;
    }
    let (Some(target), Some(card)) = (ev.target(), ev.current_target()) else {
        return;
    };
    if !js_sys::Object::is(&target, &card) {
        return;
    }
    if let Ok(card) = card.dyn_into::<web_sys::HtmlElement>() {
        ev.prevent_default();
        card.click();
    }
}

#[cfg(not(feature = "csr"))]
pub(crate) fn activate_on_key(_ev: leptos::ev::KeyboardEvent) {}

/// Tilt for the card under the pointer, measured against its current box.
#[cfg(feature = "csr")]
pub(crate) fn pointer_tilt(ev: &leptos::ev::MouseEvent) -> Option<crate::util::scroll::Tilt> {
    use wasm_bindgen::JsCast;

    let Ok(card) = ev.current_target()?.dyn_into::<web_sys::Element>() else {
        return None;
    };
    let rect = card.get_bounding_client_rect();
    Some(crate::util::scroll::tilt(
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
        rect.width(),
        rect.height(),
    ))
}

#[cfg(not(feature = "csr"))]
pub(crate) fn pointer_tilt(_ev: &leptos::ev::MouseEvent) -> Option<crate::util::scroll::Tilt> {
    None
}
