//! Floating scroll-to-top button.

use leptos::prelude::*;

use crate::state::page::PageScroll;

#[cfg(feature = "csr")]
fn scroll_to_top() {
    crate::util::scroll_dom::scroll_to_top();
}

#[cfg(not(feature = "csr"))]
fn scroll_to_top() {}

/// Floating button shown once the page has scrolled past the hero.
#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let page = expect_context::<RwSignal<PageScroll>>();

    view! {
        <button
            id="scroll-top"
            type="button"
            class="scroll-top"
            class:visible=move || page.with(|p| p.show_scroll_top)
            aria-label="Scroll to top"
            on:click=move |_| scroll_to_top()
        >
            "↑"
        </button>
    }
}
