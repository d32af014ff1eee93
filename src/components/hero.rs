//! Landing hero with scroll parallax and a typed-out subtitle.
//!
//! `#top` sits on a wrapper that never moves; the inner hero is the one
//! translated by the parallax.

use leptos::prelude::*;

use crate::components::follow_anchor;
use crate::data::{OWNER, ROLE, TAGLINE};
use crate::state::page::PageScroll;
use crate::util::scroll::Parallax;
use crate::util::typing::typed_prefix;

#[component]
pub fn Hero() -> impl IntoView {
    let page = expect_context::<RwSignal<PageScroll>>();
    let offset = move || page.with(|p| p.hero);

    let role_len = ROLE.chars().count();
    let typed = RwSignal::new(role_len);
    #[cfg(feature = "csr")]
    crate::util::typing::type_out(typed, role_len);

    view! {
        <div id="top" class="hero-frame">
            <div
                class="hero"
                style:transform=move || offset().map(Parallax::transform).unwrap_or_default()
                style:opacity=move || offset().map(|p| p.opacity.to_string()).unwrap_or_default()
            >
                <p class="hero-greeting">"Hi, I'm"</p>
                <h1 class="hero-title">{OWNER}</h1>
                <p class="hero-subtitle" aria-label=ROLE>{move || typed_prefix(ROLE, typed.get())}</p>
                <p class="hero-tagline">{TAGLINE}</p>
                <div class="hero-actions">
                    <a class="btn btn--primary" href="#projects" on:click=move |ev| follow_anchor(&ev, "#projects")>
                        "View projects"
                    </a>
                    <a class="btn" href="#contact" on:click=move |ev| follow_anchor(&ev, "#contact")>
                        "Get in touch"
                    </a>
                </div>
            </div>
        </div>
    }
}
