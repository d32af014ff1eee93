//! Fixed top navigation with the mobile menu and theme toggle.
//!
//! The menu closes on link click, on any click outside the nav, and on
//! `Escape`. While it is open the body does not scroll. Past the first few
//! pixels of scroll the header takes the `scrolled` background.

use leptos::prelude::*;

use crate::components::follow_anchor;
use crate::components::theme_toggle::ThemeToggle;
use crate::data::{NAV_LINKS, OWNER};
use crate::state::nav::NavMenu;
use crate::state::page::PageScroll;

#[cfg(feature = "csr")]
const NAV_SELECTOR: &str = ".topnav";

#[cfg(feature = "csr")]
fn install_menu_listeners(nav: RwSignal<NavMenu>) {
    use wasm_bindgen::JsCast;

    let outside_click = window_event_listener(leptos::ev::click, move |ev| {
        if !nav.get_untracked().open {
            return;
        }
        let inside = match ev.target().map(|target| target.dyn_into::<web_sys::Element>()) {
            Some(Ok(element)) => matches!(element.closest(NAV_SELECTOR), Ok(Some(_))),
            _ => false,
        };
        if !inside {
            nav.update(NavMenu::close);
        }
    });
    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        nav.maybe_update(|menu| menu.handle_key(&ev.key()));
    });
    on_cleanup(move || {
        outside_click.remove();
        escape.remove();
    });

    Effect::new(move || {
        let overflow = nav.get().body_overflow();
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        if let Err(err) = body.style().set_property("overflow", overflow) {
            log::debug!("body scroll lock not applied: {err:?}");
        }
    });
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavMenu>>();
    let page = expect_context::<RwSignal<PageScroll>>();

    #[cfg(feature = "csr")]
    install_menu_listeners(nav);

    let links = NAV_LINKS
        .iter()
        .map(|link| {
            let id = link.id;
            let href = format!("#{id}");
            let target = href.clone();
            view! {
                <li>
                    <a
                        href=href
                        class:active=move || page.with(|p| p.is_active(id))
                        on:click=move |ev| {
                            nav.update(NavMenu::close);
                            follow_anchor(&ev, &target);
                        }
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="topnav" class:scrolled=move || page.with(|p| p.nav_scrolled)>
            <a class="topnav__brand" href="#top" on:click=move |ev| follow_anchor(&ev, "#top")>
                {OWNER}
            </a>
            <nav class="topnav__menu" aria-label="Primary">
                <button
                    type="button"
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || nav.get().aria_expanded()
                    on:click=move |_| nav.update(NavMenu::toggle)
                >
                    <span class="nav-toggle__bar"></span>
                    <span class="nav-toggle__bar"></span>
                    <span class="nav-toggle__bar"></span>
                </button>
                <ul class="nav-links" class:nav-open=move || nav.get().open>
                    {links}
                </ul>
            </nav>
            <ThemeToggle/>
        </header>
    }
}
