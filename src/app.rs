//! Root application component and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root owns the page's single theme controller and exposes it to the
//! toggle button through [`ThemeActions`]. `ThemeName`, `NavMenu`, and
//! `PageScroll` signals are provided as context for the components.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::sections::{About, Achievements, Contact, Education, Footer, Projects, Skills};
use crate::data::{OWNER, ROLE};
use crate::state::nav::NavMenu;
use crate::state::page::PageScroll;
use crate::state::theme::ThemeName;

/// Theme operations available to components.
#[derive(Clone, Copy)]
pub struct ThemeActions {
    pub toggle: Callback<()>,
}

/// Create the page's theme controller, render the resolved theme, and
/// follow OS color-scheme changes for the rest of the page view.
#[cfg(feature = "csr")]
fn install_theme(theme: RwSignal<ThemeName>) -> ThemeActions {
    use crate::util::theme_dom::{browser_controller, page_config};

    let config = page_config();
    let mut controller = browser_controller(&config);
    theme.set(controller.initialize());
    let controller = StoredValue::new_local(controller);

    // Notifications fire after this borrow ends, so the handler can take
    // the controller mutably.
    controller.with_value(|c| {
        c.ambient().subscribe(move |prefers_dark| {
            if let Some(next) = controller.try_update_value(|c| c.on_ambient_change(prefers_dark)) {
                theme.set(next);
            }
        });
    });

    ThemeActions {
        toggle: Callback::new(move |()| {
            if let Some(next) = controller.try_update_value(|c| c.toggle()) {
                theme.set(next);
            }
        }),
    }
}

/// Without a browser the theme only lives in the signal.
#[cfg(not(feature = "csr"))]
fn install_theme(theme: RwSignal<ThemeName>) -> ThemeActions {
    ThemeActions {
        toggle: Callback::new(move |()| theme.update(|t| *t = t.toggled())),
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeName::default());
    let nav = RwSignal::new(NavMenu::default());
    let page = RwSignal::new(PageScroll::default());

    provide_context(theme);
    provide_context(nav);
    provide_context(page);
    provide_context(install_theme(theme));

    #[cfg(feature = "csr")]
    crate::util::scroll_dom::track_scroll(page);

    view! {
        <Title text=format!("{OWNER} · {ROLE}")/>
        <Meta name="color-scheme" content="dark light"/>

        <Navbar/>
        <main>
            <Hero/>
            <About/>
            <Skills/>
            <Projects/>
            <Education/>
            <Achievements/>
            <Contact/>
        </main>
        <Footer/>
        <ScrollTopButton/>
    }
}
