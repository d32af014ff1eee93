//! Dark/light toggle button.

use leptos::prelude::*;

use crate::app::ThemeActions;
use crate::state::theme::ThemeName;

/// Button showing the theme a click would switch to.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeName>>();
    let actions = expect_context::<ThemeActions>();

    view! {
        <button
            type="button"
            class="theme-toggle"
            title=move || theme.get().toggle_label()
            aria-label=move || theme.get().toggle_label()
            on:click=move |_| actions.toggle.run(())
        >
            <span class="theme-toggle__icon" aria-hidden="true">
                {move || theme.get().toggle_icon()}
            </span>
        </button>
    }
}
