//! Browser bindings for the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `localStorage` backs the preference, `matchMedia` reports the OS color
//! scheme, and `<html>` carries the `data-theme` marker that the stylesheet
//! keys all color variables on. Every binding holds an `Option` of its DOM
//! handle and degrades to a no-op when the browser withholds it.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MediaQueryList, MediaQueryListEvent, Storage};

use crate::config::{FALLBACK_ATTRIBUTE, STORAGE_KEY_ATTRIBUTE, ThemeConfig};
use crate::state::theme::{AmbientScheme, PreferenceStore, StoreError, ThemeController, ThemeName, ThemeRoot};

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub type BrowserThemeController = ThemeController<LocalStorageStore, MediaQueryScheme, DocumentRoot>;

fn root_element() -> Option<Element> {
    web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element())
}

/// Read the theme configuration, applying any overrides set on `<html>`.
pub fn page_config() -> ThemeConfig {
    let root = root_element();
    let attr = |name: &str| root.as_ref().and_then(|el| el.get_attribute(name));
    ThemeConfig::default().with_overrides(
        attr(STORAGE_KEY_ATTRIBUTE).as_deref(),
        attr(FALLBACK_ATTRIBUTE).as_deref(),
    )
}

/// Build the controller wired to the live document.
pub fn browser_controller(config: &ThemeConfig) -> BrowserThemeController {
    ThemeController::new(
        LocalStorageStore::open(config.storage_key.clone()),
        MediaQueryScheme::open(),
        DocumentRoot::html(config),
        config,
    )
}

pub struct LocalStorageStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalStorageStore {
    pub fn open(key: String) -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                // Thrown when storage is disabled for the origin.
                log::warn!("localStorage access denied: {err:?}");
                None
            }
            None => None,
        };
        Self { storage, key }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.get_item(&self.key).map_err(|err| StoreError::Read(format!("{err:?}")))
    }

    fn save(&self, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(&self.key, value)
            .map_err(|err| StoreError::Write(format!("{err:?}")))
    }
}

pub struct MediaQueryScheme {
    query: Option<MediaQueryList>,
}

impl MediaQueryScheme {
    pub fn open() -> Self {
        let query = match web_sys::window().map(|w| w.match_media(PREFERS_DARK_QUERY)) {
            Some(Ok(query)) => query,
            Some(Err(err)) => {
                log::debug!("matchMedia unsupported: {err:?}");
                None
            }
            None => None,
        };
        Self { query }
    }

    /// Call `on_change` with the new "prefers dark" value on every OS
    /// color-scheme change. The listener lives for the rest of the page view.
    pub fn subscribe(&self, on_change: impl Fn(bool) + 'static) {
        let Some(query) = &self.query else {
            return;
        };
        let callback = Closure::wrap(
            Box::new(move |event: MediaQueryListEvent| on_change(event.matches())) as Box<dyn FnMut(MediaQueryListEvent)>
        );
        if let Err(err) = query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
            log::warn!("color-scheme listener not installed: {err:?}");
            return;
        }
        callback.forget();
    }
}

impl AmbientScheme for MediaQueryScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.query.as_ref().map(MediaQueryList::matches)
    }
}

pub struct DocumentRoot {
    element: Option<Element>,
    attribute: String,
    transition_class: String,
}

impl DocumentRoot {
    pub fn html(config: &ThemeConfig) -> Self {
        Self {
            element: root_element(),
            attribute: config.attribute.clone(),
            transition_class: config.transition_class.clone(),
        }
    }
}

impl ThemeRoot for DocumentRoot {
    fn set_theme(&self, theme: ThemeName) {
        let Some(element) = &self.element else {
            return;
        };
        if let Err(err) = element.set_attribute(&self.attribute, theme.as_str()) {
            log::warn!("failed to set {}: {err:?}", self.attribute);
        }
    }

    fn begin_transition(&self, duration: Duration) {
        let Some(element) = self.element.clone() else {
            return;
        };
        let class = self.transition_class.clone();
        if let Err(err) = element.class_list().add_1(&class) {
            log::debug!("transition class not added: {err:?}");
            return;
        }
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            if let Err(err) = element.class_list().remove_1(&class) {
                log::debug!("transition class not removed: {err:?}");
            }
        })
        .forget();
    }
}
