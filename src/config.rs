//! Theme configuration defaults and page-level overrides.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page can override the storage key and fallback theme through
//! attributes on `<html>` so the same script serves differently keyed
//! deployments. Invalid overrides are logged and ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::theme::ThemeName;

pub const DEFAULT_STORAGE_KEY: &str = "portfolio-theme";

/// `<html>` attribute that overrides the storage key.
pub const STORAGE_KEY_ATTRIBUTE: &str = "data-theme-storage-key";

/// `<html>` attribute that overrides the fallback theme.
pub const FALLBACK_ATTRIBUTE: &str = "data-theme-fallback";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub fallback: ThemeName,
    /// Root attribute carrying the theme marker.
    pub attribute: String,
    /// Root class present while colors animate between themes.
    pub transition_class: String,
    pub transition: Duration,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            fallback: ThemeName::Dark,
            attribute: "data-theme".to_owned(),
            transition_class: "theme-transitioning".to_owned(),
            transition: Duration::from_millis(500),
        }
    }
}

impl ThemeConfig {
    /// Apply page-provided overrides on top of `self`.
    #[must_use]
    pub fn with_overrides(mut self, storage_key: Option<&str>, fallback: Option<&str>) -> Self {
        if let Some(key) = storage_key {
            let key = key.trim();
            if key.is_empty() {
                log::warn!("ignoring empty {STORAGE_KEY_ATTRIBUTE}");
            } else {
                self.storage_key = key.to_owned();
            }
        }
        if let Some(raw) = fallback {
            match raw.trim().parse::<ThemeName>() {
                Ok(theme) => self.fallback = theme,
                Err(err) => log::warn!("ignoring {FALLBACK_ATTRIBUTE}: {err}"),
            }
        }
        self
    }
}
