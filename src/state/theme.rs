//! Theme preference controller.
//!
//! DESIGN
//! ======
//! One controller instance owns the current theme and mirrors it into three
//! collaborators: a preference store, the ambient OS color-scheme signal, and
//! the document root. Each collaborator is a trait so the browser bindings in
//! `util::theme_dom` stay thin and tests can substitute in-memory fakes.
//!
//! Resolution order is stored preference, then OS preference, then the
//! configured fallback. A resolved default is never written back; only an
//! explicit toggle persists, so OS change notifications keep applying until
//! the user makes a choice.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::config::ThemeConfig;

/// Named visual variant applied to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    /// Literal form used for the root attribute and the stored preference.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Icon shown on the toggle control; it depicts the theme a click switches to.
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }

    /// Accessible label for the toggle control.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme name: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Failures reported by a [`PreferenceStore`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("failed to read preference: {0}")]
    Read(String),
    #[error("failed to write preference: {0}")]
    Write(String),
}

/// Durable key-value slot holding the raw stored theme name.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&self, value: &str) -> Result<(), StoreError>;
}

/// OS/browser color-scheme signal.
pub trait AmbientScheme {
    /// `None` when the environment cannot report a preference.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Document element that carries the theme marker.
pub trait ThemeRoot {
    fn set_theme(&self, theme: ThemeName);

    /// Mark the root as transitioning for `duration`. Purely cosmetic.
    fn begin_transition(&self, duration: Duration);
}

/// Where a resolved theme came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    Ambient,
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub theme: ThemeName,
    pub source: ThemeSource,
}

/// Pick the effective theme: stored beats ambient beats fallback.
pub fn resolve(stored: Option<ThemeName>, prefers_dark: Option<bool>, fallback: ThemeName) -> Resolution {
    if let Some(theme) = stored {
        return Resolution { theme, source: ThemeSource::Stored };
    }
    if let Some(prefers_dark) = prefers_dark {
        return Resolution { theme: ThemeName::from_prefers_dark(prefers_dark), source: ThemeSource::Ambient };
    }
    Resolution { theme: fallback, source: ThemeSource::Fallback }
}

/// Owns the page's theme state for its whole lifetime.
pub struct ThemeController<S, A, R> {
    store: S,
    ambient: A,
    root: R,
    fallback: ThemeName,
    transition: Duration,
    current: ThemeName,
    /// Set once the user toggles, even if persisting that choice failed.
    chosen_this_session: bool,
}

impl<S, A, R> ThemeController<S, A, R>
where
    S: PreferenceStore,
    A: AmbientScheme,
    R: ThemeRoot,
{
    pub fn new(store: S, ambient: A, root: R, config: &ThemeConfig) -> Self {
        Self {
            store,
            ambient,
            root,
            fallback: config.fallback,
            transition: config.transition,
            current: config.fallback,
            chosen_this_session: false,
        }
    }

    pub fn current(&self) -> ThemeName {
        self.current
    }

    /// The OS scheme source, for wiring its change notifications back here.
    pub fn ambient(&self) -> &A {
        &self.ambient
    }

    /// Resolve the effective theme at page load and render it.
    pub fn initialize(&mut self) -> ThemeName {
        let resolution = resolve(self.stored_preference(), self.ambient.prefers_dark(), self.fallback);
        log::debug!("theme resolved to {} ({:?})", resolution.theme, resolution.source);
        self.apply(resolution.theme);
        resolution.theme
    }

    /// Flip the theme, persist the choice, and render it.
    ///
    /// A failed write is logged and otherwise ignored; the visual change
    /// still happens.
    pub fn toggle(&mut self) -> ThemeName {
        let next = self.current.toggled();
        self.root.begin_transition(self.transition);
        if let Err(err) = self.store.save(next.as_str()) {
            log::warn!("theme preference not persisted: {err}");
        }
        self.chosen_this_session = true;
        self.apply(next);
        next
    }

    pub fn apply(&mut self, theme: ThemeName) {
        self.root.set_theme(theme);
        self.current = theme;
    }

    /// Handle an OS color-scheme change. Explicit choices always win.
    pub fn on_ambient_change(&mut self, prefers_dark: bool) -> ThemeName {
        if self.has_explicit_preference() {
            log::debug!("ignoring OS color-scheme change; explicit preference is {}", self.current);
            return self.current;
        }
        let theme = ThemeName::from_prefers_dark(prefers_dark);
        self.apply(theme);
        theme
    }

    pub fn has_explicit_preference(&self) -> bool {
        self.chosen_this_session || self.stored_preference().is_some()
    }

    fn stored_preference(&self) -> Option<ThemeName> {
        match self.store.load() {
            Ok(Some(raw)) => match raw.parse::<ThemeName>() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    log::warn!("ignoring stored theme: {err}");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                log::warn!("theme preference unreadable: {err}");
                None
            }
        }
    }
}
