//! Light/dark theme preference.
//!
//! The preference is read once at startup and written back on every toggle.
//! Dark is the default: an absent key, or any stored value other than
//! `"light"`, means dark. Light is expressed as `data-theme="light"` on the
//! `<html>` element; dark is the attribute's absence.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failed write is logged and the page still
//! switches theme, so the preference may not survive a reload in private
//! browsing modes that refuse local storage.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
use web_sys::Element;

use crate::consts::{MOON_ICON, SUN_ICON};
#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::consts::{THEME_ATTR, THEME_TOGGLE_ID};
#[cfg(feature = "hydrate")]
use crate::dom;
#[cfg(feature = "hydrate")]
use crate::error::MountError;
use crate::error::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Only `"light"` selects light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle control markup: the sun while light is active, the moon while dark.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => SUN_ICON,
            Self::Dark => MOON_ICON,
        }
    }

    /// Value of the root `data-theme` attribute, or `None` to remove it.
    #[must_use]
    pub fn root_attribute(self) -> Option<&'static str> {
        match self {
            Self::Light => Some("light"),
            Self::Dark => None,
        }
    }
}

/// Key/value storage for the preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Owns the current theme and its persistence.
pub struct ThemeController<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the stored preference once.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = Theme::from_stored(store.load(&key).as_deref());
        Self { store, key, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it.
    ///
    /// The in-memory theme flips even when the write fails.
    pub fn toggle(&mut self) -> Result<Theme, StorageError> {
        self.current = self.current.toggled();
        self.store.save(&self.key, self.current.as_str())?;
        Ok(self.current)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Browser local storage. Unavailable storage reads as empty and refuses writes.
#[cfg(feature = "hydrate")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    #[must_use]
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                log::debug!("local storage unavailable: {err:?}");
                None
            }
            None => None,
        };
        Self { storage }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("could not read {key}: {err:?}");
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let Some(storage) = self.storage.as_ref() else {
            return Err(StorageError { key: key.to_owned(), reason: "local storage unavailable".to_owned() });
        };
        storage
            .set_item(key, value)
            .map_err(|err| StorageError { key: key.to_owned(), reason: format!("{err:?}") })
    }
}

/// Reflect `theme` on the root element and, when present, the toggle icon.
#[cfg(feature = "hydrate")]
pub fn apply(theme: Theme, root: &Element, toggle: Option<&Element>) -> Result<(), MountError> {
    match theme.root_attribute() {
        Some(value) => root.set_attribute(THEME_ATTR, value)?,
        None => root.remove_attribute(THEME_ATTR)?,
    }
    if let Some(toggle) = toggle {
        toggle.set_inner_html(theme.icon());
    }
    Ok(())
}

/// Apply the stored theme and wire the toggle control.
///
/// The stored theme is applied to `<html>` even when the page has no toggle.
#[cfg(feature = "hydrate")]
pub fn mount(config: &SiteConfig) -> Result<(), MountError> {
    let doc = dom::document()?;
    let root = doc
        .document_element()
        .ok_or_else(|| MountError::MissingElement("<html>".to_owned()))?;
    let toggle = doc.get_element_by_id(THEME_TOGGLE_ID);

    let mut controller = ThemeController::load(LocalStorage::open(), config.theme_storage_key.as_str());
    apply(controller.current(), &root, toggle.as_ref())?;
    log::debug!("theme at startup: {}", controller.current().as_str());

    let Some(toggle) = toggle else {
        return Err(MountError::MissingElement(format!("#{THEME_TOGGLE_ID}")));
    };
    let icon_target = toggle.clone();
    dom::listen(&toggle, "click", move |_| {
        let next = controller.toggle().unwrap_or_else(|err| {
            log::warn!("{err}");
            controller.current()
        });
        if let Err(err) = apply(next, &root, Some(&icon_target)) {
            log::warn!("theme toggle: {err}");
        }
    })
}
