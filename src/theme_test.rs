use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
    read_only: bool,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError { key: key.to_owned(), reason: "read only".to_owned() });
        }
        self.writes += 1;
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// --- Theme ---

#[test]
fn only_light_selects_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
}

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn toggled_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn icons_and_attribute_follow_theme() {
    assert_eq!(Theme::Light.icon(), SUN_ICON);
    assert_eq!(Theme::Dark.icon(), MOON_ICON);
    assert_eq!(Theme::Light.root_attribute(), Some("light"));
    assert_eq!(Theme::Dark.root_attribute(), None);
}

#[test]
fn stored_value_round_trips_through_from_stored() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

// --- ThemeController ---

#[test]
fn startup_without_stored_value_is_dark_and_writes_nothing() {
    let controller = ThemeController::load(MemoryStore::default(), "theme");
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.store().writes, 0);
}

#[test]
fn toggle_persists_new_value() {
    let mut controller = ThemeController::load(MemoryStore::default(), "theme");
    assert_eq!(controller.toggle().unwrap(), Theme::Light);
    assert_eq!(controller.current().icon(), SUN_ICON);
    assert_eq!(controller.store().values.get("theme").map(String::as_str), Some("light"));
}

#[test]
fn toggling_twice_restores_theme_and_stored_value() {
    for stored in [None, Some("light"), Some("dark"), Some("garbage")] {
        let store = stored.map_or_else(MemoryStore::default, |v| MemoryStore::with("theme", v));
        let mut controller = ThemeController::load(store, "theme");
        let before = controller.current();
        controller.toggle().unwrap();
        controller.toggle().unwrap();
        assert_eq!(controller.current(), before);
        assert_eq!(controller.store().values.get("theme").map(String::as_str), Some(before.as_str()));
    }
}

#[test]
fn reload_with_light_starts_light() {
    let mut first = ThemeController::load(MemoryStore::default(), "theme");
    first.toggle().unwrap();
    let ThemeController { store, .. } = first;

    let reloaded = ThemeController::load(store, "theme");
    assert_eq!(reloaded.current(), Theme::Light);
}

#[test]
fn failed_write_still_flips_theme() {
    let store = MemoryStore { read_only: true, ..MemoryStore::default() };
    let mut controller = ThemeController::load(store, "theme");
    let err = controller.toggle().unwrap_err();
    assert_eq!(err.key, "theme");
    assert_eq!(controller.current(), Theme::Light);
}

#[test]
fn custom_key_is_used() {
    let store = MemoryStore::with("site-theme", "light");
    let mut controller = ThemeController::load(store, "site-theme");
    assert_eq!(controller.current(), Theme::Light);
    controller.toggle().unwrap();
    assert_eq!(controller.store().values.get("site-theme").map(String::as_str), Some("dark"));
    assert!(!controller.store().values.contains_key("theme"));
}
