//! Startup: configuration, logging, then every behavior.
//!
//! Behaviors mount in a fixed order but do not depend on it. Each result is
//! logged and the next behavior mounts regardless.

use crate::config::SiteConfig;
use crate::consts::CONFIG_SCRIPT_ID;
use crate::error::{ConfigError, MountError};
use crate::{anchors, contact, counter, dom, nav, particles, reveal, skills, theme, typing};

/// Load config, install the console logger, and mount once the DOM is ready.
pub fn run() {
    let (config, config_err) = match load_config() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    let level = config.log_level().unwrap_or(log::Level::Info);
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    if let Some(err) = config_err {
        log::warn!("using default config: {err}");
    }

    if let Err(err) = dom::on_ready(move || mount_all(&config)) {
        log::error!("page not ready: {err}");
    }
}

/// Read the optional inline config block.
fn load_config() -> Result<SiteConfig, ConfigError> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_SCRIPT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    SiteConfig::from_json(&raw)
}

fn mount_all(config: &SiteConfig) {
    let results: [(&str, Result<(), MountError>); 9] = [
        ("theme", theme::mount(config)),
        ("nav", nav::mount()),
        ("typing", typing::mount(config)),
        ("counter", counter::mount()),
        ("skills", skills::mount()),
        ("reveal", reveal::mount()),
        ("particles", particles::mount(config)),
        ("contact", contact::mount(config)),
        ("anchors", anchors::mount()),
    ];
    for (name, result) in results {
        match result {
            Ok(()) => log::debug!("{name} mounted"),
            Err(err) if err.is_missing_element() => log::debug!("{name} skipped: {err}"),
            Err(err) => log::warn!("{name} failed: {err}"),
        }
    }
}
