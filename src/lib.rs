//! Behavior layer for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser once the
//! page's markup is in place. Each behavior is a leaf: it locates its own
//! elements, attaches its own handlers, and owns its own animation state.
//! Nothing is shared between behaviors, so one missing element never stops
//! the rest from mounting.
//!
//! All decision logic lives in plain types (`Typewriter`, `CounterAnimation`,
//! `SectionHighlighter`, ...) that build and test natively. The browser
//! wiring is compiled only with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark preference, persisted in local storage |
//! | [`nav`] | Scroll shadow, mobile menu, active-section highlight |
//! | [`typing`] | Type/delete loop over the configured titles |
//! | [`counter`] | Count-up animation for hero stats |
//! | [`skills`] | Staggered skill bar fills |
//! | [`reveal`] | Generic reveal-on-scroll |
//! | [`particles`] | Decorative background particles |
//! | [`contact`] | Pending state for the contact form's submit button |
//! | [`anchors`] | Smooth scrolling for same-page links |
//! | [`visibility`] | One-shot triggers and intersection observation |
//! | [`attrs`] | Numeric attribute parsing with explicit fallbacks |
//! | [`config`] | Page configuration with defaults |
//! | [`error`] | Error types |
//! | [`consts`] | Thresholds, delays, and DOM names |
//! | [`dom`] | Document readiness and browser helpers |

pub mod anchors;
pub mod attrs;
#[cfg(feature = "hydrate")]
pub mod boot;
pub mod config;
pub mod consts;
pub mod contact;
pub mod counter;
pub mod dom;
pub mod error;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod skills;
pub mod theme;
pub mod typing;
pub mod visibility;

/// Wasm entry point: install the panic hook and logger, then mount every
/// behavior once the document is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    boot::run();
}
