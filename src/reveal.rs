//! Reveal-on-scroll for any `[data-aos]` element.
//!
//! Each element reveals once, `data-aos-delay` milliseconds after it first
//! becomes 10% visible, by gaining the `aos-animate` class for good.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::attrs;
#[cfg(feature = "hydrate")]
use crate::consts::{REVEAL_DELAY_ATTR, REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEALED_CLASS};
#[cfg(feature = "hydrate")]
use crate::dom;
#[cfg(feature = "hydrate")]
use crate::error::MountError;
#[cfg(feature = "hydrate")]
use crate::visibility::{self, Coverage, Disposition, TriggerSet};

/// Per-element reveal setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealSpec {
    pub delay_ms: u32,
}

impl RevealSpec {
    /// Read from the element's raw `data-aos-delay`.
    #[must_use]
    pub fn from_attr(delay: Option<&str>) -> Self {
        Self { delay_ms: attrs::delay_ms(delay) }
    }
}

/// Arm every reveal-tagged element independently.
#[cfg(feature = "hydrate")]
pub fn mount() -> Result<(), MountError> {
    let targets = dom::select_all(&dom::document()?, REVEAL_SELECTOR)?;
    let mut triggers = TriggerSet::new(targets.len());

    visibility::observe(targets, REVEAL_THRESHOLD, Coverage::Element, move |index, el, crossed| {
        if !triggers.report(index, crossed) {
            return Disposition::Keep;
        }
        let spec = RevealSpec::from_attr(el.get_attribute(REVEAL_DELAY_ATTR).as_deref());
        let el = el.clone();
        dom::after(spec.delay_ms, move || {
            if let Err(err) = el.class_list().add_1(REVEALED_CLASS) {
                log::debug!("reveal: {err:?}");
            }
        });
        Disposition::Release
    })
}
