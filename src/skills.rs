//! Staggered skill bar fills, one category at a time.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use crate::attrs;
use crate::consts::SKILL_STAGGER_MS;
#[cfg(feature = "hydrate")]
use crate::consts::{SKILL_CATEGORY_SELECTOR, SKILL_FILL_SELECTOR, SKILL_THRESHOLD, SKILL_WIDTH_ATTR};
#[cfg(feature = "hydrate")]
use crate::dom;
#[cfg(feature = "hydrate")]
use crate::error::MountError;
#[cfg(feature = "hydrate")]
use crate::visibility::{self, Coverage, Disposition, TriggerSet};

/// Delay before the `index`-th fill of a category (0-based, document order).
#[must_use]
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(SKILL_STAGGER_MS))
}

/// CSS width for a fill whose `data-width` is `raw`.
#[must_use]
pub fn fill_width(raw: Option<&str>) -> String {
    format!("{}%", attrs::percent(raw))
}

/// Arm every `.skill-category` independently.
#[cfg(feature = "hydrate")]
pub fn mount() -> Result<(), MountError> {
    let categories = dom::select_all(&dom::document()?, SKILL_CATEGORY_SELECTOR)?;
    let mut triggers = TriggerSet::new(categories.len());

    visibility::observe(categories, SKILL_THRESHOLD, Coverage::Element, move |index, category, crossed| {
        if !triggers.report(index, crossed) {
            return Disposition::Keep;
        }
        match dom::select_within(category, SKILL_FILL_SELECTOR) {
            Ok(fills) => {
                for (i, fill) in fills.into_iter().enumerate() {
                    let width = fill_width(fill.get_attribute(SKILL_WIDTH_ATTR).as_deref());
                    dom::after(stagger_delay_ms(i), move || {
                        if let Err(err) = dom::set_style(&fill, "width", &width) {
                            log::debug!("skill fill: {err}");
                        }
                    });
                }
            }
            Err(err) => log::warn!("skill category: {err}"),
        }
        Disposition::Release
    })
}
