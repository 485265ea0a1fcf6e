//! Smooth scrolling for same-page links.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

#[cfg(feature = "hydrate")]
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

#[cfg(feature = "hydrate")]
use crate::consts::ANCHOR_SELECTOR;
#[cfg(feature = "hydrate")]
use crate::dom;
#[cfg(feature = "hydrate")]
use crate::error::MountError;

/// Element id a same-page `href` points at. A bare `#` or a non-fragment
/// `href` points nowhere.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(feature = "hydrate")]
pub fn mount() -> Result<(), MountError> {
    let doc = dom::document()?;
    for anchor in dom::select_all(&doc, ANCHOR_SELECTOR)? {
        let link = anchor.clone();
        let doc = doc.clone();
        dom::listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = fragment_target(&href).and_then(|id| doc.get_element_by_id(id)) else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(())
}
