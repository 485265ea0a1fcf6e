//! Pending state for the contact form's submit button.
//!
//! Purely presentational: the form still submits however its markup says,
//! and nothing here re-enables the button.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
use crate::consts::SPINNER_ICON;
#[cfg(feature = "hydrate")]
use crate::consts::{CONTACT_FORM_ID, SUBMIT_SELECTOR};
#[cfg(feature = "hydrate")]
use crate::dom;
#[cfg(feature = "hydrate")]
use crate::error::MountError;

/// Spinner followed by `label`. The label is escaped; it comes from page config.
#[must_use]
pub fn pending_markup(label: &str) -> String {
    format!("{SPINNER_ICON} {}", escape_html(label))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(feature = "hydrate")]
pub fn mount(config: &SiteConfig) -> Result<(), MountError> {
    let form = dom::by_id(&dom::document()?, CONTACT_FORM_ID)?;
    let markup = pending_markup(&config.sending_label);
    let submit_root = form.clone();

    dom::listen(&form, "submit", move |_| {
        let button = match submit_root.query_selector(SUBMIT_SELECTOR) {
            Ok(Some(button)) => button,
            Ok(None) => return,
            Err(err) => {
                log::debug!("contact form: {err:?}");
                return;
            }
        };
        button.set_inner_html(&markup);
        if let Err(err) = button.set_attribute("disabled", "") {
            log::debug!("contact form: {err:?}");
        }
    })
}
