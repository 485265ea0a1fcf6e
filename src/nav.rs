//! Navigation bar state: scroll shadow, mobile menu, active-section link.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use web_sys::Element;

use crate::consts::NAV_SCROLL_OFFSET_PX;
#[cfg(feature = "hydrate")]
use crate::consts::{
    ACTIVE_CLASS, NAV_LINK_SELECTOR, NAV_MENU_ID, NAV_TOGGLE_ID, NAVBAR_ID, OPEN_CLASS, SCROLLED_CLASS,
    SECTION_SELECTOR, SECTION_THRESHOLD,
};
#[cfg(feature = "hydrate")]
use crate::dom;
#[cfg(feature = "hydrate")]
use crate::error::MountError;
#[cfg(feature = "hydrate")]
use crate::visibility::{self, Coverage, Disposition, EntryEdges};

/// Whether the navbar should show its scrolled state at `scroll_y`.
#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_OFFSET_PX
}

/// Mobile menu state. The toggle's `active` class and the menu's `open`
/// class both mirror `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Toggle control activated.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A nav link was followed. Always closes, whatever the current state.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Tracks which nav link matches the most recently entered section.
#[derive(Debug, Clone)]
pub struct SectionHighlighter {
    hrefs: Vec<Option<String>>,
    active: Option<usize>,
}

impl SectionHighlighter {
    /// `hrefs` holds each nav link's raw `href`, in document order.
    #[must_use]
    pub fn new(hrefs: Vec<Option<String>>) -> Self {
        Self { hrefs, active: None }
    }

    /// A section crossed into view.
    ///
    /// The first link whose `href` is `#<section_id>` becomes active and every
    /// other link inactive. A section without an id, or with no matching link,
    /// leaves no link active. Returns the new active link.
    pub fn enter(&mut self, section_id: Option<&str>) -> Option<usize> {
        self.active = section_id.and_then(|id| {
            self.hrefs
                .iter()
                .position(|href| href.as_deref().and_then(|h| h.strip_prefix('#')) == Some(id))
        });
        self.active
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, link: usize) -> bool {
        self.active == Some(link)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hrefs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }
}

/// Wire the scroll shadow, the mobile menu, and section highlighting.
///
/// Each part mounts independently; the first failure is returned after all
/// three have been attempted.
#[cfg(feature = "hydrate")]
pub fn mount() -> Result<(), MountError> {
    let results = [mount_scroll_shadow(), mount_menu(), mount_highlight()];
    results.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

#[cfg(feature = "hydrate")]
fn mount_scroll_shadow() -> Result<(), MountError> {
    let window = dom::window()?;
    let navbar = dom::by_id(&dom::document()?, NAVBAR_ID)?;
    let scroller = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let scrolled = scroller.scroll_y().map(is_scrolled).unwrap_or(false);
        if let Err(err) = dom::set_class(&navbar, SCROLLED_CLASS, scrolled) {
            log::debug!("navbar scroll state: {err}");
        }
    })
}

#[cfg(feature = "hydrate")]
fn mount_menu() -> Result<(), MountError> {
    let doc = dom::document()?;
    let toggle = dom::by_id(&doc, NAV_TOGGLE_ID)?;
    let menu = dom::by_id(&doc, NAV_MENU_ID)?;
    let state = Rc::new(RefCell::new(MenuState { open: menu.class_list().contains(OPEN_CLASS) }));

    let (t, m, s) = (toggle.clone(), menu.clone(), Rc::clone(&state));
    dom::listen(&toggle, "click", move |_| {
        let open = s.borrow_mut().toggle();
        render_menu(&t, &m, open);
    })?;

    for link in dom::select_all(&doc, NAV_LINK_SELECTOR)? {
        let (t, m, s) = (toggle.clone(), menu.clone(), Rc::clone(&state));
        dom::listen(&link, "click", move |_| {
            s.borrow_mut().close();
            render_menu(&t, &m, false);
        })?;
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn render_menu(toggle: &Element, menu: &Element, open: bool) {
    let results = [dom::set_class(toggle, ACTIVE_CLASS, open), dom::set_class(menu, OPEN_CLASS, open)];
    for err in results.into_iter().filter_map(Result::err) {
        log::debug!("nav menu: {err}");
    }
}

#[cfg(feature = "hydrate")]
fn mount_highlight() -> Result<(), MountError> {
    let doc = dom::document()?;
    let links = dom::select_all(&doc, NAV_LINK_SELECTOR)?;
    let sections = dom::select_all(&doc, SECTION_SELECTOR)?;
    let mut highlighter = SectionHighlighter::new(links.iter().map(|l| l.get_attribute("href")).collect());

    let mut edges = EntryEdges::new(sections.len());

    let on_report = move |index, section: &Element, crossed| {
        if edges.report(index, crossed) {
            highlighter.enter(Some(section.id().as_str()).filter(|id| !id.is_empty()));
            for (i, link) in links.iter().enumerate() {
                if let Err(err) = dom::set_class(link, ACTIVE_CLASS, highlighter.is_active(i)) {
                    log::debug!("nav highlight: {err}");
                }
            }
        }
        Disposition::Keep
    };
    visibility::observe(sections, SECTION_THRESHOLD, Coverage::ElementOrViewport, on_report)
}
