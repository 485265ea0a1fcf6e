//! Visibility observation and one-shot triggers.
//!
//! Observation is a capability: "tell me when element `i` crosses threshold
//! `t`". In the browser it is backed by `IntersectionObserver` (see
//! [`observe`]); everything that decides what a crossing *means* lives in the
//! plain types below so it can be tested without a page.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::consts::{RATIO_EPSILON, VIEWPORT_STEPS};
#[cfg(feature = "hydrate")]
use crate::error::MountError;

/// Whether an observer report counts as having crossed `threshold`.
///
/// The browser flags an element as intersecting as soon as any part of it is
/// on screen, and reports on the way down as well as up, so the ratio is
/// checked too.
#[must_use]
pub fn crossed(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_EPSILON >= threshold
}

/// Which area a threshold is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Fraction of the element's own area.
    Element,
    /// Fraction of the element's area, or of the viewport's height, whichever
    /// is reached first. An element taller than `1 / threshold` viewports
    /// can never show `threshold` of itself, but it can fill the viewport.
    ElementOrViewport,
}

impl Coverage {
    /// Ratios at which the browser should report.
    ///
    /// Element ratios never reach the threshold for tall elements, so viewport
    /// coverage needs reports all the way through the element.
    #[must_use]
    pub fn observer_thresholds(self, threshold: f64) -> Vec<f64> {
        match self {
            Self::Element => vec![threshold],
            Self::ElementOrViewport => {
                let mut steps: Vec<f64> = (0..=VIEWPORT_STEPS)
                    .map(|i| f64::from(i) / f64::from(VIEWPORT_STEPS))
                    .collect();
                steps.push(threshold);
                steps.sort_by(f64::total_cmp);
                steps.dedup();
                steps
            }
        }
    }
}

/// One observer report, reduced to the numbers a crossing depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub is_intersecting: bool,
    /// Visible fraction of the element.
    pub ratio: f64,
    /// Height of the visible part of the element.
    pub visible_height: f64,
    /// Height of the viewport; zero or negative when the browser gave none.
    pub root_height: f64,
}

impl Report {
    /// Whether this report crosses `threshold` under `coverage`.
    #[must_use]
    pub fn crosses(&self, threshold: f64, coverage: Coverage) -> bool {
        if crossed(self.is_intersecting, self.ratio, threshold) {
            return true;
        }
        match coverage {
            Coverage::Element => false,
            Coverage::ElementOrViewport => {
                self.root_height > 0.0
                    && crossed(self.is_intersecting, self.visible_height / self.root_height, threshold)
            }
        }
    }
}

/// What the observer should do with an element after a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Keep reporting crossings for this element.
    Keep,
    /// Stop observing this element.
    Release,
}

/// A single trigger that fires at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    armed: bool,
}

impl Default for OneShot {
    fn default() -> Self {
        Self { armed: true }
    }
}

impl OneShot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire if still armed. Returns `true` exactly once.
    pub fn fire(&mut self) -> bool {
        std::mem::replace(&mut self.armed, false)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// One [`OneShot`] per observed element, addressed by observation index.
#[derive(Debug, Clone, Default)]
pub struct TriggerSet {
    triggers: Vec<OneShot>,
}

impl TriggerSet {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { triggers: vec![OneShot::new(); len] }
    }

    /// Feed a crossing report for element `index`.
    ///
    /// Returns `true` when this report fires the element's trigger: it must
    /// be a crossing, and the trigger must still be armed. Unknown indices
    /// never fire.
    pub fn report(&mut self, index: usize, crossed: bool) -> bool {
        if !crossed {
            return false;
        }
        self.triggers.get_mut(index).is_some_and(OneShot::fire)
    }

    /// Number of triggers that have not fired yet.
    #[must_use]
    pub fn armed(&self) -> usize {
        self.triggers.iter().filter(|t| t.is_armed()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

/// Last crossing state per observed element, reporting only entries.
///
/// With dense report thresholds an element that stays past its threshold is
/// reported many times; only the report that takes it from outside to inside
/// counts.
#[derive(Debug, Clone, Default)]
pub struct EntryEdges {
    inside: Vec<bool>,
}

impl EntryEdges {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { inside: vec![false; len] }
    }

    /// Record a report for element `index`. Returns `true` when it entered.
    pub fn report(&mut self, index: usize, crossed: bool) -> bool {
        let Some(inside) = self.inside.get_mut(index) else {
            return false;
        };
        let entered = crossed && !*inside;
        *inside = crossed;
        entered
    }
}

/// Observe `targets` for crossings of `threshold`, measured per `coverage`.
///
/// `on_report(index, element, crossed)` runs for every observer report. When
/// it returns [`Disposition::Release`] the element is unobserved. An empty
/// target list registers nothing.
#[cfg(feature = "hydrate")]
pub fn observe<F>(
    targets: Vec<Element>,
    threshold: f64,
    coverage: Coverage,
    mut on_report: F,
) -> Result<(), MountError>
where
    F: FnMut(usize, &Element, bool) -> Disposition + 'static,
{
    if targets.is_empty() {
        return Ok(());
    }

    let observed = targets.clone();
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let Some(index) = observed.iter().position(|el| *el == target) else {
                continue;
            };
            let report = Report {
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
                visible_height: entry.intersection_rect().height(),
                root_height: entry.root_bounds().map_or(0.0, |root| root.height()),
            };
            let hit = report.crosses(threshold, coverage);
            if on_report(index, &target, hit) == Disposition::Release {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let thresholds: js_sys::Array = coverage
        .observer_thresholds(threshold)
        .into_iter()
        .map(JsValue::from_f64)
        .collect();
    let options = IntersectionObserverInit::new();
    options.set_threshold(&thresholds);
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)?;
    for el in &targets {
        observer.observe(el);
    }
    cb.forget();
    Ok(())
}
