//! Count-up animation for the hero stats.
//!
//! Every counter advances by `target / (2000 / 16)` per animation frame, so
//! all counters finish together at roughly two seconds regardless of their
//! targets. The last frame shows the exact target rather than a rounded sum.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;
#[cfg(feature = "hydrate")]
use web_sys::Element;

#[cfg(feature = "hydrate")]
use crate::attrs;
use crate::consts::{COUNTER_DURATION_MS, FRAME_MS};
#[cfg(feature = "hydrate")]
use crate::consts::{COUNTER_TARGET_ATTR, COUNTER_THRESHOLD, HERO_STATS_SELECTOR, STAT_NUMBER_SELECTOR};
#[cfg(feature = "hydrate")]
use crate::dom;
#[cfg(feature = "hydrate")]
use crate::error::MountError;
#[cfg(feature = "hydrate")]
use crate::visibility::{self, Coverage, Disposition, OneShot};

/// Value to display after one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub shown: u64,
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    current: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(target: u64) -> Self {
        let increment = target as f64 / (COUNTER_DURATION_MS / FRAME_MS);
        Self { target, current: 0.0, increment, finished: false }
    }

    /// Start an animation toward `target`, returning it with its first frame
    /// already taken. The first value goes up on the report that started the
    /// count; later frames follow on animation frames.
    #[must_use]
    pub fn begin(target: u64) -> (Self, CounterFrame) {
        let mut anim = Self::new(target);
        let first = anim.step();
        (anim, first)
    }

    /// Advance one frame.
    ///
    /// Shows the ceiling of the running sum while it is below the target,
    /// then the exact target. Frames after completion keep showing the target.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step(&mut self) -> CounterFrame {
        if self.finished {
            return CounterFrame { shown: self.target, done: true };
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame { shown: (self.current.ceil() as u64).min(self.target), done: false }
        } else {
            self.finished = true;
            CounterFrame { shown: self.target, done: true }
        }
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Arm the counters on `.hero-stats`. A page without the block never arms.
#[cfg(feature = "hydrate")]
pub fn mount() -> Result<(), MountError> {
    let doc = dom::document()?;
    let Some(stats) = doc.query_selector(HERO_STATS_SELECTOR)? else {
        log::debug!("no {HERO_STATS_SELECTOR}; counters disarmed");
        return Ok(());
    };
    let counters = dom::select_all(&doc, STAT_NUMBER_SELECTOR)?;
    let mut trigger = OneShot::new();

    visibility::observe(vec![stats], COUNTER_THRESHOLD, Coverage::Element, move |_, _, crossed| {
        if !(crossed && trigger.fire()) {
            return Disposition::Keep;
        }
        for el in &counters {
            let target = attrs::counter_target(el.get_attribute(COUNTER_TARGET_ATTR).as_deref());
            if let Err(err) = animate(el.clone(), target) {
                log::warn!("counter: {err}");
            }
        }
        Disposition::Release
    })
}

/// Drive one counter with its own animation-frame loop.
#[cfg(feature = "hydrate")]
fn animate(el: Element, target: u64) -> Result<(), MountError> {
    let (mut anim, first) = CounterAnimation::begin(target);
    el.set_text_content(Some(&first.shown.to_string()));
    if first.done {
        return Ok(());
    }

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        let frame = anim.step();
        el.set_text_content(Some(&frame.shown.to_string()));
        if frame.done {
            holder_for_cb.borrow_mut().take();
            return;
        }
        let scheduled = match holder_for_cb.borrow().as_ref() {
            Some(next) => dom::next_frame(next),
            None => Ok(()),
        };
        if let Err(err) = scheduled {
            log::warn!("counter frame: {err}");
            el.set_text_content(Some(&anim.target().to_string()));
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    dom::next_frame(&cb)?;
    *holder.borrow_mut() = Some(cb);
    Ok(())
}
