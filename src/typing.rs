//! Type/delete loop over a fixed list of titles.
//!
//! [`Typewriter::tick`] is the whole state machine: each call shows one more
//! (or one fewer) character and says how long to wait before the next call.
//! In the browser every tick schedules the next one, forever.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

#[cfg(feature = "hydrate")]
use web_sys::Element;

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
use crate::consts::{DELETE_DELAY_MS, FULL_WORD_PAUSE_MS, NEXT_WORD_PAUSE_MS, TYPE_DELAY_MS};
#[cfg(feature = "hydrate")]
use crate::consts::TYPING_TARGET_ID;
#[cfg(feature = "hydrate")]
use crate::dom;
use crate::error::ConfigError;
#[cfg(feature = "hydrate")]
use crate::error::MountError;

/// Text to show and how long to wait before the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

/// Typing animation state. `char_index` counts characters, not bytes, and
/// never leaves `[0, len(current title)]`.
#[derive(Debug, Clone)]
pub struct Typewriter {
    titles: Vec<String>,
    title_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    /// Start before the first character of the first title.
    ///
    /// Empty titles are dropped; at least one must remain.
    pub fn new(titles: Vec<String>) -> Result<Self, ConfigError> {
        let titles: Vec<String> = titles.into_iter().filter(|t| !t.is_empty()).collect();
        if titles.is_empty() {
            return Err(ConfigError::NoTitles);
        }
        Ok(Self { titles, title_index: 0, char_index: 0, deleting: false })
    }

    /// Advance one step.
    pub fn tick(&mut self) -> TypingStep {
        let title = &self.titles[self.title_index];
        let len = title.chars().count();

        let mut delay_ms = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.char_index = (self.char_index + 1).min(len);
            TYPE_DELAY_MS
        };
        let text = title.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == len {
            self.deleting = true;
            delay_ms = FULL_WORD_PAUSE_MS;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.title_index = (self.title_index + 1) % self.titles.len();
            delay_ms = NEXT_WORD_PAUSE_MS;
        }

        TypingStep { text, delay_ms }
    }

    #[must_use]
    pub fn title_index(&self) -> usize {
        self.title_index
    }

    #[must_use]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

/// Start the typing loop on `#typingText`.
#[cfg(feature = "hydrate")]
pub fn mount(config: &SiteConfig) -> Result<(), MountError> {
    let target = dom::by_id(&dom::document()?, TYPING_TARGET_ID)?;
    let writer = Typewriter::new(config.titles.clone())?;
    run(target, writer);
    Ok(())
}

#[cfg(feature = "hydrate")]
fn run(target: Element, mut writer: Typewriter) {
    let step = writer.tick();
    target.set_text_content(Some(&step.text));
    dom::after(step.delay_ms, move || run(target, writer));
}
