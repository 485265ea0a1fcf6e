//! Shared constants: visibility thresholds, animation timing, and the DOM
//! names the page markup is expected to use.

// ── Visibility thresholds ───────────────────────────────────────

/// Fraction of a page section that must be visible to highlight its nav link.
pub const SECTION_THRESHOLD: f64 = 0.3;

/// Fraction of the hero stats block that must be visible to start counters.
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Fraction of a skill category that must be visible to fill its bars.
pub const SKILL_THRESHOLD: f64 = 0.3;

/// Fraction of a reveal-tagged element that must be visible to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Slack applied when comparing a reported intersection ratio to a threshold.
/// Browsers report the ratio at the crossing frame, which can land a hair
/// under the threshold that triggered the callback.
pub const RATIO_EPSILON: f64 = 1e-3;

/// Report steps across an element when crossings are measured against the
/// viewport as well as the element.
pub const VIEWPORT_STEPS: u32 = 20;

// ── Navigation ──────────────────────────────────────────────────

/// Vertical scroll offset (CSS pixels) above which the navbar is "scrolled".
pub const NAV_SCROLL_OFFSET_PX: f64 = 50.0;

// ── Typing ──────────────────────────────────────────────────────

/// Delay after typing one character.
pub const TYPE_DELAY_MS: u32 = 80;

/// Delay after deleting one character.
pub const DELETE_DELAY_MS: u32 = 40;

/// Pause once a title is fully typed.
pub const FULL_WORD_PAUSE_MS: u32 = 2000;

/// Pause once a title is fully deleted, before the next one starts.
pub const NEXT_WORD_PAUSE_MS: u32 = 400;

// ── Counters ────────────────────────────────────────────────────

/// Nominal wall-clock length of a counter animation.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Nominal length of one animation frame.
pub const FRAME_MS: f64 = 16.0;

// ── Skills ──────────────────────────────────────────────────────

/// Delay between consecutive skill bar fills within one category.
pub const SKILL_STAGGER_MS: u32 = 200;

// ── Particles ───────────────────────────────────────────────────

/// Particle `left` range, in percent of the container width.
pub const PARTICLE_LEFT_PCT: (f64, f64) = (0.0, 100.0);

/// Particle animation duration range, in seconds.
pub const PARTICLE_DURATION_S: (f64, f64) = (6.0, 14.0);

/// Particle animation delay range, in seconds.
pub const PARTICLE_DELAY_S: (f64, f64) = (0.0, 10.0);

/// Particle edge length range, in CSS pixels.
pub const PARTICLE_SIZE_PX: (f64, f64) = (1.0, 4.0);

// ── DOM contract ────────────────────────────────────────────────

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_ATTR: &str = "data-theme";
pub const SUN_ICON: &str = r#"<i class="fas fa-sun"></i>"#;
pub const MOON_ICON: &str = r#"<i class="fas fa-moon"></i>"#;

pub const NAVBAR_ID: &str = "navbar";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = ".section, .hero";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";
pub const OPEN_CLASS: &str = "open";

pub const TYPING_TARGET_ID: &str = "typingText";

pub const HERO_STATS_SELECTOR: &str = ".hero-stats";
pub const STAT_NUMBER_SELECTOR: &str = ".stat-number";
pub const COUNTER_TARGET_ATTR: &str = "data-target";

pub const SKILL_CATEGORY_SELECTOR: &str = ".skill-category";
pub const SKILL_FILL_SELECTOR: &str = ".skill-fill";
pub const SKILL_WIDTH_ATTR: &str = "data-width";

pub const REVEAL_SELECTOR: &str = "[data-aos]";
pub const REVEAL_DELAY_ATTR: &str = "data-aos-delay";
pub const REVEALED_CLASS: &str = "aos-animate";

pub const PARTICLES_ID: &str = "particles";
pub const PARTICLE_CLASS: &str = "particle";

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const SUBMIT_SELECTOR: &str = r#"button[type="submit"]"#;
pub const SPINNER_ICON: &str = r#"<i class="fas fa-spinner fa-spin"></i>"#;

pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

pub const CONFIG_SCRIPT_ID: &str = "portfolio-config";
