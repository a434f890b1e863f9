use crate::log::LogLevel;
use std::time::Duration;

pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 80.0;
pub const DEFAULT_SECTION_PROBE_OFFSET_PX: f64 = 100.0;
pub const DEFAULT_HEADER_CLEARANCE_PX: f64 = 80.0;
pub const DEFAULT_TYPE_DELAY_MS: u64 = 100;
pub const DEFAULT_DELETE_DELAY_MS: u64 = 50;
pub const DEFAULT_FULL_WORD_PAUSE_MS: u64 = 2_000;
pub const DEFAULT_STAR_COUNT: usize = 100;
pub const DEVICON_STYLESHEET_URL: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css";

/// Timing for the typing animation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TypingTimings {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub full_word_pause: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(DEFAULT_TYPE_DELAY_MS),
            delete_delay: Duration::from_millis(DEFAULT_DELETE_DELAY_MS),
            full_word_pause: Duration::from_millis(DEFAULT_FULL_WORD_PAUSE_MS),
        }
    }
}

/// Constants shared by every view. Built once at the application root.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ViewConfig {
    pub scroll_threshold: f64,
    pub section_probe_offset: f64,
    pub header_clearance: f64,
    pub typing: TypingTimings,
    pub star_count: usize,
    pub log_level: LogLevel,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD_PX,
            section_probe_offset: DEFAULT_SECTION_PROBE_OFFSET_PX,
            header_clearance: DEFAULT_HEADER_CLEARANCE_PX,
            typing: TypingTimings::default(),
            star_count: DEFAULT_STAR_COUNT,
            log_level: LogLevel::Info,
        }
    }
}
