//! Scroll-derived navigation state.
//!
//! Two signals come out of every scroll sample: whether the page has moved
//! past the navbar threshold, and which section should be highlighted in
//! the navigation. Section geometry is measured by the caller and passed
//! in as [`SectionSpan`]s so the logic stays free of the DOM.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum SectionId {
    Home,
    About,
    Services,
    Work,
    Contact,
}

impl SectionId {
    /// Document order, which is also the scan order for highlighting.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Work,
        SectionId::Contact,
    ];

    /// Entries shown in the navigation bar.
    pub const NAV: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Work,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Work => "work",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About me",
            Self::Services => "Services",
            Self::Work => "My work",
            Self::Contact => "Contact",
        }
    }
}

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

pub fn is_scrolled_past(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// First section, in the order given, whose span contains
/// `scroll_y + probe_offset`.
pub fn resolve_active_section(
    scroll_y: f64,
    probe_offset: f64,
    spans: impl IntoIterator<Item = SectionSpan>,
) -> Option<SectionId> {
    let probe = scroll_y + probe_offset;
    spans
        .into_iter()
        .find(|span| span.contains(probe))
        .map(|span| span.id)
}

/// Absolute scroll position that puts a section just below the header.
pub fn scroll_target(rect_top: f64, page_offset: f64, header_clearance: f64) -> f64 {
    rect_top + page_offset - header_clearance
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ScrollUpdate {
    pub scrolled_changed: bool,
    pub active_changed: bool,
}

impl ScrollUpdate {
    pub fn any(self) -> bool {
        self.scrolled_changed || self.active_changed
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScrollTracker {
    threshold: f64,
    probe_offset: f64,
    scrolled: bool,
    active: SectionId,
}

impl ScrollTracker {
    pub fn new(threshold: f64, probe_offset: f64) -> Self {
        Self {
            threshold,
            probe_offset,
            scrolled: false,
            active: SectionId::Home,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Recomputes both signals. The active section is kept when no span
    /// contains the probe point.
    pub fn sample(
        &mut self,
        scroll_y: f64,
        spans: impl IntoIterator<Item = SectionSpan>,
    ) -> ScrollUpdate {
        let scrolled = is_scrolled_past(scroll_y, self.threshold);
        let active = resolve_active_section(scroll_y, self.probe_offset, spans).unwrap_or(self.active);

        let update = ScrollUpdate {
            scrolled_changed: scrolled != self.scrolled,
            active_changed: active != self.active,
        };
        self.scrolled = scrolled;
        self.active = active;
        update
    }
}

/// Coalesces bursts of scroll events into one sample per frame.
///
/// `request` answers whether a frame callback must be scheduled; `take`
/// is called from that callback and re-arms the gate.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
