//! Severity classification: the one place the event-count thresholds and
//! their display tokens live.
//!
//! The HTML page, the preview image, and the favicon all present the same
//! three-tier answer; each surface asks this enum rather than re-deriving
//! the mapping.

use crate::snapshot::StatusSnapshot;

/// How busy downtown is today, in three tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// No events downtown today.
    None,
    /// Exactly one event.
    One,
    /// Two or more events.
    Many,
}

impl Severity {
    /// Classify an event count.
    pub fn from_event_count(n: u32) -> Self {
        match n {
            0 => Self::None,
            1 => Self::One,
            _ => Self::Many,
        }
    }

    /// Classify a snapshot that may be absent.
    ///
    /// A missing snapshot classifies as the quiet tier, so fallback
    /// surfaces (like the favicon) still get a sensible default.
    pub fn of(snapshot: Option<&StatusSnapshot>) -> Self {
        match snapshot {
            Some(s) => Self::from_event_count(s.effective_event_count()),
            None => Self::None,
        }
    }

    /// Answer shown on the HTML page.
    pub fn answer(self) -> &'static str {
        match self {
            Self::Many => "Yes",
            Self::One => "Probably",
            Self::None => "No",
        }
    }

    /// Headline on the social preview image.
    pub fn headline(self) -> &'static str {
        match self {
            Self::Many => "BUSY",
            Self::One => "BUSY-ISH",
            Self::None => "NOT BUSY",
        }
    }

    /// Display color: red, amber, or green.
    pub fn color(self) -> &'static str {
        match self {
            Self::Many => "#ef4444",
            Self::One => "#f59e0b",
            Self::None => "#10b981",
        }
    }

    /// The two description lines under the preview-image headline.
    pub fn card_lines(self) -> [&'static str; 2] {
        match self {
            Self::Many => ["There are multiple events", "in downtown CLE today."],
            Self::One => ["There is 1 event", "in downtown CLE today."],
            Self::None => ["There are no events in", "downtown CLE today."],
        }
    }

    /// File stem of the favicon variant for this tier.
    pub fn icon_stem(self) -> &'static str {
        match self {
            Self::Many => "favicon-busy",
            Self::One => "favicon-busy-ish",
            Self::None => "favicon-not-busy",
        }
    }
}
