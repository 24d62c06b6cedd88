//! The status snapshot: the one JSON record the scraper materializes.
//!
//! The snapshot is produced by an out-of-process cron job and replaced
//! atomically; this crate only ever reads it. Every field tolerates absence
//! so that documents written by older producer versions (which had only the
//! `busy` flag) keep working.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// A downtown venue with an event today.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Venue {
    /// Venue display name.
    pub name: String,
    /// Link to the venue's event page.
    pub url: String,
}

/// Today's downtown event status, as written by the scraper.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusSnapshot {
    /// Legacy busy flag; only consulted when `event_count` is absent.
    pub busy: bool,

    /// Number of events found downtown today. Authoritative when present.
    pub event_count: Option<u32>,

    /// Venues hosting those events, in scraper order.
    pub venues: Vec<Venue>,

    /// Calendar date the snapshot describes (`YYYY-MM-DD`).
    pub date: Option<String>,

    /// When the scraper produced this snapshot (ISO 8601).
    pub checked_at: Option<String>,
}

impl StatusSnapshot {
    /// Parse a snapshot from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// The effective event count, falling back to the legacy `busy` flag
    /// for snapshots that predate `eventCount`.
    pub fn effective_event_count(&self) -> u32 {
        match self.event_count {
            Some(n) => n,
            None if self.busy => 2,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_DOC: &str = r#"{
        "busy": true,
        "eventCount": 2,
        "venues": [
            {"name": "Rocket Arena", "url": "https://www.rocketarena.com/events"},
            {"name": "Progressive Field", "url": "https://www.mlb.com/guardians"}
        ],
        "date": "2024-12-03",
        "checkedAt": "2024-12-03T22:45:00Z"
    }"#;

    #[test]
    fn parses_full_document() {
        let snapshot = StatusSnapshot::from_json(FULL_DOC).unwrap();
        assert!(snapshot.busy);
        assert_eq!(snapshot.event_count, Some(2));
        assert_eq!(snapshot.venues.len(), 2);
        assert_eq!(snapshot.venues[0].name, "Rocket Arena");
        assert_eq!(snapshot.date.as_deref(), Some("2024-12-03"));
        assert_eq!(snapshot.checked_at.as_deref(), Some("2024-12-03T22:45:00Z"));
    }

    #[test]
    fn parses_legacy_document_without_event_count() {
        let snapshot = StatusSnapshot::from_json(r#"{"busy": true}"#).unwrap();
        assert!(snapshot.busy);
        assert_eq!(snapshot.event_count, None);
        assert!(snapshot.venues.is_empty());
        assert_eq!(snapshot.effective_event_count(), 2);
    }

    #[test]
    fn parses_empty_document() {
        let snapshot = StatusSnapshot::from_json("{}").unwrap();
        assert!(!snapshot.busy);
        assert_eq!(snapshot.event_count, None);
        assert_eq!(snapshot.effective_event_count(), 0);
        assert!(snapshot.date.is_none());
        assert!(snapshot.checked_at.is_none());
    }

    #[test]
    fn ignores_unknown_fields() {
        let snapshot =
            StatusSnapshot::from_json(r#"{"eventCount": 1, "scraperVersion": "2.1"}"#).unwrap();
        assert_eq!(snapshot.event_count, Some(1));
    }

    #[test]
    fn event_count_wins_over_busy() {
        let snapshot = StatusSnapshot::from_json(r#"{"busy": true, "eventCount": 0}"#).unwrap();
        assert_eq!(snapshot.effective_event_count(), 0);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(StatusSnapshot::from_json("not json").is_err());
        assert!(StatusSnapshot::from_json(r#"{"eventCount": -3}"#).is_err());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL_DOC.as_bytes()).unwrap();
        let snapshot = StatusSnapshot::load(file.path()).unwrap();
        assert_eq!(snapshot.event_count, Some(2));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = StatusSnapshot::load("/nonexistent/status.json").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
