//! Per-request snapshot access.

use std::path::Path;

use dtcle_core::StatusSnapshot;

/// Read the current snapshot, treating every failure as "no snapshot".
///
/// The scraper replaces the file atomically, so a fresh read per request is
/// all the coordination needed. Absence is a first-class state: callers
/// render a fallback, not an error.
pub async fn read_snapshot(path: &Path) -> Option<StatusSnapshot> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "status snapshot unreadable");
            return None;
        }
    };

    match StatusSnapshot::from_json(&contents) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "status snapshot malformed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_valid_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"eventCount": 1, "busy": false}"#).unwrap();

        let snapshot = read_snapshot(file.path()).await.unwrap();
        assert_eq!(snapshot.event_count, Some(1));
    }

    #[tokio::test]
    async fn missing_file_is_absent() {
        assert!(read_snapshot(Path::new("/nonexistent/status.json"))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn malformed_file_is_absent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ this is not json").unwrap();

        assert!(read_snapshot(file.path()).await.is_none());
    }
}
