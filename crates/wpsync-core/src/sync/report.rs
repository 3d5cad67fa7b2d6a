//! Per-item outcomes and the aggregated run report.

use std::fmt;
use std::path::PathBuf;

/// What happened to one category or wallpaper entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Fetched and the entry's `url` now points at `local_path`.
    Downloaded {
        url: String,
        local_path: String,
        bytes: u64,
    },
    /// The category has no well-formed `wallpapers` list.
    CategorySkipped,
    /// The wallpaper element is not an object.
    NotAnObject,
    /// `url` is missing, not a string, or not an HTTP(S) link.
    NotRemote { url: Option<String> },
    /// Fetch or filename derivation failed; `url` kept as-is.
    Failed { url: String, reason: String },
}

impl OutcomeKind {
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            OutcomeKind::CategorySkipped | OutcomeKind::NotAnObject | OutcomeKind::NotRemote { .. }
        )
    }
}

/// Outcome tagged with where in the manifest it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    /// Category display name (`unknown` if unnamed).
    pub category: String,
    /// 1-based wallpaper position; `None` for category-level outcomes.
    pub position: Option<usize>,
    pub kind: OutcomeKind,
}

impl fmt::Display for ItemOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, self.position) {
            (OutcomeKind::CategorySkipped, _) => write!(
                f,
                "Skipping category '{}': no 'wallpapers' list found.",
                self.category
            ),
            (OutcomeKind::NotAnObject, Some(pos)) => write!(
                f,
                "Skipping item {} in category '{}': not a valid wallpaper object.",
                pos, self.category
            ),
            (OutcomeKind::NotAnObject, None) => write!(
                f,
                "Skipping item in category '{}': not a valid wallpaper object.",
                self.category
            ),
            (OutcomeKind::NotRemote { url: Some(url) }, _) => write!(
                f,
                "Skipping wallpaper '{}': not an external link, keeping existing path.",
                url
            ),
            (OutcomeKind::NotRemote { url: None }, _) => {
                write!(f, "Skipping wallpaper: no 'url' value, keeping entry as-is.")
            }
            (OutcomeKind::Downloaded { local_path, bytes, .. }, _) => {
                write!(f, "Saved {} ({} bytes)", local_path, bytes)
            }
            (OutcomeKind::Failed { url, reason }, _) => write!(
                f,
                "Failed to download {}: {}. Keeping old URL for wallpaper.",
                url, reason
            ),
        }
    }
}

/// Progress notifications emitted while a run is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// About to fetch `url` for the given entry.
    Downloading {
        category: String,
        position: usize,
        url: String,
    },
    /// An entry (or whole category) finished.
    Item(ItemOutcome),
}

/// Result of one synchronizer run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Manifest file that was rewritten.
    pub manifest_path: PathBuf,
    /// Asset directory as configured (the prefix of rewritten `url` values).
    pub asset_dir: PathBuf,
    /// Every outcome, in manifest order.
    pub outcomes: Vec<ItemOutcome>,
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl SyncReport {
    pub fn new(manifest_path: PathBuf, asset_dir: PathBuf) -> Self {
        Self {
            manifest_path,
            asset_dir,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: ItemOutcome) {
        match &outcome.kind {
            OutcomeKind::Downloaded { .. } => self.downloaded += 1,
            OutcomeKind::Failed { .. } => self.failed += 1,
            kind => {
                debug_assert!(kind.is_skip());
                self.skipped += 1
            }
        }
        self.outcomes.push(outcome);
    }

    /// True when no entry failed.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.kind, OutcomeKind::Failed { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(kind: OutcomeKind) -> ItemOutcome {
        ItemOutcome {
            category: "Nature".to_string(),
            position: Some(2),
            kind,
        }
    }

    #[test]
    fn record_updates_counters() {
        let mut report = SyncReport::new("wallpapers.json".into(), "wallpapers".into());
        report.record(outcome(OutcomeKind::Downloaded {
            url: "http://x/a.png".into(),
            local_path: "wallpapers/a.png".into(),
            bytes: 10,
        }));
        report.record(outcome(OutcomeKind::NotAnObject));
        report.record(outcome(OutcomeKind::NotRemote { url: None }));
        report.record(outcome(OutcomeKind::Failed {
            url: "http://x/b.png".into(),
            reason: "HTTP 404".into(),
        }));
        assert_eq!(report.downloaded, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.outcomes.len(), 4);
        assert!(!report.is_clean());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            outcome(OutcomeKind::NotAnObject).to_string(),
            "Skipping item 2 in category 'Nature': not a valid wallpaper object."
        );
        let skipped = ItemOutcome {
            category: "Empty".to_string(),
            position: None,
            kind: OutcomeKind::CategorySkipped,
        };
        assert_eq!(
            skipped.to_string(),
            "Skipping category 'Empty': no 'wallpapers' list found."
        );
        assert!(outcome(OutcomeKind::Failed {
            url: "http://x/b.png".into(),
            reason: "HTTP 404".into(),
        })
        .to_string()
        .contains("HTTP 404"));
    }

    #[test]
    fn skip_kinds() {
        assert!(OutcomeKind::CategorySkipped.is_skip());
        assert!(OutcomeKind::NotRemote { url: None }.is_skip());
        assert!(!OutcomeKind::Failed {
            url: String::new(),
            reason: String::new()
        }
        .is_skip());
    }
}
