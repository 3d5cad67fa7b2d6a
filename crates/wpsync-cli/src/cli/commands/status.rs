//! `wpsync status` – show what a sync would do.

use anyhow::{Context, Result};
use std::path::PathBuf;
use wpsync_core::config::SyncConfig;
use wpsync_core::manifest::ManifestStatus;
use wpsync_core::sync;

/// Inspects the manifest off the async runtime (it stats every local file) and prints a table.
pub async fn run_status(cfg: SyncConfig, base_dir: PathBuf) -> Result<()> {
    let status = tokio::task::spawn_blocking(move || sync::inspect(&cfg, &base_dir))
        .await
        .context("status task panicked")??;
    for line in status_lines(&status) {
        println!("{}", line);
    }
    Ok(())
}

fn status_lines(status: &ManifestStatus) -> Vec<String> {
    if status.categories.is_empty() {
        return vec!["No categories in manifest.".to_string()];
    }

    let mut lines = vec![format!(
        "{:<24} {:>7} {:>7} {:>8} {:>8} {:>6}",
        "CATEGORY", "REMOTE", "LOCAL", "MISSING", "INVALID", "TOTAL"
    )];
    for c in &status.categories {
        if !c.has_wallpapers {
            lines.push(format!("{:<24} (no wallpapers list, skipped)", c.name));
            continue;
        }
        lines.push(format!(
            "{:<24} {:>7} {:>7} {:>8} {:>8} {:>6}",
            c.name,
            c.remote,
            c.local_present,
            c.local_missing,
            c.invalid,
            c.total()
        ));
    }

    if status.is_fully_local() {
        lines.push("All wallpapers are local.".to_string());
    } else {
        lines.push(format!(
            "{} remote wallpaper(s) to download, {} local path(s) missing on disk.",
            status.remote(),
            status.local_missing()
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use wpsync_core::manifest::CategoryStatus;

    #[test]
    fn table_includes_total_column() {
        let status = ManifestStatus {
            categories: vec![
                CategoryStatus {
                    name: "Nature".to_string(),
                    has_wallpapers: true,
                    remote: 2,
                    local_present: 3,
                    local_missing: 1,
                    invalid: 0,
                },
                CategoryStatus {
                    name: "Broken".to_string(),
                    ..CategoryStatus::default()
                },
            ],
        };
        let lines = status_lines(&status);
        assert!(lines[0].ends_with("TOTAL"));
        assert!(lines[1].starts_with("Nature"));
        assert!(lines[1].ends_with("     6"));
        assert!(lines[2].contains("no wallpapers list"));
        assert_eq!(
            lines[3],
            "2 remote wallpaper(s) to download, 1 local path(s) missing on disk."
        );
    }

    #[test]
    fn empty_manifest_message() {
        assert_eq!(
            status_lines(&ManifestStatus::default()),
            vec!["No categories in manifest.".to_string()]
        );
    }
}
