//! `wpsync sync` – download remote wallpapers and rewrite the manifest.

use anyhow::{Context, Result};
use std::path::PathBuf;
use wpsync_core::config::SyncConfig;
use wpsync_core::fetch::CurlFetcher;
use wpsync_core::sync::{self, OutcomeKind, SyncEvent, SyncReport};

/// Runs the blocking synchronizer off the async runtime and prints each outcome as it lands.
pub async fn run_sync(cfg: SyncConfig, base_dir: PathBuf) -> Result<()> {
    let report = tokio::task::spawn_blocking(move || {
        let fetcher = CurlFetcher::new(cfg.http.clone());
        sync::run(&cfg, &base_dir, &fetcher, print_event)
    })
    .await
    .context("sync task panicked")??;

    for line in summary_lines(&report) {
        println!("{}", line);
    }
    if !report.is_clean() {
        tracing::warn!("{} wallpaper(s) kept their remote url", report.failed);
    }
    Ok(())
}

fn print_event(event: &SyncEvent) {
    match event {
        SyncEvent::Downloading { url, .. } => println!("Downloading {}...", url),
        SyncEvent::Item(outcome) => println!("{}", outcome),
    }
}

/// Closing summary: rewrite notice, counts, then one line per failed entry.
fn summary_lines(report: &SyncReport) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!(
            "Successfully updated {} with new image paths.",
            report.manifest_path.display()
        ),
        format!(
            "{} downloaded, {} skipped, {} failed",
            report.downloaded, report.skipped, report.failed
        ),
    ];
    if !report.is_clean() {
        lines.push("Still remote:".to_string());
        for outcome in report.failures() {
            if let OutcomeKind::Failed { url, reason } = &outcome.kind {
                lines.push(format!("  [{}] {} ({})", outcome.category, url, reason));
            }
        }
    }
    lines
}
