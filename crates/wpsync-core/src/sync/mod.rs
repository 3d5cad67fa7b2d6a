//! Manifest synchronizer: downloads remote wallpapers and rewrites their `url`.
//!
//! One sequential pass: load the manifest, walk categories and wallpapers in
//! order, fetch every HTTP(S) `url` into the asset directory, point the entry
//! at the local copy, then write the manifest back once. Per-item problems
//! (malformed entries, failed fetches) are recorded and skipped; only
//! manifest-level problems abort the run, and an aborted run writes nothing.

mod report;

pub use report::{ItemOutcome, OutcomeKind, SyncEvent, SyncReport};

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::fetch::Fetcher;
use crate::manifest::{self, inspect_manifest, Manifest, ManifestStatus};
use crate::url_model::{derive_filename, is_remote_url, local_reference};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Runs one synchronization pass.
///
/// Relative `config.manifest_path` and `config.asset_dir` resolve against
/// `base_dir`; rewritten `url` values use `config.asset_dir` as configured.
/// `on_event` sees every outcome as it happens, plus a `Downloading` event
/// before each fetch.
pub fn run<F>(
    config: &SyncConfig,
    base_dir: &Path,
    fetcher: &F,
    mut on_event: impl FnMut(&SyncEvent),
) -> Result<SyncReport>
where
    F: Fetcher + ?Sized,
{
    let manifest_path = base_dir.join(&config.manifest_path);
    let mut manifest = Manifest::load(&manifest_path)?;

    let asset_dir = base_dir.join(&config.asset_dir);
    fs::create_dir_all(&asset_dir).map_err(|source| SyncError::AssetDir {
        path: asset_dir.clone(),
        source,
    })?;

    let mut report = SyncReport::new(manifest_path.clone(), config.asset_dir.clone());
    let ctx = EntryContext {
        asset_dir: &asset_dir,
        reference_dir: &config.asset_dir,
    };

    for category in manifest.categories_mut() {
        let name = manifest::category_name(category);
        let list = match manifest::wallpapers_mut(category) {
            Some(list) => list,
            None => {
                tracing::debug!(category = %name, "category has no wallpapers list, skipping");
                emit(
                    &mut report,
                    &mut on_event,
                    ItemOutcome {
                        category: name,
                        position: None,
                        kind: OutcomeKind::CategorySkipped,
                    },
                );
                continue;
            }
        };

        for (index, wallpaper) in list.iter_mut().enumerate() {
            let position = index + 1;
            let kind = sync_entry(wallpaper, &ctx, fetcher, |url| {
                on_event(&SyncEvent::Downloading {
                    category: name.clone(),
                    position,
                    url: url.to_string(),
                })
            });
            emit(
                &mut report,
                &mut on_event,
                ItemOutcome {
                    category: name.clone(),
                    position: Some(position),
                    kind,
                },
            );
        }
    }

    manifest.save(&manifest_path)?;
    tracing::info!(
        manifest = %manifest_path.display(),
        downloaded = report.downloaded,
        skipped = report.skipped,
        failed = report.failed,
        "manifest rewritten"
    );
    Ok(report)
}

/// Loads the manifest the same way `run` does and summarizes it without touching anything.
pub fn inspect(config: &SyncConfig, base_dir: &Path) -> Result<ManifestStatus> {
    let manifest = Manifest::load(&base_dir.join(&config.manifest_path))?;
    Ok(inspect_manifest(&manifest, base_dir))
}

struct EntryContext<'a> {
    /// Where files are written.
    asset_dir: &'a Path,
    /// Prefix written into the manifest.
    reference_dir: &'a Path,
}

fn emit(report: &mut SyncReport, on_event: &mut impl FnMut(&SyncEvent), outcome: ItemOutcome) {
    let event = SyncEvent::Item(outcome);
    on_event(&event);
    if let SyncEvent::Item(outcome) = event {
        report.record(outcome);
    }
}

/// Processes one wallpaper element in place. Only `url` is ever modified.
fn sync_entry<F>(
    wallpaper: &mut Value,
    ctx: &EntryContext<'_>,
    fetcher: &F,
    before_fetch: impl FnOnce(&str),
) -> OutcomeKind
where
    F: Fetcher + ?Sized,
{
    let entry = match wallpaper.as_object_mut() {
        Some(entry) => entry,
        None => {
            tracing::debug!("wallpaper element is not an object, skipping");
            return OutcomeKind::NotAnObject;
        }
    };

    let url = match entry.get("url") {
        Some(Value::String(url)) if is_remote_url(url) => url.clone(),
        Some(Value::String(url)) => {
            tracing::debug!(url = %url, "not an external link, keeping");
            return OutcomeKind::NotRemote {
                url: Some(url.clone()),
            };
        }
        _ => {
            tracing::debug!("wallpaper has no string url, keeping");
            return OutcomeKind::NotRemote { url: None };
        }
    };

    let filename = match derive_filename(&url) {
        Some(name) => name,
        None => {
            tracing::warn!(url = %url, "no usable file name in URL path");
            return OutcomeKind::Failed {
                url,
                reason: "no file name in URL path".to_string(),
            };
        }
    };

    before_fetch(&url);
    let dest = ctx.asset_dir.join(&filename);
    match fetcher.fetch(&url, &dest) {
        Ok(bytes) => {
            let local_path = local_reference(ctx.reference_dir, &filename);
            tracing::info!(url = %url, path = %dest.display(), bytes, "downloaded");
            entry.insert("url".to_string(), Value::String(local_path.clone()));
            OutcomeKind::Downloaded {
                url,
                local_path,
                bytes,
            }
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "download failed, keeping old url");
            OutcomeKind::Failed {
                url,
                reason: e.to_string(),
            }
        }
    }
}
