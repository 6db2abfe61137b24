//! Writes the print page to disk and hands it to the default browser
//!
//! Export pages land in the platform cache directory and old ones are
//! pruned, so repeated exports do not accumulate forever.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use directories::ProjectDirs;
use thiserror::Error;

use crate::core::config::ExportConfig;
use crate::core::preview::ResumePreview;
use crate::export::html::{self, PrintOptions};

/// Errors surfaced by the export path.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no writable export directory on this platform")]
    NoExportDir,

    #[error("could not write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not open {} in a browser", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Render the preview to an HTML file and open it in the default browser.
/// Returns the path of the written page.
pub fn print_preview(
    preview: &ResumePreview,
    config: &ExportConfig,
) -> Result<PathBuf, ExportError> {
    let dir = export_dir().ok_or(ExportError::NoExportDir)?;
    let path = write_print_file(preview, config, &dir)?;

    open::that(&path).map_err(|source| ExportError::Launch {
        path: path.clone(),
        source,
    })?;
    tracing::info!("Opened {} in the default browser", path.display());

    Ok(path)
}

/// Write the print page into `dir` and prune older pages down to the
/// configured count. The page just written is never a prune candidate.
pub fn write_print_file(
    preview: &ResumePreview,
    config: &ExportConfig,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(export_file_name());
    let page = html::render_page(preview, &PrintOptions::from(config));
    fs::write(&path, page).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!("Wrote print page {}", path.display());

    prune_exports(dir, config.keep_exports, &path);

    Ok(path)
}

/// Cache location for generated pages, e.g. `~/.cache/cvforge/exports`
/// on Linux.
fn export_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "cvforge", "CVForge")
        .map(|dirs| dirs.cache_dir().join("exports"))
}

fn export_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("cv-{millis}.html")
}

/// Remove the oldest `.html` pages so at most `keep` remain, counting
/// `just_written`. That page is skipped when collecting candidates: mtime
/// ordering alone must not be able to delete it, since a stale page can
/// carry a newer timestamp than the export in progress (clock steps,
/// files copied in with their mtime preserved). Errors are logged, not
/// returned; other file types in the directory are left alone.
fn prune_exports(dir: &Path, keep: usize, just_written: &Path) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!("Could not scan export directory: {err}");
            return;
        }
    };

    let mut pages: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        if path == just_written {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        pages.push((modified, path));
    }

    // just_written occupies one of the retained slots
    let keep_others = keep.saturating_sub(1);
    if pages.len() <= keep_others {
        return;
    }

    pages.sort_by_key(|(modified, _)| *modified);
    let excess = pages.len() - keep_others;
    for (_, path) in pages.into_iter().take(excess) {
        if let Err(err) = fs::remove_file(&path) {
            tracing::warn!("Could not remove old export {}: {err}", path.display());
        }
    }
}
