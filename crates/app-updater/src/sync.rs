use std::path::Path;

use crate::manifest::Manifest;
use crate::resolver::{ContentResolver, ResolveError};
use crate::state::{self, StateError};

/// Per-file results of one pass over a manifest's file list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSyncReport {
    pub updated_files: Vec<String>,
    pub errors: Vec<String>,
}

/// Why a single file could not be brought up to date.
#[derive(Debug, thiserror::Error)]
pub enum FileSyncError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    LocalIo(#[from] StateError),
}

/// Fetch and write every file listed in `remote`, in manifest order.
///
/// A failing file is recorded and skipped; it never stops the files after it.
/// Each file is resolved and written before the next one starts. An entry
/// naming the manifest itself is left alone: the local manifest is only ever
/// written by [`state::save`] once the whole run has succeeded.
pub async fn sync_files(
    resolver: &dyn ContentResolver,
    remote: &Manifest,
    local_dir: &Path,
    manifest_path: &str,
) -> FileSyncReport {
    let mut report = FileSyncReport::default();
    let manifest_location = state::local_path(local_dir, manifest_path).ok();

    for file_path in &remote.files {
        if manifest_location.is_some()
            && state::local_path(local_dir, file_path).ok() == manifest_location
        {
            tracing::debug!(file = %file_path, "skipping manifest entry");
            continue;
        }

        match sync_one(resolver, file_path, local_dir).await {
            Ok(()) => {
                tracing::info!(file = %file_path, "updated");
                report.updated_files.push(file_path.clone());
            }
            Err(e) => {
                let message = format!("Failed to update {file_path}: {e}");
                tracing::warn!("{message}");
                report.errors.push(message);
            }
        }
    }

    report
}

async fn sync_one(
    resolver: &dyn ContentResolver,
    file_path: &str,
    local_dir: &Path,
) -> Result<(), FileSyncError> {
    // Reject unsafe paths before spending a request on them.
    state::local_path(local_dir, file_path)?;

    let bytes = resolver.resolve(file_path).await?;
    state::write_file(local_dir, file_path, &bytes)?;
    Ok(())
}
