use std::path::Path;

use crate::manifest::Manifest;
use crate::outcome::{AvailabilityResult, SyncOutcome, classify};
use crate::resolver::{ContentResolver, ResolveError};
use crate::state::{self, StateError};
use crate::sync::sync_files;
use crate::version::{self, VersionDecision};

/// Failures that abort a run before any file is processed.
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("could not resolve manifest {path}: {source}")]
    ManifestUnavailable {
        path: String,
        #[source]
        source: ResolveError,
    },

    #[error("malformed remote manifest {path}: {source}")]
    MalformedManifest {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    LocalState(#[from] StateError),
}

/// Drives manifest-based updates of one local directory from one repository.
///
/// All repository coordinates live in the resolver; the engine holds no other
/// state, so separate `Updater`s never interfere. Two runs against the same
/// `local_dir` at once are not safe and must be prevented by the caller.
pub struct Updater<R> {
    resolver: R,
}

impl<R: ContentResolver> Updater<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Report whether the remote manifest's version differs from the local one.
    ///
    /// Read-only: nothing under `local_dir` is created or modified.
    pub async fn check_available(&self, manifest_path: &str, local_dir: &Path) -> AvailabilityResult {
        match self.gate(manifest_path, local_dir).await {
            Ok((_, decision)) => AvailabilityResult {
                update_available: decision.proceed,
                remote_version: Some(decision.remote_version),
                errors: Vec::new(),
            },
            Err(e) => {
                let message = format!("Update check failed: {e}");
                tracing::error!("{message}");
                AvailabilityResult::failed(message)
            }
        }
    }

    /// Bring `local_dir` up to the remote manifest's version.
    ///
    /// Every listed file is re-fetched when the versions differ. The local
    /// manifest is replaced only when at least one file was written and no
    /// file failed, so an interrupted or partial run is retried in full next
    /// time.
    pub async fn synchronize(&self, manifest_path: &str, local_dir: &Path) -> SyncOutcome {
        match self.try_synchronize(manifest_path, local_dir).await {
            Ok(outcome) => {
                tracing::info!(status = %outcome.status, "update finished");
                outcome
            }
            Err(e) => {
                let message = format!("Update failed: {e}");
                tracing::error!("{message}");
                SyncOutcome::top_level_failure(message)
            }
        }
    }

    async fn try_synchronize(
        &self,
        manifest_path: &str,
        local_dir: &Path,
    ) -> Result<SyncOutcome, UpdateError> {
        let (remote, decision) = self.gate(manifest_path, local_dir).await?;

        if !decision.proceed {
            tracing::info!(version = %decision.local_version, "no update needed");
            return Ok(SyncOutcome::no_update_needed());
        }

        std::fs::create_dir_all(local_dir).map_err(|source| StateError::Io {
            path: local_dir.to_path_buf(),
            source,
        })?;

        let report = sync_files(&self.resolver, &remote, local_dir, manifest_path).await;
        let updated_files = report.updated_files;
        let mut errors = report.errors;

        if !updated_files.is_empty()
            && errors.is_empty()
            && let Err(e) = state::save(local_dir, manifest_path, &remote)
        {
            let message = format!("Failed to save local manifest {manifest_path}: {e}");
            tracing::error!("{message}");
            errors.push(message);
        }

        Ok(SyncOutcome {
            status: classify(decision.proceed, &updated_files, &errors),
            updated_files,
            errors,
        })
    }

    /// Resolve the remote manifest, load the local one, and compare versions.
    async fn gate(
        &self,
        manifest_path: &str,
        local_dir: &Path,
    ) -> Result<(Manifest, VersionDecision), UpdateError> {
        tracing::info!(
            source = %self.resolver.label(),
            manifest = %manifest_path,
            "fetching remote manifest"
        );

        let bytes = self.resolver.resolve(manifest_path).await.map_err(|source| {
            UpdateError::ManifestUnavailable {
                path: manifest_path.to_owned(),
                source,
            }
        })?;

        let remote =
            Manifest::from_slice(&bytes).map_err(|source| UpdateError::MalformedManifest {
                path: manifest_path.to_owned(),
                source,
            })?;

        let local = state::load(local_dir, manifest_path)?;
        let decision = version::decide(&remote, &local);

        tracing::info!(
            remote = %decision.remote_version,
            local = %decision.local_version,
            "compared versions"
        );

        Ok((remote, decision))
    }
}
