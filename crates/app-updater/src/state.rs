use std::path::{Component, Path, PathBuf};

use crate::manifest::Manifest;

/// Errors from reading, writing, or addressing files under the local directory.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("path escapes the local directory: {0}")]
    UnsafePath(String),
}

impl StateError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Map a repository-relative path to its location under `local_dir`.
///
/// Absolute paths and `..` components are rejected.
pub fn local_path(local_dir: &Path, relative: &str) -> Result<PathBuf, StateError> {
    let relative_path = Path::new(relative);
    let safe = !relative.is_empty()
        && relative_path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if !safe {
        return Err(StateError::UnsafePath(relative.to_owned()));
    }

    Ok(local_dir.join(relative_path))
}

/// Read the last applied manifest.
///
/// A missing file means nothing has been installed yet and yields
/// [`Manifest::unversioned`]. A file that exists but cannot be read or parsed
/// is an error.
pub fn load(local_dir: &Path, manifest_path: &str) -> Result<Manifest, StateError> {
    let path = local_path(local_dir, manifest_path)?;

    let contents = match std::fs::read(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no local manifest, assuming unversioned");
            return Ok(Manifest::unversioned());
        }
        Err(e) => return Err(StateError::io(&path, e)),
    };

    Manifest::from_slice(&contents).map_err(|source| StateError::Malformed { path, source })
}

/// Overwrite the local manifest with `manifest`.
///
/// The JSON is written to a sibling `.tmp` file first and renamed into place.
pub fn save(local_dir: &Path, manifest_path: &str, manifest: &Manifest) -> Result<(), StateError> {
    let path = local_path(local_dir, manifest_path)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StateError::io(parent, e))?;
    }

    let json = manifest
        .to_pretty_json()
        .map_err(|source| StateError::Malformed {
            path: path.clone(),
            source,
        })?;

    let mut staged = path.clone().into_os_string();
    staged.push(".tmp");
    let staged = PathBuf::from(staged);

    std::fs::write(&staged, json).map_err(|e| StateError::io(&staged, e))?;
    std::fs::rename(&staged, &path).map_err(|e| StateError::io(&path, e))?;

    tracing::info!(path = %path.display(), version = %manifest.version, "local manifest updated");
    Ok(())
}

/// Write fetched bytes to `relative` under `local_dir`, creating parent
/// directories and replacing whatever was there.
///
/// The destination is overwritten in place; a failure partway through can
/// leave it truncated.
pub fn write_file(local_dir: &Path, relative: &str, bytes: &[u8]) -> Result<PathBuf, StateError> {
    let path = local_path(local_dir, relative)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StateError::io(parent, e))?;
    }
    std::fs::write(&path, bytes).map_err(|e| StateError::io(&path, e))?;
    Ok(path)
}
