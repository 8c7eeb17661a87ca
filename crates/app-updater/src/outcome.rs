use serde::Serialize;

/// Terminal classification of one synchronization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Success,
    Partial,
    Failed,
    NoUpdateNeeded,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Partial => "partial",
            Self::Failed => "failed",
            Self::NoUpdateNeeded => "no_update_needed",
        }
    }
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a front end needs to report a synchronization run.
///
/// `updated_files` and `errors` follow manifest order. A path never appears
/// in both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncOutcome {
    pub status: SyncStatus,
    pub updated_files: Vec<String>,
    pub errors: Vec<String>,
}

impl SyncOutcome {
    pub fn no_update_needed() -> Self {
        Self {
            status: SyncStatus::NoUpdateNeeded,
            updated_files: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// A run that aborted before any file was processed.
    pub fn top_level_failure(message: impl Into<String>) -> Self {
        Self {
            status: SyncStatus::Failed,
            updated_files: Vec::new(),
            errors: vec![message.into()],
        }
    }

    /// Whether the local tree changed, i.e. a restart may be warranted.
    pub fn changed_files(&self) -> bool {
        matches!(self.status, SyncStatus::Success | SyncStatus::Partial)
            && !self.updated_files.is_empty()
    }
}

/// Answer to "is an update available?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityResult {
    pub update_available: bool,
    pub remote_version: Option<String>,
    pub errors: Vec<String>,
}

impl AvailabilityResult {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            update_available: false,
            remote_version: None,
            errors: vec![message.into()],
        }
    }
}

/// Reduce a run's per-file results to a single status.
///
/// A version match never reaches the synchronizer. Otherwise an error-free run
/// succeeds even when the manifest listed no files.
pub fn classify(versions_differ: bool, updated_files: &[String], errors: &[String]) -> SyncStatus {
    if !versions_differ {
        return SyncStatus::NoUpdateNeeded;
    }

    match (errors.is_empty(), updated_files.is_empty()) {
        (true, _) => SyncStatus::Success,
        (false, false) => SyncStatus::Partial,
        (false, true) => SyncStatus::Failed,
    }
}
