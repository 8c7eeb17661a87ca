use crate::manifest::Manifest;

/// Result of comparing the remote manifest against the local one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDecision {
    pub proceed: bool,
    pub remote_version: String,
    pub local_version: String,
}

/// Versions are opaque: any difference, including a "lower" remote version,
/// counts as an update.
pub fn decide(remote: &Manifest, local: &Manifest) -> VersionDecision {
    VersionDecision {
        proceed: remote.version != local.version,
        remote_version: remote.version.clone(),
        local_version: local.version.clone(),
    }
}
