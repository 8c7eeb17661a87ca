pub mod content;
pub mod resolver;

use std::path::PathBuf;

use app_updater::{AvailabilityResult, SyncOutcome, Updater};

pub use content::ContentMetadata;
pub use resolver::{GitHubContentResolver, GitHubSourceConfig};

/// One update target: a repository, the manifest inside it, and the local
/// directory mirroring it.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    /// API root of the repository, e.g. `https://api.github.com/repos/owner/repo`.
    pub repo_root: String,
    /// Manifest location, relative to both the repository and `local_dir`.
    pub manifest_path: String,
    pub local_dir: PathBuf,
    pub branch: String,
    pub token: Option<String>,
}

impl UpdateRequest {
    /// A request against the `main` branch with no credential.
    pub fn new(
        repo_root: impl Into<String>,
        manifest_path: impl Into<String>,
        local_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repo_root: repo_root.into(),
            manifest_path: manifest_path.into(),
            local_dir: local_dir.into(),
            branch: "main".into(),
            token: None,
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn updater(&self) -> Updater<GitHubContentResolver> {
        Updater::new(GitHubContentResolver::new(GitHubSourceConfig {
            repo_root: self.repo_root.clone(),
            branch: self.branch.clone(),
            token: self.token.clone(),
        }))
    }
}

/// Check whether `request.local_dir` is behind the published manifest.
/// Never modifies local state.
pub async fn check_available(request: &UpdateRequest) -> AvailabilityResult {
    request
        .updater()
        .check_available(&request.manifest_path, &request.local_dir)
        .await
}

/// Download every file of a newer manifest into `request.local_dir`.
pub async fn synchronize(request: &UpdateRequest) -> SyncOutcome {
    request
        .updater()
        .synchronize(&request.manifest_path, &request.local_dir)
        .await
}
