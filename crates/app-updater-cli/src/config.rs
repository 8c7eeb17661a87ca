use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use app_updater_github::UpdateRequest;
use serde::{Deserialize, Serialize};

/// Settings read from `updater.toml`. Every field can be overridden on the
/// command line.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdaterConfig {
    /// API root of the repository, e.g. `https://api.github.com/repos/owner/repo`.
    pub repo_url: Option<String>,
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,
    #[serde(default = "default_local_dir")]
    pub local_dir: PathBuf,
    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            repo_url: None,
            manifest_path: default_manifest_path(),
            local_dir: default_local_dir(),
            branch: default_branch(),
        }
    }
}

fn default_manifest_path() -> String {
    "manifest.json".into()
}

fn default_local_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_branch() -> String {
    "main".into()
}

/// Values given on the command line, taking precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub repo_url: Option<String>,
    pub manifest_path: Option<String>,
    pub local_dir: Option<PathBuf>,
    pub branch: Option<String>,
    pub token: Option<String>,
}

/// Config file path: `~/.config/app-updater/updater.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("app-updater").join("updater.toml"))
}

/// Load config from `path` (or the default location), falling back to
/// defaults when the file is missing or unparsable.
pub fn load_config(path: Option<&Path>) -> UpdaterConfig {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return UpdaterConfig::default(),
        },
    };

    let Ok(contents) = std::fs::read_to_string(&path) else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return UpdaterConfig::default();
    };

    match toml::from_str::<UpdaterConfig>(&contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
            UpdaterConfig::default()
        }
    }
}

fn github_token() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty())
}

/// Merge config and overrides into a request. The token comes from the
/// command line or `GITHUB_TOKEN`, never from the config file.
pub fn build_request(config: UpdaterConfig, overrides: Overrides) -> Result<UpdateRequest> {
    let repo_url = overrides
        .repo_url
        .or(config.repo_url)
        .context("no repository configured; pass --repo-url or set repo_url in updater.toml")?;

    let request = UpdateRequest::new(
        repo_url,
        overrides.manifest_path.unwrap_or(config.manifest_path),
        overrides.local_dir.unwrap_or(config.local_dir),
    )
    .with_branch(overrides.branch.unwrap_or(config.branch))
    .with_token(overrides.token.or_else(github_token));

    Ok(request)
}
