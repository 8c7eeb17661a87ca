use serde::Deserialize;

/// Response from GitHub's Contents API.
/// `GET /repos/{owner}/{repo}/contents/{path}?ref={branch}`
///
/// Only `download_url` is decoded. It is null for directories and submodules.
#[derive(Debug, Deserialize)]
pub struct ContentMetadata {
    pub download_url: Option<String>,
}
