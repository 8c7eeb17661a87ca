use app_updater::{ContentResolver, ResolveError};

use crate::content::ContentMetadata;

const USER_AGENT: &str = "app-updater";
const METADATA_ACCEPT: &str = "application/vnd.github.v3+json";

/// Where and how to reach one repository through the Contents API.
#[derive(Debug, Clone)]
pub struct GitHubSourceConfig {
    /// API root of the repository, e.g. `https://api.github.com/repos/owner/repo`.
    pub repo_root: String,
    pub branch: String,
    /// Bearer credential sent on both hops, passed through unmodified.
    pub token: Option<String>,
}

/// Bytes fetched for one path, together with the URL they came from.
#[derive(Debug)]
pub(crate) struct ResolvedContent {
    pub download_url: String,
    pub bytes: Vec<u8>,
}

/// Resolves repository paths with GitHub's two-hop content lookup:
/// the Contents API yields a `download_url`, which serves the raw bytes.
pub struct GitHubContentResolver {
    config: GitHubSourceConfig,
    client: reqwest::Client,
}

impl GitHubContentResolver {
    pub fn new(config: GitHubSourceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn metadata_url(&self, relative_path: &str) -> String {
        format!(
            "{}/contents/{}?ref={}",
            self.config.repo_root.trim_end_matches('/'),
            relative_path.trim_start_matches('/'),
            self.config.branch,
        )
    }

    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.get(url).header("User-Agent", USER_AGENT);

        if let Some(token) = &self.config.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        req
    }

    async fn fetch_metadata(&self, url: &str) -> Result<ContentMetadata, ResolveError> {
        tracing::debug!(%url, "fetching content metadata");

        let response = self
            .build_request(url)
            .header("Accept", METADATA_ACCEPT)
            .send()
            .await
            .map_err(|e| ResolveError::Transport {
                url: url.to_owned(),
                status: None,
                message: e.to_string(),
            })?;

        match response.status().as_u16() {
            404 => {
                return Err(ResolveError::NotFound {
                    url: url.to_owned(),
                });
            }
            403 => {
                return Err(ResolveError::Forbidden {
                    url: url.to_owned(),
                });
            }
            _ => {}
        }

        if !response.status().is_success() {
            return Err(ResolveError::Transport {
                url: url.to_owned(),
                status: Some(response.status().as_u16()),
                message: String::new(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ResolveError::InvalidMetadata {
                url: url.to_owned(),
                message: e.to_string(),
            })
    }

    async fn fetch_content(&self, download_url: &str) -> Result<Vec<u8>, ResolveError> {
        tracing::debug!(%download_url, "downloading content");

        let response = self
            .build_request(download_url)
            .send()
            .await
            .map_err(|e| ResolveError::ContentFetch {
                locator: download_url.to_owned(),
                status: None,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ResolveError::ContentFetch {
                locator: download_url.to_owned(),
                status: Some(response.status().as_u16()),
                message: String::new(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ResolveError::ContentFetch {
                locator: download_url.to_owned(),
                status: None,
                message: format!("failed to read body: {e}"),
            })?;

        Ok(bytes.to_vec())
    }

    pub(crate) async fn resolve_content(
        &self,
        relative_path: &str,
    ) -> Result<ResolvedContent, ResolveError> {
        let url = self.metadata_url(relative_path);
        let metadata = self.fetch_metadata(&url).await?;

        let download_url = metadata
            .download_url
            .ok_or_else(|| ResolveError::InvalidMetadata {
                url: url.clone(),
                message: "no download_url (is the path a directory?)".into(),
            })?;

        let bytes = self.fetch_content(&download_url).await?;

        Ok(ResolvedContent {
            download_url,
            bytes,
        })
    }
}

#[async_trait::async_trait]
impl ContentResolver for GitHubContentResolver {
    fn label(&self) -> &str {
        &self.config.repo_root
    }

    async fn resolve(&self, relative_path: &str) -> Result<Vec<u8>, ResolveError> {
        let content = self.resolve_content(relative_path).await?;
        tracing::debug!(
            path = %relative_path,
            from = %content.download_url,
            bytes = content.bytes.len(),
            "resolved"
        );
        Ok(content.bytes)
    }
}
