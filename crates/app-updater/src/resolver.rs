use std::sync::Arc;

/// Failures from resolving one repository path to its raw content.
///
/// The metadata hop and the content hop fail with distinct variants so a
/// caller can tell "the repository does not know this path" apart from
/// "the download itself broke".
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("not found at {url}")]
    NotFound { url: String },

    #[error(
        "access forbidden at {url}. Check repository permissions or provide a valid GitHub token."
    )]
    Forbidden { url: String },

    #[error("{}", describe("request to", .url, .status, .message))]
    Transport {
        url: String,
        status: Option<u16>,
        message: String,
    },

    #[error("invalid content metadata from {url}: {message}")]
    InvalidMetadata { url: String, message: String },

    #[error("{}", describe("fetching content from", .locator, .status, .message))]
    ContentFetch {
        locator: String,
        status: Option<u16>,
        message: String,
    },
}

fn describe(prefix: &str, target: &str, status: &Option<u16>, message: &str) -> String {
    match *status {
        Some(code) if message.is_empty() => format!("{prefix} {target} failed (HTTP {code})"),
        Some(code) => format!("{prefix} {target} failed (HTTP {code}): {message}"),
        None => format!("{prefix} {target} failed: {message}"),
    }
}

/// Turns a repository-relative path into the bytes published at that path.
///
/// An implementation is bound to one repository, branch and credential.
/// Each call is a single attempt: no retries happen at this layer.
#[async_trait::async_trait]
pub trait ContentResolver: Send + Sync {
    /// Human-readable name of the repository being resolved against.
    fn label(&self) -> &str;

    async fn resolve(&self, relative_path: &str) -> Result<Vec<u8>, ResolveError>;
}

#[async_trait::async_trait]
impl<T: ContentResolver + ?Sized> ContentResolver for Arc<T> {
    fn label(&self) -> &str {
        (**self).label()
    }

    async fn resolve(&self, relative_path: &str) -> Result<Vec<u8>, ResolveError> {
        (**self).resolve(relative_path).await
    }
}
