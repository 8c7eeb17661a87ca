use std::collections::HashMap;
use std::sync::Mutex;

use crate::{ContentResolver, ResolveError};

/// In-memory resolver for testing. Serves stored bytes by path and records
/// every path it was asked for.
pub struct InMemoryResolver {
    label: String,
    files: HashMap<String, Vec<u8>>,
    failures: HashMap<String, u16>,
    requested: Mutex<Vec<String>>,
}

impl InMemoryResolver {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            files: HashMap::new(),
            failures: HashMap::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Make the content hop for `path` fail with `status`.
    pub fn with_failure(mut self, path: impl Into<String>, status: u16) -> Self {
        self.failures.insert(path.into(), status);
        self
    }

    /// Paths requested so far, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ContentResolver for InMemoryResolver {
    fn label(&self) -> &str {
        &self.label
    }

    async fn resolve(&self, relative_path: &str) -> Result<Vec<u8>, ResolveError> {
        self.requested.lock().unwrap().push(relative_path.to_owned());

        if let Some(status) = self.failures.get(relative_path) {
            return Err(ResolveError::ContentFetch {
                locator: format!("memory://{}/{relative_path}", self.label),
                status: Some(*status),
                message: String::new(),
            });
        }

        self.files
            .get(relative_path)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound {
                url: format!("memory://{}/{relative_path}", self.label),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_stored_content() {
        let resolver = InMemoryResolver::new("repo").with_file("a.txt", "alpha");
        assert_eq!(resolver.resolve("a.txt").await.unwrap(), b"alpha");
    }

    #[tokio::test]
    async fn missing_path_is_not_found() {
        let resolver = InMemoryResolver::new("repo");
        let result = resolver.resolve("missing.txt").await;
        assert!(matches!(result, Err(ResolveError::NotFound { .. })));
    }

    #[tokio::test]
    async fn injected_failure_wins_over_content() {
        let resolver = InMemoryResolver::new("repo")
            .with_file("a.txt", "alpha")
            .with_failure("a.txt", 500);
        let result = resolver.resolve("a.txt").await;
        assert!(matches!(
            result,
            Err(ResolveError::ContentFetch {
                status: Some(500),
                ..
            })
        ));
    }

    #[tokio::test]
    async fn records_requests_in_order() {
        let resolver = InMemoryResolver::new("repo");
        let _ = resolver.resolve("b").await;
        let _ = resolver.resolve("a").await;
        assert_eq!(resolver.requested(), vec!["b", "a"]);
    }
}
