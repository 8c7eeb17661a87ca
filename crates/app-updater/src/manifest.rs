use serde::{Deserialize, Serialize};

/// Version assumed when no local manifest has ever been written.
///
/// Publishers must never ship a manifest carrying this version, or a fresh
/// install will look up to date.
pub const UNVERSIONED: &str = "0.0.0";

/// Versioned descriptor of an application's file set.
///
/// The remote copy is authoritative and fetched on every run; the local copy
/// records the last fully applied version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default = "unversioned")]
    pub version: String,

    /// Repository-relative paths, in the order they are synchronized.
    #[serde(default)]
    pub files: Vec<String>,

    /// Keys the updater does not interpret. Kept so that saving a remote
    /// manifest writes back exactly what was published.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn unversioned() -> String {
    UNVERSIONED.to_owned()
}

impl Manifest {
    pub fn new(version: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            version: version.into(),
            files,
            extra: serde_json::Map::new(),
        }
    }

    /// The state assumed when nothing has been installed yet.
    pub fn unversioned() -> Self {
        Self::new(UNVERSIONED, Vec::new())
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Serialize with two-space indentation, the layout used on disk.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
