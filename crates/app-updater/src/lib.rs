//! Manifest-driven self-update engine.
//!
//! A remote manifest names a version and a list of files. When its version
//! differs from the locally recorded one, every listed file is fetched through
//! a [`ContentResolver`] and written under the local directory, and the local
//! manifest is replaced once the whole set has been applied cleanly.

pub mod engine;
pub mod manifest;
pub mod outcome;
pub mod resolver;
pub mod state;
pub mod sync;
pub mod version;

pub use engine::{UpdateError, Updater};
pub use manifest::{Manifest, UNVERSIONED};
pub use outcome::{AvailabilityResult, SyncOutcome, SyncStatus, classify};
pub use resolver::{ContentResolver, ResolveError};
pub use state::StateError;
pub use sync::{FileSyncError, FileSyncReport, sync_files};
pub use version::{VersionDecision, decide};

#[cfg(test)]
pub mod test_support;
