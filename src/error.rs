//! Error types for the bundler.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the bundler error type.
pub type Result<T> = std::result::Result<T, BundleError>;

/// Main error type for a bundling run.
///
/// The taxonomy is deliberately minimal: a referenced document that cannot
/// be read is fatal and unrecovered, and malformed directive text is not a
/// distinct error kind (it either fails to open or resolves to some path).
#[derive(Error, Debug)]
pub enum BundleError {
    /// A referenced document (root or included) does not exist or cannot
    /// be read
    #[error("failed to read {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
