pub mod bundler;
pub mod config;
pub mod error;
pub mod runner;

// Re-export key items for convenience
pub use bundler::Bundler;
pub use config::AmalgamConfig;
pub use error::BundleError;
pub use runner::{BundleEvent, run, run_bundle};
