use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration for amalgam
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AmalgamConfig {
    /// Directory holding all includable documents
    pub source_dir: PathBuf,
    /// Root document to expand, relative to `source_dir`
    pub root: PathBuf,
    /// Path of the output artifact; when unset, the root document's file
    /// name placed in the current directory
    pub output: Option<PathBuf>,
    /// Enables verbose logging to stdout
    pub verbose: bool,
}

impl AmalgamConfig {
    /// Validates the configuration, ensuring the source directory exists.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.source_dir.exists() {
            anyhow::bail!("Source directory does not exist: {:?}", self.source_dir);
        }
        Ok(())
    }

    /// Attempts to load configuration from `amalgam.toml` in the current directory.
    pub fn load_from_file() -> Option<Self> {
        std::fs::read_to_string("amalgam.toml")
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
    }

    /// Resolves the path of the output artifact.
    ///
    /// When no explicit output is configured, the artifact takes the root
    /// document's base name, written one directory above the source tree
    /// (the current directory). An existing file there is overwritten.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(self.root.file_name().unwrap_or(self.root.as_os_str())),
        }
    }
}

impl Default for AmalgamConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("source"),
            root: PathBuf::from("main.hpp"),
            output: None,
            verbose: false,
        }
    }
}
