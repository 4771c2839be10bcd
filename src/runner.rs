//! Run driver: wires configuration, expansion and output writing together.

use crate::bundler::Bundler;
use crate::config::AmalgamConfig;
use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use std::fs;
use std::path::PathBuf;

/// Progress events emitted during a bundling run.
#[derive(Debug, Clone)]
pub enum BundleEvent {
    /// A document was opened for expansion (pre-order)
    FileExpanded(PathBuf),
    /// The artifact was written to this path
    Complete(PathBuf),
}

/// Notify helper for optional sender
fn notify(tx: &Option<Sender<BundleEvent>>, event: BundleEvent) {
    if let Some(tx) = tx {
        let _ = tx.send(event);
    }
}

/// Main entry point for the bundler in CLI mode.
///
/// Expansion is fully synchronous and single-threaded; the unbounded
/// channel only buffers per-file progress events, drained once the
/// traversal is done.
pub fn run(config: AmalgamConfig) -> Result<()> {
    let (tx, rx) = crossbeam_channel::unbounded();

    let result = run_bundle(config, Some(tx));

    for event in rx {
        match event {
            BundleEvent::FileExpanded(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                println!("Bundling: {}", name);
            }
            BundleEvent::Complete(path) => println!("Done: {}", path.display()),
        }
    }

    result
}

/// Expands the root document and writes the artifact.
///
/// The output file is only created after the whole expansion has
/// succeeded, so a failed run leaves no partial artifact behind.
pub fn run_bundle(config: AmalgamConfig, tx: Option<Sender<BundleEvent>>) -> Result<()> {
    let source_dir = config
        .source_dir
        .canonicalize()
        .with_context(|| format!("Failed to find source directory: {:?}", config.source_dir))?;
    let root = source_dir.join(&config.root);
    let output = config.output_path();

    if config.verbose {
        println!("Source root: {}", source_dir.display());
    }

    let mut bundler = Bundler::new(source_dir, tx.clone());
    let text = bundler.expand(&root)?;

    fs::write(&output, &text)
        .with_context(|| format!("Failed to write output: {:?}", output))?;

    notify(&tx, BundleEvent::Complete(output));
    Ok(())
}
