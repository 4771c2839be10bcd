//! Depth-first `#include` expansion into a single flat document.
//!
//! Each directive line is replaced in place by the full expansion of its
//! target; every reachable document is inlined exactly once per run.

use crate::error::{BundleError, Result};
use crate::runner::BundleEvent;
use crossbeam_channel::Sender;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker that introduces an include directive.
const DIRECTIVE_MARKER: &str = "#include \"";

/// Expands include directives against a fixed source-root directory.
///
/// The dedup set lives for one bundling run: the first pre-order encounter
/// of a document inlines its content, and every later reference to the same
/// document collapses to a single empty line.
pub struct Bundler {
    source_dir: PathBuf,
    seen: HashSet<PathBuf>,
    events: Option<Sender<BundleEvent>>,
}

impl Bundler {
    pub fn new(source_dir: PathBuf, events: Option<Sender<BundleEvent>>) -> Self {
        Self {
            source_dir,
            seen: HashSet::new(),
            events,
        }
    }

    /// Recursively expands the document at `path` into flat text.
    ///
    /// Traversal is strict depth-first pre-order, matching the order in
    /// which directive lines appear in each document. Non-directive lines
    /// pass through verbatim, terminators included. Every document
    /// contributes one trailing blank line as the boundary before its
    /// parent's continuation.
    pub fn expand(&mut self, path: &Path) -> Result<String> {
        // Mark before reading so cyclic graphs terminate: a back-reference
        // to a document still being expanded collapses to an empty line.
        self.seen.insert(path.to_path_buf());
        self.notify(BundleEvent::FileExpanded(path.to_path_buf()));

        let content = fs::read_to_string(path).map_err(|source| BundleError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let mut buffer = String::with_capacity(content.len() + 1);
        for line in content.split_inclusive('\n') {
            match parse_directive(line) {
                Some(relative) => {
                    let target = resolve(&self.source_dir, relative);
                    if self.seen.contains(&target) {
                        buffer.push('\n');
                    } else {
                        buffer.push_str(&self.expand(&target)?);
                    }
                }
                None => buffer.push_str(line),
            }
        }
        buffer.push('\n');
        Ok(buffer)
    }

    fn notify(&self, event: BundleEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }
}

/// Extracts the quoted relative path from a directive line.
///
/// A line is a directive iff it contains `#include "`; the referenced path
/// is everything up to the next `"`, or the rest of the line if the closing
/// quote is missing. Lines without the marker are never directives, even if
/// they contain unrelated quoted text.
fn parse_directive(line: &str) -> Option<&str> {
    let start = line.find(DIRECTIVE_MARKER)? + DIRECTIVE_MARKER.len();
    let rest = &line[start..];
    let path = match rest.find('"') {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(path.trim())
}

/// Joins a directive's relative path onto the source root.
///
/// Accepts both `/` and `\` as separators regardless of host conventions
/// and drops empty and bare `.` components.
fn resolve(source_dir: &Path, relative: &str) -> PathBuf {
    let mut resolved = source_dir.to_path_buf();
    for part in relative.split(['/', '\\']) {
        let part = part.trim();
        if part.is_empty() || part == "." {
            continue;
        }
        resolved.push(part);
    }
    resolved
}
