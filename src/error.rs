//! Scan-level error types.

use std::path::PathBuf;

/// Errors raised while walking directories and parsing manifest files.
///
/// Each variant carries the offending path so a failed run points at the
/// exact file or directory that stopped it. Scan failures are fatal: a
/// malformed manifest terminates the run rather than producing a partial
/// report.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Directory traversal failure (missing root, permission denied).
    #[error("failed to scan {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Manifest file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file is not well-formed XML.
    #[error("malformed XML in {}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// Manifest parsed but lacks a required element.
    #[error("{}: missing <{element}> element", .path.display())]
    MissingElement {
        path: PathBuf,
        element: &'static str,
    },
}
