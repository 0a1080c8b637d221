//! Error types for plotcanvas.
//!
//! Canvas bookkeeping never fails: missing ids are silent no-ops. The errors
//! here cover the outer surfaces: export files, the clipboard and scripts.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for plotcanvas operations.
pub type Result<T> = std::result::Result<T, PlotCanvasError>;

/// Errors that can occur in plotcanvas.
#[derive(Debug, Error)]
pub enum PlotCanvasError {
    /// Failed to write an export file.
    #[error("Failed to write export file: {path}")]
    ExportWrite {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a script file.
    #[error("Failed to read script: {path}")]
    ScriptRead {
        /// Script path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A script line could not be parsed.
    #[error("Script line {line}: {message}")]
    Script {
        /// One-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Failed to encode CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotCanvasError {
    /// Create an ExportWrite error.
    pub fn export_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::ExportWrite { path, source }
    }

    /// Create a ScriptRead error.
    pub fn script_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::ScriptRead { path, source }
    }

    /// Create a Script error.
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        Self::Script {
            line,
            message: message.into(),
        }
    }
}
