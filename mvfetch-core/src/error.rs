//! Error types shared across the mvfetch-core library.
//!
//! Skips (folder already processed, unparsable name, missing audio) are not
//! errors; they are `discovery::SkipReason` outcomes. Everything here is
//! either folder-local (acquisition, normalization, probe, conform) or
//! run-fatal (scratch setup, library enumeration, missing external tools).

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read library directory {0}: {1}")]
    LibraryUnreadable(PathBuf, std::io::Error),

    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, std::io::Error),

    #[error("Failed waiting for {0}: {1}")]
    CommandWait(String, std::io::Error),

    #[error("{0} exited with {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Video acquisition failed: {0}")]
    Acquisition(String),

    #[error("Codec normalization failed: {0}")]
    CodecNormalization(String),

    #[error("Media probe failed: {0}")]
    Probe(String),

    #[error("Conform failed: {0}")]
    Conform(String),

    #[error("Cannot prepare scratch directory {0}: {1}")]
    ScratchSetup(PathBuf, std::io::Error),
}

/// Result type for mvfetch-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

pub(crate) fn command_start_error(tool: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::CommandStart(tool.into(), err)
}

pub(crate) fn command_wait_error(tool: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::CommandWait(tool.into(), err)
}

pub(crate) fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(tool.into(), status, stderr.into())
}
