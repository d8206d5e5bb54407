use std::path::PathBuf;

use thiserror::Error;

/// Failures the monitor hands back to its caller. Whether to terminate or
/// retry is the caller's decision, not made here.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("D-Bus operation failed: {0}")]
    Bus(#[from] zbus::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Sink {
        path: PathBuf,
        source: std::io::Error,
    },
}
