use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when persisting or printing experiment results.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The results file could not be created or truncated.
    #[error("could not open {}: {source}", .path.display())]
    OpenOutput {
        /// The path that could not be opened.
        path: PathBuf,

        /// The underlying I/O error.
        source: io::Error,
    },

    /// The results file was opened but writing to it failed.
    #[error("could not write {}: {source}", .path.display())]
    WriteOutput {
        /// The path that was being written.
        path: PathBuf,

        /// The underlying I/O error.
        source: io::Error,
    },

    /// The console report could not be written.
    #[error("could not write report to console: {0}")]
    Console(#[source] io::Error),
}

/// A specialized `Result` type for reporting operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
