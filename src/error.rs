use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that end a judgment load.
///
/// Lines that do not match the header or body format are skipped and never
/// surface here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open judgment file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line failed after the file was opened.
    #[error("failed to read judgment line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A body line referenced a query id with no header entry.
    #[error("line {line}: qid {qid} has no keywords in the header")]
    UnknownQid { qid: u64, line: usize },
}
