//! Crate-level error type and `Result` alias. All failures are fatal to the
//! invocation; the CLI maps any `Error` to a message on stderr and exit 1.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::escape::EscapeError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {path}: {source}")]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("cannot write {path}: {source}")]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error("input line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },

    #[error("input line {line}: {source}")]
    Escape { line: usize, source: EscapeError },
}
