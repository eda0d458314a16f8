use crate::parse::ParseError;
use crate::store::StoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("client id must not be empty")]
    EmptyClientId,

    #[error("aborted at line {line} after {accepted} events: {source}")]
    Aborted {
        line: usize,
        accepted: usize,
        #[source]
        source: ParseError,
    },

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}
