use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InflectError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed input on line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("line {line} contains no cluster members")]
    EmptyCluster { line: u64 },

    #[error("line {line}, field {field} is empty")]
    EmptyMember { line: u64, field: usize },

    #[error("invalid record store {path:?}: {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, InflectError>;
