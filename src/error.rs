use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the library.
///
/// Dictionary and configuration failures end the run; the path and file
/// variants are reported per path and the run continues with the next one.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(String),

    #[error("Failed to load dictionary {}: {source}", path.display())]
    DictionaryLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to build dictionary index: {0}")]
    DictionaryIndex(#[from] fst::Error),

    #[error("{}: {source}", path.display())]
    PathStat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{} is neither a regular file nor a directory.", path.display())]
    PathType { path: PathBuf },

    #[error("Error opening file to check: {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
