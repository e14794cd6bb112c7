use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or decoding a level file.
#[derive(Debug, Error)]
pub enum LevelLoadError {
    #[error("failed to read level file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed level file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("level {level}, row {row}: `{token}` is not an integer")]
    InvalidCell {
        level: i32,
        row: usize,
        token: String,
    },
    #[error("level {level}, row {row}: cell value {value} is below -1")]
    ValueOutOfRange { level: i32, row: usize, value: i32 },
    #[error("level {0} has no rows")]
    EmptyLevel(i32),
    #[error("level file contains no levels")]
    NoLevels,
}
