use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("frontend bundle not found at {0} (run `trunk build` in frontend/)")]
    MissingFrontend(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
