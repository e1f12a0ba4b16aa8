use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Dataset error: could not open [{}]: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("Dataset error: {0}")]
    Csv(#[from] csv::Error)
}
