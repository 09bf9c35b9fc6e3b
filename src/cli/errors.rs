use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not load config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: matcost::Error,
    },

    #[error(transparent)]
    Core(#[from] matcost::Error),
}
