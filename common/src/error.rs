use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("orders file not found: {}", .0.display())]
    OrdersNotFound(PathBuf),

    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed orders file {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed theme file {}: {}", .path.display(), .source)]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unknown filter '{0}': expected 'cheap' or 'expensive'")]
    UnknownFilter(String),
}
