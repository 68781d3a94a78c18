use std::path::PathBuf;

use thiserror::Error;

/// Errors from the ambient layer of the core. Arithmetic itself never fails;
/// division by zero yields non-finite values instead.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no config directory available on this platform")]
    NoConfigDir,

    #[error("failed to read config at {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config at {path}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode config")]
    ConfigEncode(#[from] serde_json::Error),

    #[error("unknown operator symbol: {0:?}")]
    UnknownOperator(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
