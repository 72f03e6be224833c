use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("knowledge entry #{index} has an empty key")]
    EmptyKey { index: usize },

    #[error("knowledge entry {key:?} has an empty answer")]
    EmptyAnswer { key: String },

    #[error("duplicate knowledge key {0:?}")]
    DuplicateKey(String),

    #[error("match threshold must be at least 1, got {0}")]
    InvalidThreshold(usize),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
