use thiserror::Error;

/// Errors produced while building or parsing a proxy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProxyError {
    /// The arguments cannot describe a proxy of the requested kind.
    #[error("{0}")]
    InvalidArgument(String),

    /// The proxy kind or url scheme is not recognized.
    #[error("unknown proxy kind: {0}")]
    UnknownKind(String),

    /// The port is not a number in `0..=65535`.
    #[error("invalid proxy port in `{0}`")]
    InvalidPort(String),

    /// The proxy address has no host part.
    #[error("missing proxy host in `{0}`")]
    MissingHost(String),

    /// The proxy url is malformed.
    #[error("invalid proxy url: {0}")]
    InvalidUrl(url::ParseError),
}

pub type Result<T> = std::result::Result<T, ProxyError>;
