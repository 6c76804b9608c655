use thiserror::Error;

/// Failures a relay call can end in. Upstream-originating variants carry the
/// raw upstream message so it can be logged; it is never forwarded verbatim
/// except for `UpstreamGeneric`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    #[error("upstream credential is not configured")]
    MissingCredential,

    #[error("upstream rejected the credential: {0}")]
    AuthenticationFailed(String),

    #[error("upstream token or credit limit exceeded: {0}")]
    TokenLimitExceeded(String),

    #[error("upstream model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("upstream returned no usable completion")]
    InvalidUpstreamResponse,

    #[error("upstream error: {0}")]
    UpstreamGeneric(String),

    #[error("upstream request failed: {0}")]
    NetworkOrUnknown(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, RelayError>;
