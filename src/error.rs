use thiserror::Error;

/// Failures talking to the analysis backend.
///
/// Every variant is terminal for the current attempt. None of them are retried;
/// the page surfaces the message and stays usable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Application(String),

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("No analysis session was provided")]
    MissingSession,
}

impl ClientError {
    /// Wraps a raw JS exception value thrown by `fetch` or a body reader.
    pub fn network(err: impl std::fmt::Debug) -> Self {
        ClientError::Network(format!("{:?}", err))
    }
}

impl From<ClientError> for String {
    fn from(err: ClientError) -> Self {
        err.to_string()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Invalid(String),
}
