use catalog_protocol::{ERROR_INVALID_REQUEST, ERROR_PROCESS_LAUNCH, ERROR_PROTOCOL};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProxyError>;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("package identifier must not be empty")]
    InvalidPackage,

    /// The server process could not be started, or it went away before the handshake finished.
    #[error("failed to launch `{command}`: {message}")]
    Launch { command: String, message: String },

    /// The server answered, but not with what the protocol requires.
    #[error("protocol error from `{package}` during {stage}: {message}")]
    Protocol {
        package: String,
        stage: &'static str,
        message: String,
    },
}

impl ProxyError {
    /// Stable error code for tool results.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPackage => ERROR_INVALID_REQUEST,
            Self::Launch { .. } => ERROR_PROCESS_LAUNCH,
            Self::Protocol { .. } => ERROR_PROTOCOL,
        }
    }
}
