use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("GET {url} timed out: {message}")]
    Timeout { url: String, message: String },

    #[error("GET {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

impl FetchError {
    pub(crate) fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return Self::Status {
                url: url.to_string(),
                status: status.as_u16(),
            };
        }
        if error.is_timeout() {
            return Self::Timeout {
                url: url.to_string(),
                message: error.to_string(),
            };
        }
        Self::Request {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
