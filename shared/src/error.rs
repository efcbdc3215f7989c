use std::fmt;

/// Any failure talking to the roulette backend.
///
/// The controller treats every variant the same way; they only differ in
/// what ends up in the log line.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Status(u16),
    Decode(String),
    Rejected(Option<String>),
    MissingField(&'static str),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(code) => write!(f, "Error status: {}", code),
            ApiError::Decode(msg) => write!(f, "Error parsing response: {}", msg),
            ApiError::Rejected(Some(msg)) => write!(f, "Server rejected request: {}", msg),
            ApiError::Rejected(None) => write!(f, "Server rejected request"),
            ApiError::MissingField(field) => write!(f, "Missing {} in response", field),
        }
    }
}

impl std::error::Error for ApiError {}
