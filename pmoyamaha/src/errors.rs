use thiserror::Error;

use pmoynca::YncaError;

/// Failure taxonomy of the adapter.
///
/// Transport and response-shape failures are tolerated by the refresh cycle
/// (state frozen for the cycle, error logged); only caller-input validation
/// (`UnknownSource`, `InvalidListIndex`, `NoCurrentSource`, `Config`)
/// surfaces as a hard error from command methods.
#[derive(Debug, Clone, Error)]
pub enum ReceiverError {
    #[error("HTTP transport failure: {0}")]
    Transport(String),

    #[error("Malformed device response: {0}")]
    MalformedResponse(String),

    #[error("Cannot parse {0} field: {1}")]
    FieldParse(String, String),

    #[error("Unknown source: {0}")]
    UnknownSource(String),

    #[error("List index {0} is outside 1..=65536")]
    InvalidListIndex(u32),

    #[error("No source selected yet; refresh the receiver first")]
    NoCurrentSource,

    #[error("Invalid receiver configuration: {0}")]
    Config(String),
}

impl ReceiverError {
    pub fn transport(message: &str) -> Self {
        ReceiverError::Transport(message.to_string())
    }

    pub fn malformed(message: &str) -> Self {
        ReceiverError::MalformedResponse(message.to_string())
    }

    pub fn field_parse(field: &str, reason: &str) -> Self {
        ReceiverError::FieldParse(field.to_string(), reason.to_string())
    }

    pub fn unknown_source(name: &str) -> Self {
        ReceiverError::UnknownSource(name.to_string())
    }
}

impl From<YncaError> for ReceiverError {
    fn from(err: YncaError) -> Self {
        ReceiverError::MalformedResponse(err.to_string())
    }
}
