//! Exchange error types

use thiserror::Error;

/// Errors surfaced at the raw-payload seam. The mappers themselves never
/// fail; only undecodable input or misconfiguration is reported.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),
}

#[derive(Debug, Clone)]
pub enum ErrorKind {
    Recoverable,
    Fatal,
}

impl ExchangeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) | Self::UnexpectedPayload(_) => ErrorKind::Recoverable,
            Self::InvalidSymbol(_) => ErrorKind::Fatal,
        }
    }

    pub fn should_retry(&self) -> bool {
        matches!(self.kind(), ErrorKind::Recoverable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_are_recoverable() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ExchangeError::from(err);
        assert!(err.should_retry());
    }

    #[test]
    fn invalid_symbol_is_fatal() {
        let err = ExchangeError::InvalidSymbol(String::new());
        assert!(!err.should_retry());
    }
}
