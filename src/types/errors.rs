//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for request translation and the bridge surface.
///
/// Native capability failures are deliberately absent: they are logged at the
/// bridge boundary and never reach the translation caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Required request fields missing or empty.
    #[error("validation error: {0}")]
    Validation(String),

    /// `fireDate` present but not a recognizable date.
    #[error("date parse error: {0}")]
    DateParse(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error came from inspecting the request itself, as opposed
    /// to reading or decoding it.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::DateParse(_))
    }
}

// Convenience constructors
impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn date_parse(msg: impl Into<String>) -> Self {
        Self::DateParse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            Error::validation("title cannot be empty").to_string(),
            "validation error: title cannot be empty"
        );
        assert_eq!(
            Error::date_parse("unrecognized date: \"soon\"").to_string(),
            "date parse error: unrecognized date: \"soon\""
        );
    }

    #[test]
    fn test_request_error_classification() {
        assert!(Error::validation("x").is_request_error());
        assert!(Error::date_parse("x").is_request_error());

        let io = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_request_error());
    }
}
