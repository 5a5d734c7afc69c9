//! Errors raised while building themes and styles.

use thiserror::Error;

/// Error returned when a theme or style cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The style code was empty or contained only whitespace.
    #[error("style code must not be empty")]
    InvalidArgument,

    /// The style code did not have the required length.
    #[error("style code must be exactly {expected} characters long, got {len}", expected = crate::style::CODE_LEN)]
    OutOfRange { len: usize },

    /// The style code had the right length but could not be decoded.
    #[error("invalid style code '{code}' at position {position}")]
    InvalidCode { code: String, position: usize },

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("unknown line thickness '{0}'")]
    UnknownThickness(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let msg = ThemeError::OutOfRange { len: 4 }.to_string();
        assert!(msg.contains("13"));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_invalid_code_display() {
        let err = ThemeError::InvalidCode {
            code: "style:Z0S/F0S".to_string(),
            position: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("style:Z0S/F0S"));
        assert!(msg.contains("position 6"));
    }
}
