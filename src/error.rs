//! Error types for the ladle_colors library

use thiserror::Error;

/// Result type alias for ladle_colors operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors raised by color conversion and palette generation.
///
/// Every error is scoped to the single call that produced it; there is no
/// partial state to roll back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// A representation's input value is malformed or out of range
    #[error("Invalid {representation} value: {reason}")]
    Format {
        representation: &'static str,
        reason: String,
    },

    /// A structurally valid but semantically invalid palette request
    #[error("Invalid parameter: {parameter} = {value} ({reason})")]
    Validation {
        parameter: &'static str,
        value: String,
        reason: String,
    },
}

impl ColorError {
    /// Create a format error for the named representation
    pub fn format(representation: &'static str, reason: impl Into<String>) -> Self {
        Self::Format {
            representation,
            reason: reason.into(),
        }
    }

    /// Create a validation error for a request parameter
    pub fn validation(
        parameter: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            parameter,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// True for [`ColorError::Format`]
    pub fn is_format(&self) -> bool {
        matches!(self, ColorError::Format { .. })
    }

    /// True for [`ColorError::Validation`]
    pub fn is_validation(&self) -> bool {
        matches!(self, ColorError::Validation { .. })
    }

    /// Get user-friendly error description for API clients
    pub fn user_message(&self) -> String {
        match self {
            ColorError::Format {
                representation: "hex",
                ..
            } => "Hex colors must be 6 hexadecimal digits, optionally prefixed with '#'.".to_string(),
            ColorError::Format {
                representation: "rgb",
                ..
            } => "RGB channels must be integers between 0 and 255.".to_string(),
            ColorError::Format {
                representation: "hsl",
                ..
            } => "HSL hue must be in [0, 360) and saturation/lightness in [0, 100].".to_string(),
            ColorError::Format {
                representation: "hsv",
                ..
            } => "HSV hue must be in [0, 360) and saturation/value in [0, 100].".to_string(),
            ColorError::Format { reason, .. } => format!("Malformed color: {reason}"),
            ColorError::Validation {
                parameter, reason, ..
            } => format!("Invalid {parameter}: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = ColorError::format("hex", "expected 6 digits, got 5");
        assert_eq!(err.to_string(), "Invalid hex value: expected 6 digits, got 5");
        assert!(err.is_format());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ColorError::validation("count", 0, "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: count = 0 (must be at least 1)"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_user_message_per_representation() {
        let hex = ColorError::format("hex", "bad");
        assert!(hex.user_message().contains("6 hexadecimal digits"));

        let rgb = ColorError::format("rgb", "bad");
        assert!(rgb.user_message().contains("0 and 255"));

        let color = ColorError::format("color", "rgb does not match hex");
        assert_eq!(color.user_message(), "Malformed color: rgb does not match hex");

        let count = ColorError::validation("count", 0, "must be at least 1");
        assert_eq!(count.user_message(), "Invalid count: must be at least 1");
    }
}
