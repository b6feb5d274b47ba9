use thiserror::Error;

/// Error types for parsing and validating analysis limits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitsError {
    /// Input text does not match the size literal grammar
    #[error("failed to parse size literal '{literal}'")]
    MalformedSizeLiteral { literal: String },

    /// A parsed value is below the minimum its field allows.
    /// Displays `message` verbatim; callers match on that text.
    #[error("{message}")]
    ValueTooLow {
        field: &'static str,
        minimum: i64,
        value: i64,
        message: String,
    },

    /// The surrounding JSON document is not a valid limits object
    #[error("invalid limits document: {message}")]
    Document { message: String },
}

impl LimitsError {
    pub fn malformed(literal: impl Into<String>) -> Self {
        Self::MalformedSizeLiteral {
            literal: literal.into(),
        }
    }

    pub fn value_too_low(
        field: &'static str,
        minimum: i64,
        value: i64,
        message: impl Into<String>,
    ) -> Self {
        Self::ValueTooLow {
            field,
            minimum,
            value,
            message: message.into(),
        }
    }

    pub fn document(message: impl Into<String>) -> Self {
        Self::Document {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for LimitsError {
    fn from(err: serde_json::Error) -> Self {
        LimitsError::document(err.to_string())
    }
}
