use thiserror::Error;

/// Per-line parse failure. Recoverable: the line is reported and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed line: {reason}")]
    MalformedLine { reason: &'static str },

    #[error("invalid {field}: '{value}' is not an integer")]
    InvalidNumericField { field: &'static str, value: String },
}

impl ParseError {
    pub(crate) fn malformed(reason: &'static str) -> Self {
        Self::MalformedLine { reason }
    }
}
