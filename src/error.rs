use thiserror::Error;

/// Broad classification of a [`CaseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    UnsupportedContent,
}

/// Errors raised by the validating converters (`to_snake_case`, `to_dot_case`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// The value is absent or is not text.
    #[error("{function}: {reason}")]
    InvalidInput {
        function: &'static str,
        reason: &'static str,
    },

    /// The value, or the converted output, contains characters the casing forbids.
    #[error("{function}: {reason}")]
    UnsupportedContent {
        function: &'static str,
        reason: &'static str,
    },
}

impl CaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CaseError::InvalidInput { .. } => ErrorKind::InvalidInput,
            CaseError::UnsupportedContent { .. } => ErrorKind::UnsupportedContent,
        }
    }

    /// Name of the converter that raised the error.
    pub fn function(&self) -> &'static str {
        match self {
            CaseError::InvalidInput { function, .. }
            | CaseError::UnsupportedContent { function, .. } => function,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_function() {
        let err = CaseError::UnsupportedContent {
            function: "to_snake_case",
            reason: "value must not contain numbers",
        };
        assert_eq!(
            err.to_string(),
            "to_snake_case: value must not contain numbers"
        );
        assert_eq!(err.kind(), ErrorKind::UnsupportedContent);
        assert_eq!(err.function(), "to_snake_case");
    }
}
