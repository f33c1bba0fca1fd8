//! Logger errors.

/// Error returned by a logger invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// The logger was called with no arguments.
    EmptyInvocation,
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::EmptyInvocation => write!(f, "logger called with no arguments"),
        }
    }
}

impl std::error::Error for LogError {}

/// Error returned when a string names no log level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    pub given: String,
}

impl std::fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown log level '{}' (expected DEBUG, INFO, WARN, ERROR or NONE)",
            self.given
        )
    }
}

impl std::error::Error for ParseLevelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_invocation_display() {
        assert_eq!(
            LogError::EmptyInvocation.to_string(),
            "logger called with no arguments"
        );
    }

    #[test]
    fn test_parse_level_error_display() {
        let err = ParseLevelError {
            given: "verbose".to_string(),
        };
        assert!(err.to_string().contains("'verbose'"));
    }
}
