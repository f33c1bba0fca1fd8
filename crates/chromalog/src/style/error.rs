//! Non-fatal diagnostics.

/// A problem worth reporting that must not abort the caller's operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A style name has no registry entry and contributes nothing.
    UnknownStyle { name: String },
    /// A level name could not be parsed; the threshold fell back to `INFO`.
    InvalidLogLevel { given: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnknownStyle { name } => {
                write!(f, "unknown style \"{}\"", name)
            }
            Diagnostic::InvalidLogLevel { given } => {
                write!(f, "unknown log level \"{}\", using INFO", given)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_display() {
        let diag = Diagnostic::UnknownStyle {
            name: "notAColor".to_string(),
        };
        assert_eq!(diag.to_string(), "unknown style \"notAColor\"");
    }

    #[test]
    fn test_invalid_level_display() {
        let diag = Diagnostic::InvalidLogLevel {
            given: "loud".to_string(),
        };
        let msg = diag.to_string();
        assert!(msg.contains("loud"));
        assert!(msg.contains("INFO"));
    }
}
