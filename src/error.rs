use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ParseError: {0}")]
    Parse(#[from] ParseError),
    #[error("SystemError: {0}")]
    System(#[from] SystemError),
}

/// Errors from the lenient numeric parsing layer.
///
/// Only the strict entry points surface these; the `_or` variants swallow
/// them and hand back the caller's default instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("cannot parse '{input}' as a number")]
    InvalidNumber { input: String },
    #[error("empty input")]
    Empty,
}

impl ParseError {
    pub fn invalid(input: impl Into<String>) -> Self {
        ParseError::InvalidNumber {
            input: input.into(),
        }
    }
}

/// Errors from platform queries in the system module.
///
/// `SystemInfo::detect` never propagates these; they are logged and replaced
/// with fallback values.
#[derive(Error, Debug)]
pub enum SystemError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("no '{field}' entry in {path}")]
    MissingField { field: String, path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::invalid("12x");
        assert_eq!(err.to_string(), "cannot parse '12x' as a number");
        assert_eq!(ParseError::Empty.to_string(), "empty input");
    }

    #[test]
    fn test_app_error_wraps_domain_errors() {
        let err: AppError = ParseError::Empty.into();
        assert_eq!(err.to_string(), "ParseError: empty input");

        let err: AppError = SystemError::MissingField {
            field: "MemTotal".into(),
            path: "/proc/meminfo".into(),
        }
        .into();
        assert!(err.to_string().starts_with("SystemError:"));
    }
}
