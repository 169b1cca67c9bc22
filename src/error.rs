use thiserror::Error;

/// Failure to turn a whole string into a [`Coordinate`](crate::Coordinate)
///
/// The combinator engine itself only ever reports absence; this type exists
/// for the `FromStr` surface, where Rust expects an error value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("not a coordinate: {input:?}")]
    Invalid { input: String },
    #[error("unexpected trailing input {trailing:?} after coordinate")]
    TrailingInput { trailing: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown hemisphere policy {0:?}, expected \"strict\" or \"lenient\"")]
    UnknownHemispherePolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display() {
        let error = CoordinateError::Invalid {
            input: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "not a coordinate: \"abc\"");
    }

    #[test]
    fn test_trailing_display() {
        let error = CoordinateError::TrailingInput {
            trailing: " extra".to_string(),
        };
        assert!(error.to_string().contains("\" extra\""));
    }

    #[test]
    fn test_unknown_policy_display() {
        let error = ConfigError::UnknownHemispherePolicy("loose".to_string());
        assert!(error.to_string().contains("\"loose\""));
        assert!(error.to_string().contains("lenient"));
    }
}
