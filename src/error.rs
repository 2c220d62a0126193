use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, CombinatorError>;

#[derive(Error, Debug)]
pub enum CombinatorError {
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Sequence lengths differ (left: {left}, right: {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CombinatorError {
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = CombinatorError::invalid_argument("step", "must not be zero");
        assert_eq!(err.to_string(), "Invalid argument 'step': must not be zero");
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = CombinatorError::length_mismatch(3, 2);
        assert_eq!(err.to_string(), "Sequence lengths differ (left: 3, right: 2)");
        assert!(matches!(err, CombinatorError::LengthMismatch { left: 3, right: 2 }));
    }

    #[test]
    fn test_config_error_converts() {
        let err: CombinatorError = ConfigError::UnsupportedFormat("yaml".into()).into();
        assert!(matches!(err, CombinatorError::Config(_)));
        assert!(err.to_string().contains("yaml"));
    }
}
