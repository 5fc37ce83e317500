//! Configuration errors
//!
//! Only configuration is fallible. Interactive input that falls outside the
//! track is rejected silently by the travel rules and never surfaces here.

use thiserror::Error;

/// Reasons a slider configuration is refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("maximum ({maximum}) must be greater than minimum ({minimum})")]
    EmptyRange { minimum: f32, maximum: f32 },
    #[error("step count must be at least 1")]
    NoSteps,
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
}

/// Check that `value` is finite
pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

/// Check that `value` is finite and not negative
pub(crate) fn ensure_non_negative(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::EmptyRange {
            minimum: 5.0,
            maximum: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "maximum (1) must be greater than minimum (5)"
        );
        assert_eq!(ConfigError::NoSteps.to_string(), "step count must be at least 1");
    }

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("gap", 0.0), Ok(0.0));
        assert_eq!(
            ensure_non_negative("gap", -1.0),
            Err(ConfigError::Negative {
                field: "gap",
                value: -1.0
            })
        );
        assert!(matches!(
            ensure_non_negative("gap", f32::NAN),
            Err(ConfigError::NonFinite { field: "gap", .. })
        ));
    }
}
