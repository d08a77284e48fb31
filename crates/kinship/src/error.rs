//! Error types for Kinship operations.
//!
//! Most of the engine is total: dangling identifiers and degenerate
//! geometry degrade into well-defined output instead of failing. The
//! variants here cover the remaining cases where no sensible layout exists.

use thiserror::Error;

/// The main error type for Kinship operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinshipError {
    /// A spacing parameter was zero, negative, or not a number.
    #[error("Invalid {name}: expected a positive finite value, got {value}")]
    InvalidSpacing { name: &'static str, value: f32 },

    /// The placement walk reached a node that is one of its own ancestors.
    ///
    /// Parent links form a forest whenever identifiers are unique, so this
    /// only arises from repeated identifiers.
    #[error("Cyclic relationship: node `{id}` is its own ancestor")]
    CyclicRelationship { id: String },
}

impl KinshipError {
    /// Checks that a spacing parameter is positive and finite.
    pub(crate) fn check_spacing(name: &'static str, value: f32) -> Result<f32, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidSpacing { name, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_spacing_accepts_positive() {
        assert_eq!(KinshipError::check_spacing("level_height", 150.0), Ok(150.0));
    }

    #[test]
    fn test_check_spacing_rejects_non_positive_and_nan() {
        for value in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = KinshipError::check_spacing("sibling_distance", value)
                .expect_err("value should be rejected");
            assert!(matches!(
                err,
                KinshipError::InvalidSpacing {
                    name: "sibling_distance",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_error_messages() {
        let err = KinshipError::CyclicRelationship { id: "a".to_string() };
        assert_eq!(err.to_string(), "Cyclic relationship: node `a` is its own ancestor");

        let err = KinshipError::InvalidSpacing {
            name: "level_height",
            value: -2.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid level_height: expected a positive finite value, got -2"
        );
    }
}
