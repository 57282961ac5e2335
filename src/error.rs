//! Error types for filter design and processing.

use thiserror::Error;

/// Errors raised while designing coefficients or driving a filter engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// A design or construction parameter is out of range.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A filter engine needs at least one sample of history.
    #[error("invalid filter order {0}: must be at least 1")]
    InvalidOrder(usize),

    /// Coefficient slices disagree with each other or with the filter order.
    #[error(
        "coefficient shape mismatch: expected {expected} taps, got {feedback} feedback and {feedforward} feedforward"
    )]
    CoefficientShapeMismatch {
        expected: usize,
        feedback: usize,
        feedforward: usize,
    },

    /// The leading feedback coefficient is zero (or not finite), so the
    /// recurrence cannot be normalized.
    #[error("degenerate filter: leading feedback coefficient is {0}")]
    DegenerateFilter(f64),

    /// The engine has no order or no coefficients yet.
    #[error("filter is not configured")]
    NotConfigured,
}

impl FilterError {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = FilterError::invalid("frequency", -1.0);
        assert_eq!(err.to_string(), "invalid parameter `frequency`: -1");

        let err = FilterError::CoefficientShapeMismatch {
            expected: 3,
            feedback: 2,
            feedforward: 3,
        };
        assert!(err.to_string().contains("expected 3 taps"));

        assert_eq!(
            FilterError::InvalidOrder(0).to_string(),
            "invalid filter order 0: must be at least 1"
        );

        assert_eq!(
            FilterError::NotConfigured.to_string(),
            "filter is not configured"
        );
    }
}
