//! Combo Classification Errors

use thiserror::Error;

/// Errors that can occur while ordering or classifying a combo.
///
/// Every classifier returns a concrete tag or one of these; there is no
/// fallback "unknown" tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// No classification rule exists for this many legs.
    #[error("No idea how to classify a combo with {count} legs")]
    UnhandledLegCount {
        /// Number of legs presented.
        count: usize,
    },

    /// Legs cannot be split into near and far for this count.
    #[error("Cannot split {count} legs into near and far")]
    InvalidLegCount {
        /// Number of legs presented.
        count: usize,
    },

    /// More than two distinct expirations.
    #[error("Combo has {count} expirations")]
    TooManyExpirations {
        /// Number of distinct expirations.
        count: usize,
    },

    /// Leg attributes do not map to a known action.
    #[error("Unknown security type: {message}")]
    UnknownSecurityType {
        /// Error message.
        message: String,
    },

    /// Leg shape matches no action rule.
    #[error("Unknown leg combination: {message}")]
    UnknownLegCombinationType {
        /// Error message.
        message: String,
    },

    /// Leg shape matches no structure rule.
    #[error("Unknown combo structure: {message}")]
    UnknownComboStructure {
        /// Error message.
        message: String,
    },

    /// Quantities cannot be reduced to a unit count.
    #[error("Invalid quantity: {message}")]
    InvalidQuantity {
        /// Error message.
        message: String,
    },
}

impl ClassifierError {
    pub(crate) fn unknown_structure(message: impl Into<String>) -> Self {
        Self::UnknownComboStructure {
            message: message.into(),
        }
    }

    pub(crate) fn unknown_combination(message: impl Into<String>) -> Self {
        Self::UnknownLegCombinationType {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ClassifierError::UnhandledLegCount { count: 3 };
        assert_eq!(
            err.to_string(),
            "No idea how to classify a combo with 3 legs"
        );

        let err = ClassifierError::TooManyExpirations { count: 3 };
        assert_eq!(err.to_string(), "Combo has 3 expirations");

        let err = ClassifierError::unknown_structure("2 calls, 1 strike, 1 expiration");
        assert_eq!(
            err.to_string(),
            "Unknown combo structure: 2 calls, 1 strike, 1 expiration"
        );
    }
}
