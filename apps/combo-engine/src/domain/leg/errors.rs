//! Leg Errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while constructing a leg or its product.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LegError {
    /// Symbol was empty or whitespace.
    #[error("Leg symbol must not be empty")]
    EmptySymbol,

    /// An option product was built without a call/put right.
    #[error("Option leg {symbol} has no call/put right")]
    MissingOptionRight {
        /// Underlying symbol.
        symbol: String,
    },

    /// Option strike must be strictly positive.
    #[error("Option leg {symbol} has invalid strike {strike}")]
    InvalidStrike {
        /// Underlying symbol.
        symbol: String,
        /// Rejected strike.
        strike: Decimal,
    },

    /// Quantity must be at least one.
    #[error("Leg {symbol} has zero quantity")]
    ZeroQuantity {
        /// Underlying symbol.
        symbol: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            LegError::EmptySymbol.to_string(),
            "Leg symbol must not be empty"
        );

        let err = LegError::InvalidStrike {
            symbol: "SPY".to_string(),
            strike: Decimal::new(-5, 0),
        };
        assert_eq!(err.to_string(), "Option leg SPY has invalid strike -5");

        let err = LegError::ZeroQuantity {
            symbol: "AAPL".to_string(),
        };
        assert_eq!(err.to_string(), "Leg AAPL has zero quantity");
    }
}
