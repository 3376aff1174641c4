//! Security Type and Option Right Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of instrument a leg trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityType {
    /// Shares of the underlying.
    Equity,
    /// Listed option on an equity underlying.
    EquityOption,
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equity => write!(f, "equity"),
            Self::EquityOption => write!(f, "equity_option"),
        }
    }
}

/// Option right carried by a leg. Equity legs carry `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallPut {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
    /// No option right (equity).
    None,
}

impl CallPut {
    /// OSI right character, if this is an option right.
    #[must_use]
    pub const fn osi_char(&self) -> Option<char> {
        match self {
            Self::Call => Some('C'),
            Self::Put => Some('P'),
            Self::None => None,
        }
    }

    /// Check if this carries an option right.
    #[must_use]
    pub const fn is_option_right(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for CallPut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
            Self::None => write!(f, "none"),
        }
    }
}
