//! Product Value Object
//!
//! The instrument a leg trades: an equity, or an option on an equity.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{CallPut, SecurityType};
use crate::domain::leg::errors::LegError;

/// Expiration carried by equity products, which never expire.
pub const EQUITY_EXPIRATION: NaiveDate = NaiveDate::MIN;

/// Instrument specification for a leg.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Underlying symbol, normalized to uppercase.
    symbol: String,
    /// Equity or equity option.
    security_type: SecurityType,
    /// Call, put, or none for equity.
    call_put: CallPut,
    /// Strike price (zero for equity).
    strike: Decimal,
    /// Expiration date (`EQUITY_EXPIRATION` for equity).
    expiration: NaiveDate,
}

impl Product {
    /// Create an equity product.
    pub fn equity(symbol: impl Into<String>) -> Result<Self, LegError> {
        Ok(Self {
            symbol: normalize_symbol(symbol)?,
            security_type: SecurityType::Equity,
            call_put: CallPut::None,
            strike: Decimal::ZERO,
            expiration: EQUITY_EXPIRATION,
        })
    }

    /// Create an equity option product.
    pub fn option(
        symbol: impl Into<String>,
        call_put: CallPut,
        strike: Decimal,
        expiration: NaiveDate,
    ) -> Result<Self, LegError> {
        let symbol = normalize_symbol(symbol)?;
        if !call_put.is_option_right() {
            return Err(LegError::MissingOptionRight { symbol });
        }
        if strike <= Decimal::ZERO {
            return Err(LegError::InvalidStrike { symbol, strike });
        }

        Ok(Self {
            symbol,
            security_type: SecurityType::EquityOption,
            call_put,
            strike,
            expiration,
        })
    }

    /// Create a call option product.
    pub fn call(
        symbol: impl Into<String>,
        strike: Decimal,
        expiration: NaiveDate,
    ) -> Result<Self, LegError> {
        Self::option(symbol, CallPut::Call, strike, expiration)
    }

    /// Create a put option product.
    pub fn put(
        symbol: impl Into<String>,
        strike: Decimal,
        expiration: NaiveDate,
    ) -> Result<Self, LegError> {
        Self::option(symbol, CallPut::Put, strike, expiration)
    }

    /// Get the underlying symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the security type.
    #[must_use]
    pub const fn security_type(&self) -> SecurityType {
        self.security_type
    }

    /// Get the option right.
    #[must_use]
    pub const fn call_put(&self) -> CallPut {
        self.call_put
    }

    /// Get the strike price.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.strike
    }

    /// Get the expiration date.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Check if this is an equity product.
    #[must_use]
    pub const fn is_equity(&self) -> bool {
        matches!(self.security_type, SecurityType::Equity)
    }

    /// Check if this is an equity option product.
    #[must_use]
    pub const fn is_equity_option(&self) -> bool {
        matches!(self.security_type, SecurityType::EquityOption)
    }

    /// OSI symbol for this product.
    #[must_use]
    pub fn osi(&self) -> String {
        format_osi(
            &self.symbol,
            self.security_type,
            self.call_put,
            self.strike,
            self.expiration,
        )
    }
}

/// Format an OSI option symbol.
///
/// Layout: root padded to 6 with `-`, `YYMMDD`, `C`/`P`, 5-digit whole
/// strike, 3-digit thousandths. e.g. `SPY---211119P00450500`.
///
/// Equity (or a product without an option right) formats as the bare symbol.
#[must_use]
pub fn format_osi(
    symbol: &str,
    security_type: SecurityType,
    call_put: CallPut,
    strike: Decimal,
    expiration: NaiveDate,
) -> String {
    let right = match (security_type, call_put.osi_char()) {
        (SecurityType::EquityOption, Some(right)) => right,
        _ => return symbol.to_string(),
    };

    let whole = strike.trunc();
    let thousandths = ((strike - whole) * dec!(1000)).trunc();

    format!(
        "{symbol:-<6}{}{right}{:05}{:03}",
        expiration.format("%y%m%d"),
        whole.to_i64().unwrap_or_default(),
        thousandths.to_i64().unwrap_or_default(),
    )
}

fn normalize_symbol(symbol: impl Into<String>) -> Result<String, LegError> {
    let symbol = symbol.into().trim().to_uppercase();
    if symbol.is_empty() {
        return Err(LegError::EmptySymbol);
    }
    Ok(symbol)
}
