//! Leg Value Object and the `LegView` capability trait.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::format_osi;
use super::{CallPut, Direction, PositionSide, Product, SecurityType};
use crate::domain::leg::errors::LegError;

/// Read-only view of a leg, as consumed by the classifiers and the grouping
/// engine.
///
/// Vendor leg types implement the primitive accessors; the predicates are
/// derived from them.
pub trait LegView {
    /// Underlying symbol.
    fn symbol(&self) -> &str;
    /// Equity or equity option.
    fn security_type(&self) -> SecurityType;
    /// Call, put, or none.
    fn call_put(&self) -> CallPut;
    /// Strike price (zero for equity).
    fn strike(&self) -> Decimal;
    /// Expiration date (sentinel for equity).
    fn expiration_date(&self) -> NaiveDate;
    /// Long or short.
    fn side(&self) -> PositionSide;
    /// Opening or closing.
    fn direction(&self) -> Direction;
    /// Traded quantity (always positive; the sign lives in `side`).
    fn quantity(&self) -> u32;
    /// When the leg executed.
    fn execution_time(&self) -> DateTime<Utc>;

    /// Check if this is a call option leg.
    fn is_call(&self) -> bool {
        self.is_equity_option() && self.call_put() == CallPut::Call
    }

    /// Check if this is a put option leg.
    fn is_put(&self) -> bool {
        self.is_equity_option() && self.call_put() == CallPut::Put
    }

    /// Check if this is an equity leg.
    fn is_equity(&self) -> bool {
        self.security_type() == SecurityType::Equity
    }

    /// Check if this is an equity option leg.
    fn is_equity_option(&self) -> bool {
        self.security_type() == SecurityType::EquityOption
    }

    /// Check if this leg is long.
    fn is_long(&self) -> bool {
        self.side().is_long()
    }

    /// Check if this leg is short.
    fn is_short(&self) -> bool {
        self.side().is_short()
    }

    /// Check if this leg opens a position.
    fn is_opening(&self) -> bool {
        self.direction().is_opening()
    }

    /// Check if this leg closes a position.
    fn is_closing(&self) -> bool {
        self.direction().is_closing()
    }

    /// OSI symbol for the leg's instrument.
    fn osi(&self) -> String {
        format_osi(
            self.symbol(),
            self.security_type(),
            self.call_put(),
            self.strike(),
            self.expiration_date(),
        )
    }
}

impl<T: LegView + ?Sized> LegView for &T {
    fn symbol(&self) -> &str {
        (**self).symbol()
    }

    fn security_type(&self) -> SecurityType {
        (**self).security_type()
    }

    fn call_put(&self) -> CallPut {
        (**self).call_put()
    }

    fn strike(&self) -> Decimal {
        (**self).strike()
    }

    fn expiration_date(&self) -> NaiveDate {
        (**self).expiration_date()
    }

    fn side(&self) -> PositionSide {
        (**self).side()
    }

    fn direction(&self) -> Direction {
        (**self).direction()
    }

    fn quantity(&self) -> u32 {
        (**self).quantity()
    }

    fn execution_time(&self) -> DateTime<Utc> {
        (**self).execution_time()
    }
}

/// A single traded line item: a product plus side, direction and size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Leg {
    /// The instrument.
    product: Product,
    /// Position side.
    side: PositionSide,
    /// Opening or closing.
    direction: Direction,
    /// Number of shares or contracts.
    quantity: u32,
    /// Execution timestamp.
    execution_time: DateTime<Utc>,
}

impl Leg {
    /// Create a new leg.
    pub fn new(
        product: Product,
        side: PositionSide,
        direction: Direction,
        quantity: u32,
        execution_time: DateTime<Utc>,
    ) -> Result<Self, LegError> {
        if quantity == 0 {
            return Err(LegError::ZeroQuantity {
                symbol: product.symbol().to_string(),
            });
        }

        Ok(Self {
            product,
            side,
            direction,
            quantity,
            execution_time,
        })
    }

    /// Create a long leg.
    pub fn long(
        product: Product,
        direction: Direction,
        quantity: u32,
        execution_time: DateTime<Utc>,
    ) -> Result<Self, LegError> {
        Self::new(product, PositionSide::Long, direction, quantity, execution_time)
    }

    /// Create a short leg.
    pub fn short(
        product: Product,
        direction: Direction,
        quantity: u32,
        execution_time: DateTime<Utc>,
    ) -> Result<Self, LegError> {
        Self::new(product, PositionSide::Short, direction, quantity, execution_time)
    }

    /// Get the product.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Get signed quantity (positive for long, negative for short).
    #[must_use]
    pub fn signed_quantity(&self) -> i64 {
        i64::from(self.quantity) * i64::from(self.side.sign())
    }
}

impl LegView for Leg {
    fn symbol(&self) -> &str {
        self.product.symbol()
    }

    fn security_type(&self) -> SecurityType {
        self.product.security_type()
    }

    fn call_put(&self) -> CallPut {
        self.product.call_put()
    }

    fn strike(&self) -> Decimal {
        self.product.strike()
    }

    fn expiration_date(&self) -> NaiveDate {
        self.product.expiration()
    }

    fn side(&self) -> PositionSide {
        self.side
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn execution_time(&self) -> DateTime<Utc> {
        self.execution_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn executed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 11, 1, 14, 30, 0).unwrap()
    }

    fn test_put() -> Product {
        Product::put("SPY", dec!(450), NaiveDate::from_ymd_opt(2021, 11, 19).unwrap()).unwrap()
    }

    #[test]
    fn leg_new() {
        let leg = Leg::new(
            test_put(),
            PositionSide::Short,
            Direction::Opening,
            3,
            executed_at(),
        )
        .unwrap();

        assert_eq!(leg.symbol(), "SPY");
        assert_eq!(leg.quantity(), 3);
        assert_eq!(leg.strike(), dec!(450));
        assert_eq!(leg.execution_time(), executed_at());
    }

    #[test]
    fn leg_rejects_zero_quantity() {
        let err = Leg::long(test_put(), Direction::Opening, 0, executed_at()).unwrap_err();
        assert_eq!(
            err,
            LegError::ZeroQuantity {
                symbol: "SPY".to_string()
            }
        );
    }

    #[test]
    fn leg_predicates() {
        let leg = Leg::short(test_put(), Direction::Closing, 1, executed_at()).unwrap();

        assert!(leg.is_put());
        assert!(!leg.is_call());
        assert!(leg.is_equity_option());
        assert!(!leg.is_equity());
        assert!(leg.is_short());
        assert!(!leg.is_long());
        assert!(leg.is_closing());
        assert!(!leg.is_opening());
    }

    #[test]
    fn equity_leg_is_neither_call_nor_put() {
        let leg = Leg::long(
            Product::equity("AAPL").unwrap(),
            Direction::Opening,
            100,
            executed_at(),
        )
        .unwrap();

        assert!(leg.is_equity());
        assert!(!leg.is_call());
        assert!(!leg.is_put());
        assert_eq!(leg.osi(), "AAPL");
    }

    #[test]
    fn leg_signed_quantity() {
        let long_leg = Leg::long(test_put(), Direction::Opening, 10, executed_at()).unwrap();
        assert_eq!(long_leg.signed_quantity(), 10);

        let short_leg = Leg::short(test_put(), Direction::Opening, 10, executed_at()).unwrap();
        assert_eq!(short_leg.signed_quantity(), -10);
    }

    #[test]
    fn leg_view_through_reference() {
        let leg = Leg::long(test_put(), Direction::Opening, 2, executed_at()).unwrap();
        let by_ref: &Leg = &leg;

        assert_eq!(LegView::quantity(&by_ref), 2);
        assert_eq!(by_ref.osi(), "SPY---211119P00450000");
    }

    #[test]
    fn leg_serde() {
        let leg = Leg::long(test_put(), Direction::Opening, 10, executed_at()).unwrap();
        let json = serde_json::to_string(&leg).unwrap();
        let parsed: Leg = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, leg);
    }
}
