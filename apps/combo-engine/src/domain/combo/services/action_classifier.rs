//! Action Classifier
//!
//! Infers the trading action that produced a combo from its legs' final
//! side and direction. Dispatches on leg count:
//!
//! - 1 leg: buy/sell for equity, the four open/close actions for options
//! - 2 legs: roll (one expiration) or roll in/out (two), else the near leg's
//!   open/close action
//! - 4 legs: the same rules applied to the near and far halves

use crate::domain::combo::errors::ClassifierError;
use crate::domain::combo::services::metrics;
use crate::domain::combo::services::ordering::{self, Anchor};
use crate::domain::combo::value_objects::Action;
use crate::domain::leg::{CallPut, LegView, SecurityType};

/// Classify the action behind `legs`.
///
/// Legs may be passed in any order.
pub fn classify_action<L: LegView>(legs: &[L]) -> Result<Action, ClassifierError> {
    match legs {
        [leg] => single_leg(leg),
        [_, _] | [_, _, _, _] => multi_leg(legs),
        _ => Err(ClassifierError::UnhandledLegCount { count: legs.len() }),
    }
}

fn single_leg<L: LegView>(leg: &L) -> Result<Action, ClassifierError> {
    match (leg.security_type(), leg.call_put()) {
        (SecurityType::Equity, CallPut::None) => {
            if leg.is_long() {
                Ok(Action::Buy)
            } else {
                Ok(Action::Sell)
            }
        }
        (SecurityType::EquityOption, CallPut::Call | CallPut::Put) => {
            Ok(Action::from_side_direction(leg.side(), leg.direction()))
        }
        (security_type, call_put) => Err(ClassifierError::UnknownSecurityType {
            message: format!(
                "{} {security_type} leg with right {call_put:?}",
                leg.symbol()
            ),
        }),
    }
}

fn multi_leg<L: LegView>(legs: &[L]) -> Result<Action, ClassifierError> {
    let expirations = metrics::expiration_count(legs)?;
    let (near, far) = ordering::split_near_far(legs)?;
    let Some(far) = far else {
        return Err(ClassifierError::InvalidLegCount { count: legs.len() });
    };

    if ordering::is_roll(&near, &far) {
        let two_leg_same_expiry = legs.len() == 2 && expirations == 1;
        return Ok(if two_leg_same_expiry {
            Action::Roll
        } else if near.is_opening() {
            Action::RollIn
        } else {
            Action::RollOut
        });
    }

    near_action(&near).ok_or_else(|| {
        ClassifierError::unknown_combination(format!(
            "{} legs over {expirations} expirations with mixed near-side directions",
            legs.len()
        ))
    })
}

fn near_action<L: LegView>(near: &Anchor<'_, L>) -> Option<Action> {
    let direction = near.direction()?;
    Some(Action::from_side_direction(near.first().side(), direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::leg::{Direction, Leg, PositionSide, Product};
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use test_case::test_case;

    fn executed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, 13, 45, 0).unwrap()
    }

    fn front() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 21).unwrap()
    }

    fn back() -> NaiveDate {
        front() + Duration::days(30)
    }

    fn leg(
        right: CallPut,
        strike: i64,
        expiry: NaiveDate,
        side: PositionSide,
        direction: Direction,
    ) -> Leg {
        Leg::new(
            Product::option("SPY", right, Decimal::new(strike, 0), expiry).unwrap(),
            side,
            direction,
            1,
            executed_at(),
        )
        .unwrap()
    }

    fn equity(side: PositionSide) -> Leg {
        Leg::new(
            Product::equity("SPY").unwrap(),
            side,
            Direction::Opening,
            100,
            executed_at(),
        )
        .unwrap()
    }

    #[test_case(PositionSide::Long => Action::Buy ; "long equity")]
    #[test_case(PositionSide::Short => Action::Sell ; "short equity")]
    fn single_equity(side: PositionSide) -> Action {
        classify_action(&[equity(side)]).unwrap()
    }

    #[test_case(PositionSide::Long, Direction::Opening => Action::BuyToOpen ; "buy to open")]
    #[test_case(PositionSide::Long, Direction::Closing => Action::BuyToClose ; "buy to close")]
    #[test_case(PositionSide::Short, Direction::Opening => Action::SellToOpen ; "sell to open")]
    #[test_case(PositionSide::Short, Direction::Closing => Action::SellToClose ; "sell to close")]
    fn single_option(side: PositionSide, direction: Direction) -> Action {
        classify_action(&[leg(CallPut::Call, 100, front(), side, direction)]).unwrap()
    }

    #[test]
    fn vertical_opening() {
        let legs = vec![
            leg(CallPut::Call, 150, front(), PositionSide::Short, Direction::Opening),
            leg(CallPut::Call, 140, front(), PositionSide::Long, Direction::Opening),
        ];

        assert_eq!(classify_action(&legs).unwrap(), Action::BuyToOpen);
    }

    #[test]
    fn vertical_roll() {
        let legs = vec![
            leg(CallPut::Put, 150, front(), PositionSide::Short, Direction::Closing),
            leg(CallPut::Put, 140, front(), PositionSide::Short, Direction::Opening),
        ];

        assert_eq!(classify_action(&legs).unwrap(), Action::Roll);
    }

    #[test]
    fn calendar_roll_out() {
        let legs = vec![
            leg(CallPut::Put, 150, back(), PositionSide::Short, Direction::Opening),
            leg(CallPut::Put, 150, front(), PositionSide::Short, Direction::Closing),
        ];

        assert_eq!(classify_action(&legs).unwrap(), Action::RollOut);
    }

    #[test]
    fn calendar_roll_in() {
        let legs = vec![
            leg(CallPut::Put, 150, front(), PositionSide::Short, Direction::Opening),
            leg(CallPut::Put, 150, back(), PositionSide::Long, Direction::Closing),
        ];

        assert_eq!(classify_action(&legs).unwrap(), Action::RollIn);
    }

    #[test]
    fn calendar_opening_uses_near_side() {
        let legs = vec![
            leg(CallPut::Call, 150, back(), PositionSide::Long, Direction::Opening),
            leg(CallPut::Call, 150, front(), PositionSide::Short, Direction::Opening),
        ];

        assert_eq!(classify_action(&legs).unwrap(), Action::SellToOpen);
    }

    #[test]
    fn four_leg_roll_out() {
        let legs = vec![
            leg(CallPut::Put, 460, front(), PositionSide::Short, Direction::Closing),
            leg(CallPut::Put, 450, front(), PositionSide::Long, Direction::Closing),
            leg(CallPut::Put, 460, back(), PositionSide::Short, Direction::Opening),
            leg(CallPut::Put, 450, back(), PositionSide::Long, Direction::Opening),
        ];

        assert_eq!(classify_action(&legs).unwrap(), Action::RollOut);
    }

    #[test]
    fn four_leg_same_expiry_roll_is_roll_in() {
        let legs = vec![
            leg(CallPut::Call, 100, front(), PositionSide::Short, Direction::Opening),
            leg(CallPut::Call, 105, front(), PositionSide::Long, Direction::Opening),
            leg(CallPut::Call, 110, front(), PositionSide::Short, Direction::Closing),
            leg(CallPut::Call, 115, front(), PositionSide::Long, Direction::Closing),
        ];

        assert_eq!(classify_action(&legs).unwrap(), Action::RollIn);
    }

    #[test]
    fn four_leg_condor_closing() {
        let legs = vec![
            leg(CallPut::Call, 100, front(), PositionSide::Long, Direction::Closing),
            leg(CallPut::Call, 105, front(), PositionSide::Short, Direction::Closing),
            leg(CallPut::Call, 110, front(), PositionSide::Short, Direction::Closing),
            leg(CallPut::Call, 115, front(), PositionSide::Long, Direction::Closing),
        ];

        assert_eq!(classify_action(&legs).unwrap(), Action::BuyToClose);
    }

    #[test]
    fn four_leg_mixed_near_half_is_unknown() {
        let legs = vec![
            leg(CallPut::Call, 100, front(), PositionSide::Long, Direction::Opening),
            leg(CallPut::Call, 105, front(), PositionSide::Short, Direction::Closing),
            leg(CallPut::Call, 110, front(), PositionSide::Short, Direction::Opening),
            leg(CallPut::Call, 115, front(), PositionSide::Long, Direction::Opening),
        ];

        assert!(matches!(
            classify_action(&legs),
            Err(ClassifierError::UnknownLegCombinationType { .. })
        ));
    }

    #[test]
    fn three_legs_unhandled() {
        let legs = vec![
            leg(CallPut::Call, 100, front(), PositionSide::Long, Direction::Opening),
            leg(CallPut::Call, 105, front(), PositionSide::Short, Direction::Opening),
            leg(CallPut::Call, 110, front(), PositionSide::Short, Direction::Opening),
        ];

        assert_eq!(
            classify_action(&legs).unwrap_err(),
            ClassifierError::UnhandledLegCount { count: 3 }
        );
    }

    #[test]
    fn empty_unhandled() {
        assert_eq!(
            classify_action::<Leg>(&[]).unwrap_err(),
            ClassifierError::UnhandledLegCount { count: 0 }
        );
    }

    #[test]
    fn three_expirations_rejected() {
        let third = back() + Duration::days(30);
        let legs = vec![
            leg(CallPut::Put, 100, front(), PositionSide::Long, Direction::Opening),
            leg(CallPut::Put, 100, back(), PositionSide::Short, Direction::Opening),
            leg(CallPut::Put, 100, third, PositionSide::Short, Direction::Opening),
            leg(CallPut::Put, 95, front(), PositionSide::Long, Direction::Opening),
        ];

        assert_eq!(
            classify_action(&legs).unwrap_err(),
            ClassifierError::TooManyExpirations { count: 3 }
        );
    }

    #[test]
    fn order_independent() {
        let a = leg(CallPut::Call, 150, back(), PositionSide::Long, Direction::Opening);
        let b = leg(CallPut::Call, 150, front(), PositionSide::Short, Direction::Opening);

        assert_eq!(
            classify_action(&[a.clone(), b.clone()]).unwrap(),
            classify_action(&[b, a]).unwrap()
        );
    }
}
