//! Combo Structure Classifier
//!
//! Infers the strategy shape of a combo. Legs are partitioned by
//! composition (equity present, all calls, all puts, calls and puts), then
//! resolved by leg, expiration and strike counts plus the near side's
//! long/short and the open/close directions.
//!
//! | Legs | Composition | Exp | Strikes | Structure |
//! |------|-------------|-----|---------|-----------|
//! | 2 | P or C | 1 | 2 | vertical, vertical_roll |
//! | 2 | P or C | 2 | 1 | calendar, reverse_calendar, calendar_roll |
//! | 2 | P or C | 2 | 2 | diagonal, reverse_diagonal, diagonal_roll |
//! | 2 | P & C | 1 | 1 | straddle, reverse_straddle |
//! | 2 | P & C | 1 | 2 | strangle, reverse_strangle |
//! | 2 | E & C/P | - | - | covered_call, covered_put, married_put |
//! | 4 | P or C | 1 | 4 | spread_condor, spread_reverse_condor |
//! | 4 | P or C | 1 | 3 | spread_butterfly, spread_reverse_butterfly |
//! | 4 | P or C | 2 | 2 | spread_condor_calendar, spread_reverse_condor_calendar |
//! | 4 | P & C | 2 | 2 | iron_calendar, reverse_iron_calendar |
//!
//! Four-leg rolls are `roll_in` / `roll_out` and need the 2 expiration,
//! 2 strike geometry. Iron calendars also need one put and one call per
//! half, each right at the same strike in both halves.

use crate::domain::combo::errors::ClassifierError;
use crate::domain::combo::services::metrics::{self, Composition};
use crate::domain::combo::services::ordering::{self, Anchor};
use crate::domain::combo::value_objects::{ComboStructure, SpreadShape};
use crate::domain::leg::{CallPut, LegView, PositionSide};

/// Classify the strategy structure of `legs`.
///
/// Legs may be passed in any order.
pub fn classify_structure<L: LegView>(legs: &[L]) -> Result<ComboStructure, ClassifierError> {
    match legs {
        [leg] => Ok(if leg.is_equity() {
            ComboStructure::Equity
        } else {
            ComboStructure::EquityOption
        }),
        [_, _] => two_legs(legs),
        [_, _, _, _] => four_legs(legs),
        _ => Err(ClassifierError::UnhandledLegCount { count: legs.len() }),
    }
}

/// Leg-set facts every multi-leg rule is keyed on.
struct Shape<'a, L> {
    near: Anchor<'a, L>,
    far: Anchor<'a, L>,
    composition: Composition,
    expirations: usize,
    strikes: usize,
    uniform: bool,
}

impl<'a, L: LegView> Shape<'a, L> {
    fn measure(legs: &'a [L]) -> Result<Self, ClassifierError> {
        let expirations = metrics::expiration_count(legs)?;
        let (near, far) = ordering::split_near_far(legs)?;
        let Some(far) = far else {
            return Err(ClassifierError::InvalidLegCount { count: legs.len() });
        };

        Ok(Self {
            near,
            far,
            composition: Composition::of(legs),
            expirations,
            strikes: metrics::strike_count(legs),
            uniform: metrics::uniform_direction(legs),
        })
    }

    fn is_roll(&self) -> bool {
        ordering::is_roll(&self.near, &self.far)
    }

    /// Plain tag for a short near side, the reverse tag for a long one.
    fn by_near_side<T>(&self, short: T, long: T) -> T {
        if self.near.is_short() { short } else { long }
    }

    fn roll_in_or_out(&self) -> ComboStructure {
        if self.near.is_opening() {
            ComboStructure::RollIn
        } else {
            ComboStructure::RollOut
        }
    }

    fn unknown(&self, legs: usize) -> ClassifierError {
        ClassifierError::unknown_structure(format!(
            "{legs} {}, {} expirations, {} strikes",
            self.composition.describe(),
            self.expirations,
            self.strikes
        ))
    }
}

// ============================================================================
// Two legs
// ============================================================================

fn two_legs<L: LegView>(legs: &[L]) -> Result<ComboStructure, ClassifierError> {
    let shape = Shape::measure(legs)?;

    let structure = match shape.composition {
        Composition::ContainsEquity => covered(legs, &shape),
        Composition::AllCalls | Composition::AllPuts => {
            pair_shape(&shape).map(ComboStructure::Pair)
        }
        Composition::PutCallMix => straddle_or_strangle(&shape),
        Composition::Unrecognized => None,
    };

    structure.ok_or_else(|| shape.unknown(legs.len()))
}

fn pair_shape<L: LegView>(shape: &Shape<'_, L>) -> Option<SpreadShape> {
    let uniform = shape.uniform;
    let roll = shape.is_roll();

    match (shape.expirations, shape.strikes) {
        (1, 2) if uniform => Some(SpreadShape::Vertical),
        (1, 2) if roll => Some(SpreadShape::VerticalRoll),
        (1, 3) if uniform => Some(SpreadShape::Butterfly),
        (1, 4) if uniform => Some(SpreadShape::Condor),
        (2, 1) if uniform => Some(shape.by_near_side(
            SpreadShape::Calendar,
            SpreadShape::ReverseCalendar,
        )),
        (2, 1) if roll => Some(SpreadShape::CalendarRoll),
        (2, 2) if uniform => Some(shape.by_near_side(
            SpreadShape::Diagonal,
            SpreadShape::ReverseDiagonal,
        )),
        (2, 2) if roll => Some(SpreadShape::DiagonalRoll),
        (2, 3) if uniform => Some(SpreadShape::Butterfly),
        (2, 4) if uniform => Some(SpreadShape::Condor),
        (2, 4) if roll => Some(SpreadShape::CondorRoll),
        _ => None,
    }
}

fn straddle_or_strangle<L: LegView>(shape: &Shape<'_, L>) -> Option<ComboStructure> {
    if shape.expirations != 1 || !shape.uniform {
        return None;
    }

    let near = shape.near.first();
    let far = shape.far.first();
    let same_strike = shape.strikes == 1;

    match (near.side(), far.side()) {
        (PositionSide::Long, PositionSide::Long) if same_strike => Some(ComboStructure::Straddle),
        (PositionSide::Short, PositionSide::Short) if same_strike => {
            Some(ComboStructure::ReverseStraddle)
        }
        (PositionSide::Long, PositionSide::Long) => Some(ComboStructure::Strangle),
        (PositionSide::Short, PositionSide::Short) => Some(ComboStructure::ReverseStrangle),
        _ => None,
    }
}

fn covered<L: LegView>(legs: &[L], shape: &Shape<'_, L>) -> Option<ComboStructure> {
    if !shape.uniform {
        return None;
    }

    let equity = legs.iter().find(|leg| leg.is_equity())?;
    let option = legs.iter().find(|leg| leg.is_equity_option())?;

    match (equity.side(), option.side(), option.call_put()) {
        (PositionSide::Long, PositionSide::Short, CallPut::Call) => {
            Some(ComboStructure::CoveredCall)
        }
        (PositionSide::Short, PositionSide::Short, CallPut::Put) => {
            Some(ComboStructure::CoveredPut)
        }
        (PositionSide::Long, PositionSide::Long, CallPut::Put) => Some(ComboStructure::MarriedPut),
        _ => None,
    }
}

// ============================================================================
// Four legs
// ============================================================================

fn four_legs<L: LegView>(legs: &[L]) -> Result<ComboStructure, ClassifierError> {
    let shape = Shape::measure(legs)?;

    let structure = match shape.composition {
        Composition::AllCalls | Composition::AllPuts => same_right_spread(&shape),
        Composition::PutCallMix => iron_calendar(&shape),
        Composition::ContainsEquity | Composition::Unrecognized => None,
    };

    structure.ok_or_else(|| shape.unknown(legs.len()))
}

fn same_right_spread<L: LegView>(shape: &Shape<'_, L>) -> Option<ComboStructure> {
    let geometry = (shape.expirations, shape.strikes);
    if shape.is_roll() {
        return (geometry == (2, 2)).then(|| shape.roll_in_or_out());
    }
    if !shape.uniform {
        return None;
    }

    let spread = match geometry {
        (1, 4) | (2, 4) => shape.by_near_side(SpreadShape::Condor, SpreadShape::ReverseCondor),
        (1, 3) => shape.by_near_side(SpreadShape::Butterfly, SpreadShape::ReverseButterfly),
        (1, 2) => SpreadShape::Vertical,
        (2, 1) => shape.by_near_side(SpreadShape::Calendar, SpreadShape::ReverseCalendar),
        (2, 2) => shape.by_near_side(
            SpreadShape::CondorCalendar,
            SpreadShape::ReverseCondorCalendar,
        ),
        (2, 3) => SpreadShape::Butterfly,
        _ => return None,
    };

    Some(ComboStructure::Spread(spread))
}

fn iron_calendar<L: LegView>(shape: &Shape<'_, L>) -> Option<ComboStructure> {
    if (shape.expirations, shape.strikes) != (2, 2) || !paired_strikes(shape) {
        return None;
    }
    if shape.is_roll() {
        return Some(shape.roll_in_or_out());
    }
    if !shape.uniform {
        return None;
    }

    Some(shape.by_near_side(
        ComboStructure::IronCalendar,
        ComboStructure::ReverseIronCalendar,
    ))
}

/// Both halves hold one put and one call at a single expiration, and each
/// right keeps its strike from the near half to the far half.
fn paired_strikes<L: LegView>(shape: &Shape<'_, L>) -> bool {
    match (put_and_call(&shape.near), put_and_call(&shape.far)) {
        (Some((near_put, near_call)), Some((far_put, far_call))) => {
            near_put.strike() == far_put.strike() && near_call.strike() == far_call.strike()
        }
        _ => false,
    }
}

fn put_and_call<'a, L: LegView>(half: &Anchor<'a, L>) -> Option<(&'a L, &'a L)> {
    let [a, b] = *half.legs() else {
        return None;
    };
    if a.expiration_date() != b.expiration_date() {
        return None;
    }

    match (a.call_put(), b.call_put()) {
        (CallPut::Put, CallPut::Call) => Some((a, b)),
        (CallPut::Call, CallPut::Put) => Some((b, a)),
        _ => None,
    }
}
