//! Leg Ordering
//!
//! One canonical order for any leg set, near/far derivation, and roll
//! detection. Everything downstream reads legs in this order.

use std::slice;

use crate::domain::combo::errors::ClassifierError;
use crate::domain::leg::{Direction, LegView};

/// Sort legs into canonical order.
///
/// All-put sets order by strike descending, anything else by strike
/// ascending. A second stable pass then orders by expiration, so expiration
/// is the primary key and strike breaks ties within one expiration. Legs
/// with equal keys keep their input order.
pub fn canonical_sort<L: LegView>(mut legs: Vec<L>) -> Vec<L> {
    if legs.iter().all(|leg| leg.is_put()) {
        legs.sort_by(|a, b| b.strike().cmp(&a.strike()));
    } else {
        legs.sort_by(|a, b| a.strike().cmp(&b.strike()));
    }
    legs.sort_by_key(|leg| leg.expiration_date());
    legs
}

/// Canonically ordered references into `legs`.
pub fn sorted_refs<L: LegView>(legs: &[L]) -> Vec<&L> {
    canonical_sort(legs.iter().collect())
}

/// First leg in canonical order.
pub fn near_leg<L: LegView>(legs: &[L]) -> Option<&L> {
    sorted_refs(legs).first().copied()
}

/// Last leg in canonical order.
pub fn far_leg<L: LegView>(legs: &[L]) -> Option<&L> {
    sorted_refs(legs).last().copied()
}

/// Near or far side of a combo: a single leg, or a two-leg half of a
/// four-leg combo.
#[derive(Debug)]
pub enum Anchor<'a, L> {
    /// One leg of a one- or two-leg combo.
    Leg(&'a L),
    /// Two canonically adjacent legs of a four-leg combo.
    Half([&'a L; 2]),
}

impl<'a, L: LegView> Anchor<'a, L> {
    /// Legs on this side, in canonical order.
    pub fn legs(&self) -> &[&'a L] {
        match self {
            Self::Leg(leg) => slice::from_ref(leg),
            Self::Half(half) => half,
        }
    }

    /// First canonical leg on this side.
    pub fn first(&self) -> &'a L {
        match self {
            Self::Leg(leg) => leg,
            Self::Half([first, _]) => first,
        }
    }

    /// True only if every leg on this side opens.
    pub fn is_opening(&self) -> bool {
        self.legs().iter().all(|leg| leg.is_opening())
    }

    /// True only if every leg on this side closes.
    pub fn is_closing(&self) -> bool {
        self.legs().iter().all(|leg| leg.is_closing())
    }

    /// Direction shared by every leg on this side, if any.
    pub fn direction(&self) -> Option<Direction> {
        if self.is_opening() {
            Some(Direction::Opening)
        } else if self.is_closing() {
            Some(Direction::Closing)
        } else {
            None
        }
    }

    /// Side of the first canonical leg is short.
    pub fn is_short(&self) -> bool {
        self.first().is_short()
    }

    /// Side of the first canonical leg is long.
    pub fn is_long(&self) -> bool {
        self.first().is_long()
    }
}

/// Near side and (for multi-leg combos) far side.
pub type NearFar<'a, L> = (Anchor<'a, L>, Option<Anchor<'a, L>>);

/// Split legs into near and far sides.
///
/// 1 leg: (leg, none). 2 legs: (first, last). 4 legs: (first two, last
/// two). Any other count is `InvalidLegCount`.
pub fn split_near_far<L: LegView>(legs: &[L]) -> Result<NearFar<'_, L>, ClassifierError> {
    let sorted = sorted_refs(legs);
    match sorted.as_slice() {
        [only] => Ok((Anchor::Leg(*only), None)),
        [near, far] => Ok((Anchor::Leg(*near), Some(Anchor::Leg(*far)))),
        [a, b, c, d] => Ok((Anchor::Half([*a, *b]), Some(Anchor::Half([*c, *d])))),
        _ => Err(ClassifierError::InvalidLegCount { count: legs.len() }),
    }
}

/// A roll closes one side while opening the other.
pub fn is_roll<L: LegView>(near: &Anchor<'_, L>, far: &Anchor<'_, L>) -> bool {
    (near.is_opening() && far.is_closing()) || (near.is_closing() && far.is_opening())
}
