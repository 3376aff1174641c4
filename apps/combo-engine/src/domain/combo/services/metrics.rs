//! Leg Set Metrics
//!
//! Counts and composition predicates shared by the action and structure
//! classifiers.

use std::collections::BTreeSet;

use crate::domain::combo::errors::ClassifierError;
use crate::domain::leg::LegView;

/// Number of distinct expiration dates. More than two is an error.
pub fn expiration_count<L: LegView>(legs: &[L]) -> Result<usize, ClassifierError> {
    let count = legs
        .iter()
        .map(|leg| leg.expiration_date())
        .collect::<BTreeSet<_>>()
        .len();

    if count > 2 {
        return Err(ClassifierError::TooManyExpirations { count });
    }
    Ok(count)
}

/// Number of distinct strikes.
pub fn strike_count<L: LegView>(legs: &[L]) -> usize {
    legs.iter()
        .map(|leg| leg.strike())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Every leg opens, or every leg closes.
pub fn uniform_direction<L: LegView>(legs: &[L]) -> bool {
    legs.iter().all(|leg| leg.is_opening()) || legs.iter().all(|leg| leg.is_closing())
}

/// Instrument mix of a leg set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    /// At least one equity leg.
    ContainsEquity,
    /// Only call options.
    AllCalls,
    /// Only put options.
    AllPuts,
    /// Calls and puts, no equity.
    PutCallMix,
    /// Option legs without a usable right.
    Unrecognized,
}

impl Composition {
    /// Classify the instrument mix of `legs`.
    ///
    /// Checked in order: equity, all calls, all puts, call/put mix.
    pub fn of<L: LegView>(legs: &[L]) -> Self {
        if legs.iter().any(|leg| leg.is_equity()) {
            Self::ContainsEquity
        } else if legs.iter().all(|leg| leg.is_call()) {
            Self::AllCalls
        } else if legs.iter().all(|leg| leg.is_put()) {
            Self::AllPuts
        } else if legs.iter().all(|leg| leg.is_call() || leg.is_put()) {
            Self::PutCallMix
        } else {
            Self::Unrecognized
        }
    }

    /// Plural noun for error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::ContainsEquity => "equity legs",
            Self::AllCalls => "calls",
            Self::AllPuts => "puts",
            Self::PutCallMix => "puts and calls",
            Self::Unrecognized => "unrecognized legs",
        }
    }
}
