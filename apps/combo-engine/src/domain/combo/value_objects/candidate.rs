//! Combo Candidate Value Object
//!
//! An ordered set of 1, 2 or 4 legs presented to the classifiers as one
//! strategy. Construction canonically sorts the legs; leg count and
//! expiration limits are enforced by the classifiers, not here.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::domain::combo::errors::ClassifierError;
use crate::domain::combo::services::{
    action_classifier, ordering, quantity, structure_classifier,
};
use crate::domain::combo::value_objects::{Action, ComboStructure};
use crate::domain::leg::{Leg, LegView};

/// Legs of one candidate combo, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboCandidate<L = Leg> {
    legs: Vec<L>,
}

impl<L: LegView> ComboCandidate<L> {
    /// Create a candidate, sorting `legs` into canonical order.
    #[must_use]
    pub fn new(legs: Vec<L>) -> Self {
        Self {
            legs: ordering::canonical_sort(legs),
        }
    }

    /// Legs in canonical order.
    #[must_use]
    pub fn legs(&self) -> &[L] {
        &self.legs
    }

    /// Consume the candidate, returning its legs in canonical order.
    #[must_use]
    pub fn into_legs(self) -> Vec<L> {
        self.legs
    }

    /// Number of legs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Check if the candidate has no legs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// First leg in canonical order.
    #[must_use]
    pub fn near_leg(&self) -> Option<&L> {
        self.legs.first()
    }

    /// Last leg in canonical order.
    #[must_use]
    pub fn far_leg(&self) -> Option<&L> {
        self.legs.last()
    }

    /// Per-leg quantities, in canonical order.
    #[must_use]
    pub fn quantities(&self) -> Vec<u32> {
        self.legs.iter().map(|leg| leg.quantity()).collect()
    }

    /// Distinct underlying symbols, in order of first appearance.
    #[must_use]
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = Vec::new();
        for leg in &self.legs {
            if !symbols.contains(&leg.symbol()) {
                symbols.push(leg.symbol());
            }
        }
        symbols
    }

    /// Earliest execution time across the legs.
    #[must_use]
    pub fn execution_time(&self) -> Option<DateTime<Utc>> {
        self.legs.iter().map(|leg| leg.execution_time()).min()
    }

    /// Check if the option legs span more than one expiration date.
    ///
    /// Equity legs carry no expiration and are ignored.
    #[must_use]
    pub fn is_multi_expiry(&self) -> bool {
        let expirations: BTreeSet<_> = self
            .legs
            .iter()
            .filter(|leg| leg.is_equity_option())
            .map(|leg| leg.expiration_date())
            .collect();
        expirations.len() > 1
    }

    /// Trading action that produced this combo.
    pub fn action(&self) -> Result<Action, ClassifierError> {
        action_classifier::classify_action(&self.legs)
    }

    /// Strategy structure of this combo.
    pub fn structure(&self) -> Result<ComboStructure, ClassifierError> {
        structure_classifier::classify_structure(&self.legs)
    }

    /// Whole combo units traded.
    pub fn unit_quantity(&self) -> Result<u32, ClassifierError> {
        quantity::units_of(&self.quantities())
    }
}

impl<L: LegView> From<Vec<L>> for ComboCandidate<L> {
    fn from(legs: Vec<L>) -> Self {
        Self::new(legs)
    }
}
