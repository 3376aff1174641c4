//! Combo Classifier Service
//!
//! Produces the full classification (action, structure, unit quantity) of a
//! candidate combo, or of every candidate reconstructed from a flat leg
//! list. Holds the only shared state in the crate: an optional divisor
//! cache, injected so several classifiers can share one.

use std::sync::Arc;

use tracing::debug;

use crate::config::ClassifierConfig;
use crate::domain::combo::errors::ClassifierError;
use crate::domain::combo::services::{
    DivisorCache, classify_action, classify_structure, group_legs, units_of,
};
use crate::domain::combo::value_objects::{Classification, ComboCandidate};
use crate::domain::leg::{Leg, LegView};

/// A grouped candidate and its own classification outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCombo<L = Leg> {
    /// Legs of the combo, in canonical order.
    pub candidate: ComboCandidate<L>,
    /// Classification, or the reason this candidate could not be classified.
    pub result: Result<Classification, ClassifierError>,
}

impl<L> ClassifiedCombo<L> {
    /// Check if the candidate was classified.
    #[must_use]
    pub const fn is_classified(&self) -> bool {
        self.result.is_ok()
    }
}

/// Classifies combos into action, structure and unit quantity.
#[derive(Debug, Clone)]
pub struct ComboClassifier {
    cache: Option<Arc<DivisorCache>>,
}

impl ComboClassifier {
    /// Create a classifier from configuration.
    ///
    /// A fresh divisor cache is created when `memoize_divisors` is set.
    #[must_use]
    pub fn new(config: &ClassifierConfig) -> Self {
        if config.memoize_divisors {
            Self::with_cache(Arc::new(DivisorCache::new()))
        } else {
            Self::without_cache()
        }
    }

    /// Create a classifier that shares an existing divisor cache.
    #[must_use]
    pub const fn with_cache(cache: Arc<DivisorCache>) -> Self {
        Self { cache: Some(cache) }
    }

    /// Create a classifier that resolves unit quantities without memoizing.
    #[must_use]
    pub const fn without_cache() -> Self {
        Self { cache: None }
    }

    /// Get the divisor cache, if any.
    #[must_use]
    pub const fn cache(&self) -> Option<&Arc<DivisorCache>> {
        self.cache.as_ref()
    }

    /// Whole combo units traded for the given per-leg quantities.
    pub fn unit_quantity(&self, quantities: &[u32]) -> Result<u32, ClassifierError> {
        match &self.cache {
            Some(cache) => cache.units_of(quantities),
            None => units_of(quantities),
        }
    }

    /// Classify one candidate.
    pub fn classify<L: LegView>(
        &self,
        candidate: &ComboCandidate<L>,
    ) -> Result<Classification, ClassifierError> {
        let legs = candidate.legs();
        let result = classify_action(legs).and_then(|action| {
            let structure = classify_structure(legs)?;
            let unit_quantity = self.unit_quantity(&candidate.quantities())?;
            Ok(Classification::new(action, structure, unit_quantity))
        });

        match &result {
            Ok(classification) => debug!(
                symbols = ?candidate.symbols(),
                legs = legs.len(),
                action = %classification.action,
                structure = %classification.structure,
                unit_quantity = classification.unit_quantity,
                "Classified combo"
            ),
            Err(e) => debug!(
                symbols = ?candidate.symbols(),
                legs = legs.len(),
                error = %e,
                "Combo not classified"
            ),
        }

        result
    }

    /// Group a flat leg list into candidates and classify each one.
    ///
    /// A candidate that fails classification carries its error without
    /// affecting the others.
    pub fn classify_legs<L: LegView>(&self, legs: Vec<L>) -> Vec<ClassifiedCombo<L>> {
        group_legs(legs)
            .into_iter()
            .map(|candidate| {
                let result = self.classify(&candidate);
                ClassifiedCombo { candidate, result }
            })
            .collect()
    }
}

impl Default for ComboClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}
