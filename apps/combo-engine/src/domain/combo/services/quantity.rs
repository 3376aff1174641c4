//! Leg Quantity Resolver
//!
//! Reduces a combo's per-leg quantities to the number of whole combo units
//! traded. A 2x4 vertical is two units of a 1x2.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::combo::errors::ClassifierError;

/// Calculate GCD of two numbers using Euclidean algorithm.
const fn gcd_two(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd_two(b, a % b) }
}

fn check_quantities(quantities: &[u32]) -> Result<(), ClassifierError> {
    if quantities.is_empty() {
        return Err(ClassifierError::InvalidQuantity {
            message: "no leg quantities".to_string(),
        });
    }
    if quantities.contains(&0) {
        return Err(ClassifierError::InvalidQuantity {
            message: format!("zero quantity in {quantities:?}"),
        });
    }
    Ok(())
}

/// Unit count of a combo: the GCD of all leg quantities.
///
/// Empty input or any zero quantity is `InvalidQuantity`.
pub fn units_of(quantities: &[u32]) -> Result<u32, ClassifierError> {
    check_quantities(quantities)?;
    Ok(quantities.iter().copied().fold(quantities[0], gcd_two))
}

/// Memo of the divisor set of each quantity seen so far.
///
/// Entries are only ever added. Share one cache between classifiers with
/// `Arc`.
#[derive(Debug, Default)]
pub struct DivisorCache {
    divisors: RwLock<HashMap<u32, Arc<BTreeSet<u32>>>>,
}

impl DivisorCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            divisors: RwLock::new(HashMap::new()),
        }
    }

    /// All positive divisors of `n`, computed once per distinct `n`.
    pub fn divisors(&self, n: u32) -> Arc<BTreeSet<u32>> {
        if let Some(cached) = self
            .divisors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&n)
        {
            return Arc::clone(cached);
        }

        let computed = Arc::new(divisors_of(n));
        let mut divisors = self
            .divisors
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(divisors.entry(n).or_insert(computed))
    }

    /// Unit count via the largest divisor common to every quantity.
    ///
    /// Agrees with [`units_of`] for every input.
    pub fn units_of(&self, quantities: &[u32]) -> Result<u32, ClassifierError> {
        check_quantities(quantities)?;

        let mut common: BTreeSet<u32> = (*self.divisors(quantities[0])).clone();
        for &quantity in &quantities[1..] {
            let divisors = self.divisors(quantity);
            common.retain(|d| divisors.contains(d));
        }

        common.last().copied().ok_or_else(|| ClassifierError::InvalidQuantity {
            message: format!("no common divisor for {quantities:?}"),
        })
    }

    /// Number of memoized quantities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.divisors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if nothing has been memoized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn divisors_of(n: u32) -> BTreeSet<u32> {
    let mut divisors = BTreeSet::new();
    let mut i = 1_u32;
    while u64::from(i) * u64::from(i) <= u64::from(n) {
        if n % i == 0 {
            divisors.insert(i);
            divisors.insert(n / i);
        }
        i += 1;
    }
    divisors
}
