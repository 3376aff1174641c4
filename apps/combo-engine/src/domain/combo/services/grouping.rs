//! Leg Grouping Engine
//!
//! Reconstructs candidate combos from a flat, unordered leg list such as an
//! account's full position list.
//!
//! Legs are bucketed by (symbol, expiration, execution time, right). Inside
//! each bucket shorts and longs are ordered by strike descending and paired
//! one for one, so shorts `[460, 459, 455]` and longs `[430, 429, 425]`
//! become `[460, 430]`, `[459, 429]`, `[455, 425]`. Unpaired legs from every
//! bucket get one more pairing pass together; anything still unpaired is a
//! single-leg candidate.
//!
//! Pairing is positional, not strategy-aware: the second pass can pair legs
//! from different buckets.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::domain::combo::value_objects::ComboCandidate;
use crate::domain::leg::{CallPut, LegView};

/// Bucket key, compared field by field in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct BucketKey {
    symbol: String,
    expiration: NaiveDate,
    executed_at: DateTime<Utc>,
    call_put: CallPut,
}

impl BucketKey {
    fn of<L: LegView>(leg: &L) -> Self {
        Self {
            symbol: leg.symbol().to_string(),
            expiration: leg.expiration_date(),
            executed_at: leg.execution_time(),
            call_put: leg.call_put(),
        }
    }
}

/// Partition `legs` into candidate combos.
///
/// Every input leg lands in exactly one candidate. Candidates hold one or
/// two legs; paired candidates come first.
pub fn group_legs<L: LegView>(legs: Vec<L>) -> Vec<ComboCandidate<L>> {
    let total = legs.len();

    let mut buckets: BTreeMap<BucketKey, Vec<L>> = BTreeMap::new();
    for leg in legs {
        buckets.entry(BucketKey::of(&leg)).or_default().push(leg);
    }
    let bucket_count = buckets.len();

    let mut pairs = Vec::new();
    let mut singles = Vec::new();
    for bucket in buckets.into_values() {
        pair_sides(bucket, &mut pairs, &mut singles);
    }

    let bucket_pairs = pairs.len();
    let mut remainder = Vec::new();
    pair_sides(singles, &mut pairs, &mut remainder);

    debug!(
        legs = total,
        buckets = bucket_count,
        bucket_pairs,
        regrouped_pairs = pairs.len() - bucket_pairs,
        singles = remainder.len(),
        "Grouped legs into candidates"
    );

    pairs
        .into_iter()
        .map(|[short, long]| ComboCandidate::new(vec![short, long]))
        .chain(remainder.into_iter().map(|leg| ComboCandidate::new(vec![leg])))
        .collect()
}

/// Pair shorts with longs by descending strike; leftovers go to `singles`.
fn pair_sides<L: LegView>(group: Vec<L>, pairs: &mut Vec<[L; 2]>, singles: &mut Vec<L>) {
    let (mut shorts, mut longs): (Vec<L>, Vec<L>) =
        group.into_iter().partition(|leg| leg.is_short());

    shorts.sort_by(|a, b| b.strike().cmp(&a.strike()));
    longs.sort_by(|a, b| b.strike().cmp(&a.strike()));

    let matched = shorts.len().min(longs.len());
    pairs.extend(
        shorts
            .drain(..matched)
            .zip(longs.drain(..matched))
            .map(|(short, long)| [short, long]),
    );

    singles.extend(shorts);
    singles.extend(longs);
}
