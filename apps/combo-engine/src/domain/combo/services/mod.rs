//! Combo Domain Services
//!
//! Stateless classification logic over any `LegView` slice, plus the
//! divisor cache used for unit quantities.

pub mod action_classifier;
pub mod grouping;
pub mod metrics;
pub mod ordering;
pub mod quantity;
pub mod structure_classifier;

pub use action_classifier::classify_action;
pub use grouping::group_legs;
pub use metrics::{Composition, expiration_count, strike_count, uniform_direction};
pub use ordering::{Anchor, NearFar, canonical_sort, far_leg, is_roll, near_leg, split_near_far};
pub use quantity::{DivisorCache, units_of};
pub use structure_classifier::classify_structure;
