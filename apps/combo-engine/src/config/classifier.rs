//! Classifier configuration.

use serde::{Deserialize, Serialize};

/// Classifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Memoize divisor sets when resolving unit quantities.
    #[serde(default = "default_true")]
    pub memoize_divisors: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            memoize_divisors: true,
        }
    }
}

const fn default_true() -> bool {
    true
}
