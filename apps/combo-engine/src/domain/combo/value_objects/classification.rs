//! Classification Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Action, ComboStructure};

/// Full classification of one combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// Trading action that produced the combo.
    pub action: Action,
    /// Strategy structure of the combo.
    pub structure: ComboStructure,
    /// Whole combo units traded.
    pub unit_quantity: u32,
}

impl Classification {
    /// Create a new classification.
    #[must_use]
    pub const fn new(action: Action, structure: ComboStructure, unit_quantity: u32) -> Self {
        Self {
            action,
            structure,
            unit_quantity,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x {}", self.action, self.unit_quantity, self.structure)
    }
}
