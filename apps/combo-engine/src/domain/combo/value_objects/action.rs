//! Action Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::leg::{Direction, PositionSide};

/// Trading action inferred from a combo's legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Equity purchase.
    Buy,
    /// Equity sale.
    Sell,
    /// Long option, opening.
    BuyToOpen,
    /// Long option, closing.
    BuyToClose,
    /// Short option, opening.
    SellToOpen,
    /// Short option, closing.
    SellToClose,
    /// Same-expiration roll (one leg closes, the other opens).
    Roll,
    /// Roll whose near leg or half is opening.
    RollIn,
    /// Roll whose near leg or half is closing.
    RollOut,
}

impl Action {
    /// Map a side/direction pair onto its open/close action.
    #[must_use]
    pub const fn from_side_direction(side: PositionSide, direction: Direction) -> Self {
        match (side, direction) {
            (PositionSide::Long, Direction::Opening) => Self::BuyToOpen,
            (PositionSide::Long, Direction::Closing) => Self::BuyToClose,
            (PositionSide::Short, Direction::Opening) => Self::SellToOpen,
            (PositionSide::Short, Direction::Closing) => Self::SellToClose,
        }
    }

    /// Tag string for this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::BuyToOpen => "buy_to_open",
            Self::BuyToClose => "buy_to_close",
            Self::SellToOpen => "sell_to_open",
            Self::SellToClose => "sell_to_close",
            Self::Roll => "roll",
            Self::RollIn => "roll_in",
            Self::RollOut => "roll_out",
        }
    }

    /// Check if this action rolls a position.
    #[must_use]
    pub const fn is_roll(&self) -> bool {
        matches!(self, Self::Roll | Self::RollIn | Self::RollOut)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
