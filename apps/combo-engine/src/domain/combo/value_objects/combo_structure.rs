//! Combo Structure Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shape formed by same-right (all-call or all-put) legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadShape {
    /// Same expiry, different strikes.
    Vertical,
    /// Vertical where one leg closes and the other opens.
    VerticalRoll,
    /// Same strike, different expiries, short front month.
    Calendar,
    /// Same strike, different expiries, long front month.
    ReverseCalendar,
    /// Calendar where one leg closes and the other opens.
    CalendarRoll,
    /// Different strikes and expiries, short front month.
    Diagonal,
    /// Different strikes and expiries, long front month.
    ReverseDiagonal,
    /// Diagonal where one leg closes and the other opens.
    DiagonalRoll,
    /// Three strikes, short near side.
    Butterfly,
    /// Three strikes, long near side.
    ReverseButterfly,
    /// Four strikes, short near side.
    Condor,
    /// Four strikes, long near side.
    ReverseCondor,
    /// Four-strike combo rolled across expiries.
    CondorRoll,
    /// Two strikes over two expiries, short front month.
    CondorCalendar,
    /// Two strikes over two expiries, long front month.
    ReverseCondorCalendar,
}

impl SpreadShape {
    /// Every shape, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Vertical,
        Self::VerticalRoll,
        Self::Calendar,
        Self::ReverseCalendar,
        Self::CalendarRoll,
        Self::Diagonal,
        Self::ReverseDiagonal,
        Self::DiagonalRoll,
        Self::Butterfly,
        Self::ReverseButterfly,
        Self::Condor,
        Self::ReverseCondor,
        Self::CondorRoll,
        Self::CondorCalendar,
        Self::ReverseCondorCalendar,
    ];

    /// Tag string for this shape.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::VerticalRoll => "vertical_roll",
            Self::Calendar => "calendar",
            Self::ReverseCalendar => "reverse_calendar",
            Self::CalendarRoll => "calendar_roll",
            Self::Diagonal => "diagonal",
            Self::ReverseDiagonal => "reverse_diagonal",
            Self::DiagonalRoll => "diagonal_roll",
            Self::Butterfly => "butterfly",
            Self::ReverseButterfly => "reverse_butterfly",
            Self::Condor => "condor",
            Self::ReverseCondor => "reverse_condor",
            Self::CondorRoll => "condor_roll",
            Self::CondorCalendar => "condor_calendar",
            Self::ReverseCondorCalendar => "reverse_condor_calendar",
        }
    }

    /// Check if this shape rolls a position.
    #[must_use]
    pub const fn is_roll(&self) -> bool {
        matches!(
            self,
            Self::VerticalRoll | Self::CalendarRoll | Self::DiagonalRoll | Self::CondorRoll
        )
    }
}

impl fmt::Display for SpreadShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpreadShape {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| UnknownTagError(s.to_string()))
    }
}

/// Strategy structure inferred from a combo's legs.
///
/// Four-leg same-right shapes are wrapped in `Spread` and carry a `spread_`
/// prefix so they never collide with their two-leg namesakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ComboStructure {
    /// Single equity leg.
    Equity,
    /// Single option leg.
    EquityOption,
    /// Two same-right legs.
    Pair(SpreadShape),
    /// Four same-right legs (`spread_` prefix).
    Spread(SpreadShape),
    /// Long call + long put, same strike.
    Straddle,
    /// Short call + short put, same strike.
    ReverseStraddle,
    /// Long call + long put, different strikes.
    Strangle,
    /// Short call + short put, different strikes.
    ReverseStrangle,
    /// Long equity + short call.
    CoveredCall,
    /// Short equity + short put.
    CoveredPut,
    /// Long equity + long put.
    MarriedPut,
    /// Calls and puts over two expiries, short front month.
    IronCalendar,
    /// Calls and puts over two expiries, long front month.
    ReverseIronCalendar,
    /// Four-leg roll whose near half opens.
    RollIn,
    /// Four-leg roll whose near half closes.
    RollOut,
}

const SPREAD_PREFIX: &str = "spread_";

impl ComboStructure {
    /// Same-right shape, ignoring the two-leg/four-leg distinction.
    #[must_use]
    pub const fn shape(&self) -> Option<SpreadShape> {
        match self {
            Self::Pair(shape) | Self::Spread(shape) => Some(*shape),
            _ => None,
        }
    }

    /// Check if this structure rolls a position.
    #[must_use]
    pub const fn is_roll(&self) -> bool {
        match self {
            Self::Pair(shape) | Self::Spread(shape) => shape.is_roll(),
            Self::RollIn | Self::RollOut => true,
            _ => false,
        }
    }

    /// Number of legs this structure is built from.
    #[must_use]
    pub const fn typical_leg_count(&self) -> usize {
        match self {
            Self::Equity | Self::EquityOption => 1,
            Self::Pair(_)
            | Self::Straddle
            | Self::ReverseStraddle
            | Self::Strangle
            | Self::ReverseStrangle
            | Self::CoveredCall
            | Self::CoveredPut
            | Self::MarriedPut => 2,
            Self::Spread(_)
            | Self::IronCalendar
            | Self::ReverseIronCalendar
            | Self::RollIn
            | Self::RollOut => 4,
        }
    }

    const fn fixed_tag(&self) -> Option<&'static str> {
        match self {
            Self::Equity => Some("equity"),
            Self::EquityOption => Some("equity_option"),
            Self::Straddle => Some("straddle"),
            Self::ReverseStraddle => Some("reverse_straddle"),
            Self::Strangle => Some("strangle"),
            Self::ReverseStrangle => Some("reverse_strangle"),
            Self::CoveredCall => Some("covered_call"),
            Self::CoveredPut => Some("covered_put"),
            Self::MarriedPut => Some("married_put"),
            Self::IronCalendar => Some("iron_calendar"),
            Self::ReverseIronCalendar => Some("reverse_iron_calendar"),
            Self::RollIn => Some("roll_in"),
            Self::RollOut => Some("roll_out"),
            Self::Pair(_) | Self::Spread(_) => None,
        }
    }

    const FIXED: [Self; 13] = [
        Self::Equity,
        Self::EquityOption,
        Self::Straddle,
        Self::ReverseStraddle,
        Self::Strangle,
        Self::ReverseStrangle,
        Self::CoveredCall,
        Self::CoveredPut,
        Self::MarriedPut,
        Self::IronCalendar,
        Self::ReverseIronCalendar,
        Self::RollIn,
        Self::RollOut,
    ];
}

impl fmt::Display for ComboStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pair(shape) => write!(f, "{shape}"),
            Self::Spread(shape) => write!(f, "{SPREAD_PREFIX}{shape}"),
            other => f.write_str(other.fixed_tag().unwrap_or_default()),
        }
    }
}

impl FromStr for ComboStructure {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(fixed) = Self::FIXED
            .into_iter()
            .find(|structure| structure.fixed_tag() == Some(s))
        {
            return Ok(fixed);
        }

        let parsed = match s.strip_prefix(SPREAD_PREFIX) {
            Some(shape) => shape.parse().map(Self::Spread),
            None => s.parse().map(Self::Pair),
        };
        parsed.map_err(|_| UnknownTagError(s.to_string()))
    }
}

impl From<ComboStructure> for String {
    fn from(structure: ComboStructure) -> Self {
        structure.to_string()
    }
}

impl TryFrom<String> for ComboStructure {
    type Error = UnknownTagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A structure or shape tag that does not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown structure tag: {0}")]
pub struct UnknownTagError(pub String);
