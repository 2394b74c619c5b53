// ============================================================================
// Lex Request
// Per-call configuration: width and accepted value range
// ============================================================================

use crate::numeric::{LexError, LexResult};
use crate::tables::MAX_DIGITS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to lex: exactly `digit_count` digits whose value must fall in
/// `lower_bound..=upper_bound`.
///
/// Defaults to 20 digits over the full `u64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LexRequest {
    /// Number of digits to consume (1..=20)
    pub digit_count: usize,

    /// Largest accepted value (inclusive)
    pub upper_bound: u64,

    /// Smallest accepted value (inclusive)
    pub lower_bound: u64,
}

impl Default for LexRequest {
    fn default() -> Self {
        Self::new(MAX_DIGITS)
    }
}

impl LexRequest {
    /// Request `digit_count` digits over the full `u64` range.
    pub const fn new(digit_count: usize) -> Self {
        Self {
            digit_count,
            upper_bound: u64::MAX,
            lower_bound: 0,
        }
    }

    /// Builder method: Set the largest accepted value
    pub const fn with_upper_bound(mut self, upper_bound: u64) -> Self {
        self.upper_bound = upper_bound;
        self
    }

    /// Builder method: Set the smallest accepted value
    pub const fn with_lower_bound(mut self, lower_bound: u64) -> Self {
        self.lower_bound = lower_bound;
        self
    }

    /// Builder method: Set both bounds
    pub const fn with_bounds(self, lower_bound: u64, upper_bound: u64) -> Self {
        self.with_lower_bound(lower_bound)
            .with_upper_bound(upper_bound)
    }

    /// Whether `value` lies within the configured bounds.
    #[inline]
    pub const fn accepts(&self, value: u64) -> bool {
        value >= self.lower_bound && value <= self.upper_bound
    }

    /// Validate the request before any input is read.
    ///
    /// Only the digit count can make a request unusable. Inverted bounds are
    /// allowed and simply reject every value.
    #[inline]
    pub fn validate(&self) -> LexResult<()> {
        if self.digit_count == 0 || self.digit_count > MAX_DIGITS {
            return Err(LexError::DigitCount {
                requested: self.digit_count,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Preset Requests (fixed-width timestamp fields)
// ============================================================================

impl LexRequest {
    /// Four-digit year, 0000-9999
    pub const fn calendar_year() -> Self {
        Self::new(4)
    }

    /// Two-digit month, 01-12
    pub const fn month() -> Self {
        Self::new(2).with_bounds(1, 12)
    }

    /// Two-digit day of month, 01-31
    pub const fn day_of_month() -> Self {
        Self::new(2).with_bounds(1, 31)
    }

    /// Two-digit hour, 00-23
    pub const fn hour() -> Self {
        Self::new(2).with_upper_bound(23)
    }

    /// Two-digit minute, 00-59
    pub const fn minute() -> Self {
        Self::new(2).with_upper_bound(59)
    }

    /// Two-digit second, 00-60 (leap second allowed)
    pub const fn second() -> Self {
        Self::new(2).with_upper_bound(60)
    }
}
