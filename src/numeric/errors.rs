// ============================================================================
// Lex Errors
// Failure reasons for fixed-width decimal lexing
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reasons a lex request can fail.
///
/// Columns are counted from the most significant requested digit, starting
/// at 0. Every variant leaves the cursor where it was on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LexError {
    /// Digit count outside 1..=20
    DigitCount { requested: usize },
    /// Byte is not an acceptable digit in this column
    InvalidDigit { column: usize, byte: u8 },
    /// Buffer ended before the requested digits were read
    UnexpectedEnd { column: usize },
    /// Value would exceed the upper bound
    Overflow { column: usize },
    /// Value is below the lower bound
    BelowMinimum { value: u64, lower_bound: u64 },
    /// Expected separator was not found
    LiteralMismatch { offset: usize },
}

impl LexError {
    /// Column at which scanning stopped, if the failure happened mid-scan.
    pub fn column(&self) -> Option<usize> {
        match self {
            LexError::InvalidDigit { column, .. }
            | LexError::UnexpectedEnd { column }
            | LexError::Overflow { column } => Some(*column),
            _ => None,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::DigitCount { requested } => {
                write!(f, "illegal digit count {requested}: must be between 1 and 20")
            },
            LexError::InvalidDigit { column, byte } => write!(
                f,
                "invalid digit '{}' in column {column}",
                std::ascii::escape_default(*byte)
            ),
            LexError::UnexpectedEnd { column } => {
                write!(f, "input ended before column {column}")
            },
            LexError::Overflow { column } => {
                write!(f, "value exceeds upper bound at column {column}")
            },
            LexError::BelowMinimum { value, lower_bound } => {
                write!(f, "value {value} is below lower bound {lower_bound}")
            },
            LexError::LiteralMismatch { offset } => {
                write!(f, "expected separator not found at offset {offset}")
            },
        }
    }
}

impl std::error::Error for LexError {}

/// Result type alias for lex operations
pub type LexResult<T> = Result<T, LexError>;
