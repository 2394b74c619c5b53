// ============================================================================
// Decimal Lexer Library
// Fixed-width decimal text to u64 with exact overflow detection
// ============================================================================

//! # Decimal Lexer
//!
//! A table-driven lexer that reads an exact number of ASCII decimal digits
//! from a fixed position in a buffer and produces a `u64`.
//!
//! ## Features
//!
//! - **Precomputed column tables** for digit validity and weighted value
//! - **Budget subtraction** detects overflow without any intermediate value
//!   leaving the u64 range, so `u64::MAX` itself is a usable upper bound
//! - **Inclusive bounds** checked as part of the lex
//! - **Rollback**: a failed lex never moves the cursor
//! - **Sticky error flag** for chaining many fields and checking once
//!
//! ## Example
//!
//! ```rust
//! use decimal_lexer::prelude::*;
//!
//! let mut cursor = ParseCursor::from("18446744073709551615 rest");
//! let mut error = ErrorFlag::new();
//!
//! let value = lex_dec_u64(&mut cursor, &mut error, &LexRequest::default());
//! assert_eq!(value, u64::MAX);
//! assert!(!error.is_set());
//! assert_eq!(cursor.remaining(), b" rest");
//!
//! // One past the maximum: flag raised, cursor untouched
//! let mut cursor = ParseCursor::from("18446744073709551616");
//! assert_eq!(lex_dec_u64(&mut cursor, &mut error, &LexRequest::default()), 0);
//! assert!(error.is_set());
//! assert_eq!(cursor.position(), 0);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod tables;

use domain::{ErrorFlag, LexRequest, ParseCursor};
use engine::TableLexer;
use interfaces::DecimalLexer;
use numeric::LexResult;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ErrorFlag, LexRequest, ParseCursor};
    pub use crate::engine::{
        create_default_lexer, create_from_config, create_lexer, DispatchLexer, FieldScanner,
        LexerConfig, LexerKind, ReferenceLexer, TableLexer,
    };
    pub use crate::interfaces::{DecimalLexer, LoggingLexer};
    pub use crate::numeric::{LexError, LexResult};
    pub use crate::tables::{column_tables, ColumnTables, MAX_DIGITS};
    pub use crate::{lex_dec_u64, lex_digits, try_lex_dec_u64};
}

// ============================================================================
// Entry Points
// ============================================================================

/// Lex `request.digit_count` digits at the cursor under the sticky flag.
///
/// Returns 0 without reading anything when `error` is already set. On any
/// failure (bad digit count, non-digit byte, value above `upper_bound` or
/// below `lower_bound`) sets `error`, leaves the cursor where it was and
/// returns 0. On success advances the cursor by exactly `digit_count`.
#[inline]
pub fn lex_dec_u64(
    cursor: &mut ParseCursor<'_>,
    error: &mut ErrorFlag,
    request: &LexRequest,
) -> u64 {
    TableLexer.lex(cursor, error, request)
}

/// Lex `digit_count` digits over the full u64 range.
#[inline]
pub fn lex_digits(cursor: &mut ParseCursor<'_>, error: &mut ErrorFlag, digit_count: usize) -> u64 {
    lex_dec_u64(cursor, error, &LexRequest::new(digit_count))
}

/// Lex one field and report why it failed.
#[inline]
pub fn try_lex_dec_u64(cursor: &mut ParseCursor<'_>, request: &LexRequest) -> LexResult<u64> {
    TableLexer.try_lex(cursor, request)
}
