// ============================================================================
// Reference Lexer
// Table-free baseline using checked arithmetic
// ============================================================================

use super::column::{check_lower_bound, with_rollback};
use crate::domain::{LexRequest, ParseCursor};
use crate::interfaces::DecimalLexer;
use crate::numeric::{LexError, LexResult};
use crate::tables::{column_power, TOP_COLUMN_POWER};

/// Straightforward lexer that multiplies and adds with overflow checks.
///
/// Slower than the table lexers but easy to audit, which makes it the
/// baseline the others are checked against. Failure reasons match the
/// table lexers column for column.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceLexer;

impl ReferenceLexer {
    pub const fn new() -> Self {
        Self
    }
}

impl DecimalLexer for ReferenceLexer {
    fn try_lex(&self, cursor: &mut ParseCursor<'_>, request: &LexRequest) -> LexResult<u64> {
        request.validate()?;
        let digit_count = request.digit_count;

        with_rollback(cursor, |cursor| {
            let mut prefix: u64 = 0;
            for column in 0..digit_count {
                let byte = cursor.peek().ok_or(LexError::UnexpectedEnd { column })?;
                let power = column_power(digit_count, column);
                if !byte.is_ascii_digit() || (power == TOP_COLUMN_POWER && byte > b'1') {
                    return Err(LexError::InvalidDigit { column, byte });
                }

                // Digits read so far, scaled to their place value, must not
                // exceed the upper bound.
                let overflow = LexError::Overflow { column };
                prefix = prefix
                    .checked_mul(10)
                    .and_then(|p| p.checked_add(u64::from(byte - b'0')))
                    .ok_or(overflow)?;
                let scaled = 10u64
                    .checked_pow(power as u32)
                    .and_then(|place| prefix.checked_mul(place))
                    .ok_or(overflow)?;
                if scaled > request.upper_bound {
                    return Err(overflow);
                }
                cursor.bump();
            }
            check_lower_bound(prefix, request)
        })
    }

    fn name(&self) -> &'static str {
        "Reference"
    }
}
