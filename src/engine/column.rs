// ============================================================================
// Column Step
// One digit of the budget-subtraction scan, shared by the table lexers
// ============================================================================

use crate::domain::{LexRequest, ParseCursor};
use crate::numeric::{LexError, LexResult};
use crate::tables::ColumnTables;

/// Running state of a scan.
///
/// `budget` starts at the upper bound and shrinks by each column's weight,
/// so `value + budget == upper_bound` throughout and neither can wrap.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnScan {
    budget: u64,
    value: u64,
}

impl ColumnScan {
    #[inline(always)]
    pub(crate) fn new(request: &LexRequest) -> Self {
        Self {
            budget: request.upper_bound,
            value: 0,
        }
    }

    /// Consume the byte at the cursor as `column`, weighted at 10^`power`.
    ///
    /// The cursor advances only when the byte is accepted.
    #[inline(always)]
    pub(crate) fn consume(
        &mut self,
        tables: &ColumnTables,
        cursor: &mut ParseCursor<'_>,
        column: usize,
        power: usize,
    ) -> LexResult<()> {
        let byte = cursor.peek().ok_or(LexError::UnexpectedEnd { column })?;
        if tables.validity.is_invalid(power, byte) {
            return Err(LexError::InvalidDigit { column, byte });
        }
        let weight = tables.values.weight(power, byte);
        if weight > self.budget {
            return Err(LexError::Overflow { column });
        }
        self.budget -= weight;
        self.value += weight;
        cursor.bump();
        Ok(())
    }

    /// Apply the lower bound once every column has been consumed.
    #[inline(always)]
    pub(crate) fn finish(self, request: &LexRequest) -> LexResult<u64> {
        check_lower_bound(self.value, request)
    }
}

#[inline(always)]
pub(crate) fn check_lower_bound(value: u64, request: &LexRequest) -> LexResult<u64> {
    if value < request.lower_bound {
        return Err(LexError::BelowMinimum {
            value,
            lower_bound: request.lower_bound,
        });
    }
    Ok(value)
}

/// Run `scan` and put the cursor back where it started if it fails.
#[inline(always)]
pub(crate) fn with_rollback<'a, T>(
    cursor: &mut ParseCursor<'a>,
    scan: impl FnOnce(&mut ParseCursor<'a>) -> LexResult<T>,
) -> LexResult<T> {
    let start = cursor.position();
    let result = scan(cursor);
    if result.is_err() {
        cursor.rewind_to(start);
    }
    result
}
