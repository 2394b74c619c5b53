// ============================================================================
// Dispatch Lexer
// Per-length column runs selected through a function pointer table
// ============================================================================

use super::column::{with_rollback, ColumnScan};
use crate::domain::{LexRequest, ParseCursor};
use crate::interfaces::DecimalLexer;
use crate::numeric::{LexError, LexResult};
use crate::tables::{column_tables, ColumnTables, MAX_DIGITS};

/// A complete scan of one fixed digit count.
type ColumnRun = fn(&ColumnTables, &mut ParseCursor<'_>, &LexRequest) -> LexResult<u64>;

/// Scan exactly `DIGITS` columns.
///
/// Monomorphized once per digit count, so the column loop has a constant
/// trip count and the place value of every column is known at compile time.
#[inline(always)]
fn run_columns<const DIGITS: usize>(
    tables: &ColumnTables,
    cursor: &mut ParseCursor<'_>,
    request: &LexRequest,
) -> LexResult<u64> {
    let mut scan = ColumnScan::new(request);
    let mut column = 0;
    while column < DIGITS {
        scan.consume(tables, cursor, column, DIGITS - 1 - column)?;
        column += 1;
    }
    scan.finish(request)
}

fn reject(
    _tables: &ColumnTables,
    _cursor: &mut ParseCursor<'_>,
    request: &LexRequest,
) -> LexResult<u64> {
    Err(LexError::DigitCount {
        requested: request.digit_count,
    })
}

/// Indexed by digit count. Slot 0 rejects; counts past the end reject too.
const DISPATCH: [ColumnRun; MAX_DIGITS + 1] = [
    reject,
    run_columns::<1>,
    run_columns::<2>,
    run_columns::<3>,
    run_columns::<4>,
    run_columns::<5>,
    run_columns::<6>,
    run_columns::<7>,
    run_columns::<8>,
    run_columns::<9>,
    run_columns::<10>,
    run_columns::<11>,
    run_columns::<12>,
    run_columns::<13>,
    run_columns::<14>,
    run_columns::<15>,
    run_columns::<16>,
    run_columns::<17>,
    run_columns::<18>,
    run_columns::<19>,
    run_columns::<20>,
];

/// Lexer that jumps straight to a scan specialised for the digit count.
///
/// Produces exactly the same results as `TableLexer`; only the dispatch
/// differs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchLexer;

impl DispatchLexer {
    pub const fn new() -> Self {
        Self
    }
}

impl DecimalLexer for DispatchLexer {
    #[inline]
    fn try_lex(&self, cursor: &mut ParseCursor<'_>, request: &LexRequest) -> LexResult<u64> {
        let run = DISPATCH
            .get(request.digit_count)
            .copied()
            .unwrap_or(reject as ColumnRun);
        let tables = column_tables();
        with_rollback(cursor, |cursor| run(tables, cursor, request))
    }

    fn name(&self) -> &'static str {
        "Dispatch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::conformance::assert_conforms;

    #[test]
    fn test_dispatch_lexer_conforms() {
        assert_conforms(&DispatchLexer::new());
    }

    #[test]
    fn test_dispatch_lexer_name() {
        assert_eq!(DispatchLexer::new().name(), "Dispatch");
    }

    #[test]
    fn test_dispatch_table_rejects_zero_and_oversized() {
        let mut cursor = ParseCursor::new(b"1");
        for digit_count in [0, MAX_DIGITS + 1, 255, usize::MAX] {
            assert_eq!(
                DispatchLexer.try_lex(&mut cursor, &LexRequest::new(digit_count)),
                Err(LexError::DigitCount {
                    requested: digit_count
                })
            );
        }
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_every_slot_reads_its_own_width() {
        let buffer = b"123456789012345678901234";
        for digit_count in 1..=MAX_DIGITS {
            let mut cursor = ParseCursor::new(buffer);
            let expected: u64 = std::str::from_utf8(&buffer[..digit_count])
                .unwrap()
                .parse()
                .unwrap();
            assert_eq!(
                DispatchLexer.try_lex(&mut cursor, &LexRequest::new(digit_count)),
                Ok(expected)
            );
            assert_eq!(cursor.position(), digit_count);
        }
    }
}
