// ============================================================================
// Table Lexer
// Column-indexed loop over the shared lookup tables
// ============================================================================

use super::column::{with_rollback, ColumnScan};
use crate::domain::{LexRequest, ParseCursor};
use crate::interfaces::DecimalLexer;
use crate::numeric::LexResult;
use crate::tables::{column_power, column_tables};

/// Table-driven lexer walking the requested columns in a loop.
///
/// Each column costs two table lookups and one comparison against the
/// remaining budget. This is the default implementation.
///
/// # Example
/// ```text
/// Input: "0012", digit_count = 4
/// Column 0: '0' at 10^3 -> 0     budget MAX
/// Column 1: '0' at 10^2 -> 0     budget MAX
/// Column 2: '1' at 10^1 -> 10    budget MAX - 10
/// Column 3: '2' at 10^0 -> 2     budget MAX - 12
/// Result: 12, cursor +4
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TableLexer;

impl TableLexer {
    pub const fn new() -> Self {
        Self
    }
}

impl DecimalLexer for TableLexer {
    #[inline]
    fn try_lex(&self, cursor: &mut ParseCursor<'_>, request: &LexRequest) -> LexResult<u64> {
        request.validate()?;
        let tables = column_tables();
        let digit_count = request.digit_count;

        with_rollback(cursor, |cursor| {
            let mut scan = ColumnScan::new(request);
            for column in 0..digit_count {
                scan.consume(tables, cursor, column, column_power(digit_count, column))?;
            }
            scan.finish(request)
        })
    }

    fn name(&self) -> &'static str {
        "Table"
    }
}
