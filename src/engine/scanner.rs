// ============================================================================
// Field Scanner
// Chained fixed-width fields under one sticky error flag
// ============================================================================

use crate::domain::{ErrorFlag, LexRequest, ParseCursor};
use crate::interfaces::DecimalLexer;
use crate::numeric::{LexError, LexResult};

/// Reads consecutive fixed-width fields and separators from one buffer.
///
/// All calls share a sticky `ErrorFlag`: after the first failure every
/// later call returns immediately without reading input, so a whole record
/// can be decoded first and checked once at the end.
///
/// # Example
/// ```
/// use decimal_lexer::prelude::*;
///
/// let lexer = TableLexer::new();
/// let mut scanner = FieldScanner::new(&lexer, b"20240518-13:45:01");
/// let year = scanner.field(&LexRequest::calendar_year());
/// let month = scanner.field(&LexRequest::month());
/// let day = scanner.field(&LexRequest::day_of_month());
/// scanner.literal(b"-");
/// let hour = scanner.field(&LexRequest::hour());
/// scanner.literal(b":");
/// let minute = scanner.field(&LexRequest::minute());
/// scanner.literal(b":");
/// let second = scanner.field(&LexRequest::second());
///
/// assert!(scanner.finish().is_ok());
/// assert_eq!((year, month, day), (2024, 5, 18));
/// assert_eq!((hour, minute, second), (13, 45, 1));
/// ```
pub struct FieldScanner<'a, 'l> {
    lexer: &'l dyn DecimalLexer,
    cursor: ParseCursor<'a>,
    error: ErrorFlag,
    first_error: Option<LexError>,
}

impl<'a, 'l> FieldScanner<'a, 'l> {
    /// Scan `buffer` from its start.
    pub fn new(lexer: &'l dyn DecimalLexer, buffer: &'a [u8]) -> Self {
        Self::with_cursor(lexer, ParseCursor::new(buffer))
    }

    /// Scan from an existing cursor position.
    pub fn with_cursor(lexer: &'l dyn DecimalLexer, cursor: ParseCursor<'a>) -> Self {
        Self {
            lexer,
            cursor,
            error: ErrorFlag::new(),
            first_error: None,
        }
    }

    /// Lex one field. Returns 0 once any call has failed.
    pub fn field(&mut self, request: &LexRequest) -> u64 {
        if self.error.is_set() {
            return 0;
        }
        match self.lexer.try_lex(&mut self.cursor, request) {
            Ok(value) => value,
            Err(error) => {
                self.fail(error);
                0
            },
        }
    }

    /// Lex `digit_count` digits over the full u64 range.
    pub fn digits(&mut self, digit_count: usize) -> u64 {
        self.field(&LexRequest::new(digit_count))
    }

    /// Consume `expected` verbatim; returns whether it matched.
    pub fn literal(&mut self, expected: &[u8]) -> bool {
        if self.error.is_set() {
            return false;
        }
        let matched = expected
            .iter()
            .enumerate()
            .take_while(|&(offset, &wanted)| self.cursor.peek_at(offset) == Some(wanted))
            .count();
        if matched == expected.len() {
            self.cursor.advance(matched);
            return true;
        }
        self.fail(LexError::LiteralMismatch {
            offset: self.cursor.position() + matched,
        });
        false
    }

    fn fail(&mut self, error: LexError) {
        tracing::debug!(
            lexer = self.lexer.name(),
            position = self.cursor.position(),
            %error,
            "fixed-width scan stopped"
        );
        self.error.set();
        self.first_error.get_or_insert(error);
    }

    pub fn error_flag(&self) -> ErrorFlag {
        self.error
    }

    /// The failure that raised the flag, if any.
    pub fn first_error(&self) -> Option<LexError> {
        self.first_error
    }

    pub fn cursor(&self) -> &ParseCursor<'a> {
        &self.cursor
    }

    /// The cursor after the last field, or the first failure.
    pub fn finish(self) -> LexResult<ParseCursor<'a>> {
        match self.first_error {
            Some(error) => Err(error),
            None => Ok(self.cursor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{DispatchLexer, TableLexer};

    #[test]
    fn test_scan_fixed_record() {
        let lexer = TableLexer::new();
        let mut scanner = FieldScanner::new(&lexer, b"000123004567trailer");
        assert_eq!(scanner.digits(6), 123);
        assert_eq!(scanner.digits(6), 4567);
        let cursor = scanner.finish().unwrap();
        assert_eq!(cursor.remaining(), b"trailer");
    }

    #[test]
    fn test_first_failure_stops_the_scan() {
        let lexer = DispatchLexer::new();
        let mut scanner = FieldScanner::new(&lexer, b"20241318");
        assert_eq!(scanner.field(&LexRequest::calendar_year()), 2024);
        assert_eq!(scanner.field(&LexRequest::month()), 0);
        assert!(scanner.error_flag().is_set());
        assert_eq!(scanner.cursor().position(), 4);

        // Later fields do nothing even though "18" is a valid day
        assert_eq!(scanner.field(&LexRequest::day_of_month()), 0);
        assert_eq!(scanner.cursor().position(), 4);
        assert!(!scanner.literal(b""));

        assert_eq!(
            scanner.finish().unwrap_err(),
            LexError::Overflow { column: 1 }
        );
    }

    #[test]
    fn test_literal_mismatch_offset() {
        let lexer = TableLexer::new();
        let mut scanner = FieldScanner::new(&lexer, b"12:-34");
        assert_eq!(scanner.digits(2), 12);
        assert!(!scanner.literal(b"::"));
        assert_eq!(
            scanner.first_error(),
            Some(LexError::LiteralMismatch { offset: 3 })
        );
        assert_eq!(scanner.cursor().position(), 2);
    }

    #[test]
    fn test_literal_truncated_by_end_of_buffer() {
        let lexer = TableLexer::new();
        let mut scanner = FieldScanner::new(&lexer, b"12:");
        assert_eq!(scanner.digits(2), 12);
        assert!(!scanner.literal(b"::"));
        assert_eq!(
            scanner.first_error(),
            Some(LexError::LiteralMismatch { offset: 3 })
        );
        assert_eq!(scanner.cursor().position(), 2);
    }

    #[test]
    fn test_literal_past_end() {
        let lexer = TableLexer::new();
        let mut scanner = FieldScanner::with_cursor(&lexer, ParseCursor::at(b"99-", 2));
        assert!(scanner.literal(b"-"));
        assert_eq!(scanner.digits(1), 0);
        assert_eq!(
            scanner.first_error(),
            Some(LexError::UnexpectedEnd { column: 0 })
        );
    }
}
