// ============================================================================
// Decimal Lexer Interface
// Contract shared by every fixed-width decimal lexer
// ============================================================================

use crate::domain::{ErrorFlag, LexRequest, ParseCursor};
use crate::numeric::LexResult;
use std::sync::Arc;

/// Lexes exactly `request.digit_count` ASCII digits into a u64.
///
/// # Contract
/// - On success the cursor has advanced by exactly `digit_count` bytes and
///   the value lies within the request's bounds.
/// - On failure the cursor is where it was on entry.
/// - A digit count outside 1..=20 fails before any byte is read.
///
/// # Thread Safety
/// Implementations are `Send + Sync`; the shared lookup tables are
/// immutable, so one lexer can serve any number of threads.
pub trait DecimalLexer: Send + Sync {
    /// Lex one field, reporting why it failed.
    fn try_lex(&self, cursor: &mut ParseCursor<'_>, request: &LexRequest) -> LexResult<u64>;

    /// Get the name of this implementation.
    ///
    /// Used for logging, debugging, and benchmarking.
    fn name(&self) -> &'static str;

    /// Lex one field under the sticky error flag contract.
    ///
    /// If `error` is already set nothing is read and 0 is returned. On
    /// failure `error` is set and 0 is returned. The flag is never cleared.
    #[inline]
    fn lex(
        &self,
        cursor: &mut ParseCursor<'_>,
        error: &mut ErrorFlag,
        request: &LexRequest,
    ) -> u64 {
        if error.is_set() {
            return 0;
        }
        let result = self.try_lex(cursor, request);
        error.raise_if(result.is_err());
        result.unwrap_or(0)
    }
}

/// Decorator that logs every outcome of the wrapped lexer.
pub struct LoggingLexer {
    inner: Arc<dyn DecimalLexer>,
}

impl LoggingLexer {
    pub fn new(inner: Arc<dyn DecimalLexer>) -> Self {
        Self { inner }
    }
}

impl DecimalLexer for LoggingLexer {
    fn try_lex(&self, cursor: &mut ParseCursor<'_>, request: &LexRequest) -> LexResult<u64> {
        let position = cursor.position();
        let result = self.inner.try_lex(cursor, request);
        match &result {
            Ok(value) => tracing::debug!(
                lexer = self.inner.name(),
                position,
                digits = request.digit_count,
                value,
                "lexed decimal field"
            ),
            Err(error) => tracing::debug!(
                lexer = self.inner.name(),
                position,
                digits = request.digit_count,
                column = ?error.column(),
                %error,
                "decimal field rejected"
            ),
        }
        result
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
