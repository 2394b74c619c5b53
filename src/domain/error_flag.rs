// ============================================================================
// Sticky Error Flag
// Failure indicator shared across chained lex calls
// ============================================================================

/// A failure indicator that can be raised but never lowered.
///
/// Lexers return immediately without reading input when the flag is
/// already set, so a sequence of calls sharing one flag stops doing work
/// after the first failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ErrorFlag(bool);

impl ErrorFlag {
    /// A lowered flag.
    #[inline]
    pub const fn new() -> Self {
        Self(false)
    }

    /// Whether a failure has been recorded.
    #[inline]
    pub const fn is_set(&self) -> bool {
        self.0
    }

    /// Record a failure.
    #[inline]
    pub fn set(&mut self) {
        self.0 = true;
    }

    /// Record a failure when `failed` is true; returns the flag state.
    #[inline]
    pub fn raise_if(&mut self, failed: bool) -> bool {
        self.0 |= failed;
        self.0
    }
}

impl From<ErrorFlag> for bool {
    fn from(flag: ErrorFlag) -> Self {
        flag.0
    }
}
