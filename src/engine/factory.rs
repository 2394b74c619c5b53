// ============================================================================
// Lexer Factory
// Creates lexers from configuration
// ============================================================================

use crate::engine::{DispatchLexer, ReferenceLexer, TableLexer};
use crate::interfaces::{DecimalLexer, LoggingLexer};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration
// ============================================================================

/// Available lexer implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LexerKind {
    /// Column loop over the lookup tables
    #[default]
    Table,
    /// Function pointer per digit count over the lookup tables
    Dispatch,
    /// Checked arithmetic, no tables
    Reference,
}

impl fmt::Display for LexerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexerKind::Table => write!(f, "table"),
            LexerKind::Dispatch => write!(f, "dispatch"),
            LexerKind::Reference => write!(f, "reference"),
        }
    }
}

/// Lexer selection and decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LexerConfig {
    /// Which implementation to build
    pub kind: LexerKind,

    /// Wrap the lexer so every outcome is logged at debug level
    pub log_outcomes: bool,
}

impl LexerConfig {
    pub fn new(kind: LexerKind) -> Self {
        Self {
            kind,
            log_outcomes: false,
        }
    }

    /// Builder method: Log every lex outcome
    pub fn with_logging(mut self) -> Self {
        self.log_outcomes = true;
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Factory Functions
// ============================================================================

/// Create a lexer of the given kind.
pub fn create_lexer(kind: LexerKind) -> Arc<dyn DecimalLexer> {
    match kind {
        LexerKind::Table => Arc::new(TableLexer::new()),
        LexerKind::Dispatch => Arc::new(DispatchLexer::new()),
        LexerKind::Reference => Arc::new(ReferenceLexer::new()),
    }
}

/// Create the default lexer.
pub fn create_default_lexer() -> Arc<dyn DecimalLexer> {
    create_lexer(LexerKind::default())
}

/// Create a lexer from configuration
///
/// # Example
/// ```
/// use decimal_lexer::prelude::*;
///
/// let config = LexerConfig::new(LexerKind::Dispatch).with_logging();
/// let lexer = create_from_config(&config);
/// assert_eq!(lexer.name(), "Dispatch");
/// ```
pub fn create_from_config(config: &LexerConfig) -> Arc<dyn DecimalLexer> {
    let lexer = create_lexer(config.kind);
    tracing::debug!(
        lexer = lexer.name(),
        log_outcomes = config.log_outcomes,
        "created decimal lexer"
    );

    if config.log_outcomes {
        Arc::new(LoggingLexer::new(lexer))
    } else {
        lexer
    }
}
