// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod decimal_lexer;

pub use decimal_lexer::{DecimalLexer, LoggingLexer};
