// ============================================================================
// Numeric Module
// Error taxonomy for decimal lexing
// ============================================================================
//
// This module provides:
// - LexError: Reason a lex request failed
// - LexResult: Result alias used by every lexer
//
// The sticky boolean flag is the baseline failure contract. LexError is the
// optional reason code carried alongside it by `try_lex`.

mod errors;

pub use errors::{LexError, LexResult};
