// ============================================================================
// Engine Module
// Lexer implementations and the helpers built on them
// ============================================================================

mod column;
mod dispatch_lexer;
mod reference_lexer;
mod scanner;
mod table_lexer;

#[cfg(test)]
pub(crate) mod conformance;

pub mod factory;

pub use dispatch_lexer::DispatchLexer;
pub use factory::{
    create_default_lexer, create_from_config, create_lexer, LexerConfig, LexerKind,
};
pub use reference_lexer::ReferenceLexer;
pub use scanner::FieldScanner;
pub use table_lexer::TableLexer;
