// ============================================================================
// Domain Models Module
// Per-call inputs shared by every lexer
// ============================================================================

pub mod cursor;
pub mod error_flag;
pub mod request;

pub use cursor::ParseCursor;
pub use error_flag::ErrorFlag;
pub use request::LexRequest;
