// ============================================================================
// Lexer Conformance Checks
// Edge cases every DecimalLexer implementation must reproduce
// ============================================================================

use crate::domain::{ErrorFlag, LexRequest, ParseCursor};
use crate::interfaces::DecimalLexer;
use crate::numeric::LexError;

fn lex_all(
    lexer: &dyn DecimalLexer,
    text: &str,
    request: LexRequest,
) -> (Result<u64, LexError>, usize) {
    let mut cursor = ParseCursor::from(text);
    let result = lexer.try_lex(&mut cursor, &request);
    (result, cursor.position())
}

fn assert_accepts(lexer: &dyn DecimalLexer, text: &str, request: LexRequest, expected: u64) {
    let (result, position) = lex_all(lexer, text, request);
    assert_eq!(result, Ok(expected), "{}: {text:?} {request:?}", lexer.name());
    assert_eq!(position, request.digit_count, "{}: {text:?}", lexer.name());
}

fn assert_rejects(lexer: &dyn DecimalLexer, text: &str, request: LexRequest, expected: LexError) {
    let (result, position) = lex_all(lexer, text, request);
    assert_eq!(result, Err(expected), "{}: {text:?} {request:?}", lexer.name());
    assert_eq!(position, 0, "{}: cursor moved on {text:?}", lexer.name());
}

pub(crate) fn assert_conforms(lexer: &dyn DecimalLexer) {
    // One significant digit in every column width
    let accepted = [
        "0",
        "1",
        "2",
        "10",
        "900",
        "8000",
        "70000",
        "600000",
        "5000000",
        "40000000",
        "300000000",
        "2000000000",
        "10000000000",
        "900000000000",
        "8000000000000",
        "70000000000000",
        "600000000000000",
        "5000000000000000",
        "40000000000000000",
        "300000000000000000",
        "2000000000000000000",
        "10000000000000000000",
        "18446744073709551615",
    ];
    for text in accepted {
        let expected: u64 = text.parse().unwrap();
        assert_accepts(lexer, text, LexRequest::new(text.len()), expected);
    }

    // Just past u64::MAX fails in the last column
    assert_rejects(
        lexer,
        "18446744073709551616",
        LexRequest::default(),
        LexError::Overflow { column: 19 },
    );

    // Top column only admits 0 and 1
    for first in b'2'..=b'9' {
        let mut text = String::from(char::from(first));
        text.push_str(&"0".repeat(19));
        assert_rejects(
            lexer,
            &text,
            LexRequest::default(),
            LexError::InvalidDigit {
                column: 0,
                byte: first,
            },
        );
    }
    assert_accepts(lexer, "01234567890123456789", LexRequest::default(), 1_234_567_890_123_456_789);

    // Illegal digit counts never read the buffer
    assert_rejects(
        lexer,
        "300000000000000000000",
        LexRequest::new(21),
        LexError::DigitCount { requested: 21 },
    );
    assert_rejects(lexer, "", LexRequest::new(0), LexError::DigitCount { requested: 0 });
    assert_rejects(lexer, "5", LexRequest::new(0), LexError::DigitCount { requested: 0 });

    // Lower bound is checked after every digit has been consumed
    assert_rejects(
        lexer,
        "2",
        LexRequest::new(1).with_lower_bound(3),
        LexError::BelowMinimum {
            value: 2,
            lower_bound: 3,
        },
    );
    assert_accepts(lexer, "3", LexRequest::new(1).with_lower_bound(3), 3);
    assert_rejects(
        lexer,
        "012x",
        LexRequest::new(3).with_lower_bound(100),
        LexError::BelowMinimum {
            value: 12,
            lower_bound: 100,
        },
    );
    // A bad final column is reported before any bound check
    assert_rejects(
        lexer,
        "0x",
        LexRequest::new(2).with_lower_bound(50),
        LexError::InvalidDigit {
            column: 1,
            byte: b'x',
        },
    );

    // Upper bound is enforced through the budget
    assert_accepts(lexer, "499", LexRequest::new(3).with_upper_bound(499), 499);
    assert_rejects(
        lexer,
        "500",
        LexRequest::new(3).with_upper_bound(499),
        LexError::Overflow { column: 0 },
    );
    assert_rejects(
        lexer,
        "10000000000000000000",
        LexRequest::default().with_upper_bound(9_999_999_999_999_999_999),
        LexError::Overflow { column: 0 },
    );
    assert!(lex_all(lexer, "050", LexRequest::new(3).with_bounds(100, 10)).0.is_err());
    assert_accepts(
        lexer,
        "00000000000000000000",
        LexRequest::default().with_upper_bound(0),
        0,
    );
    assert_rejects(
        lexer,
        "19999999999999999999",
        LexRequest::default(),
        LexError::Overflow { column: 1 },
    );

    // Leading zeros and partial consumption
    assert_accepts(lexer, "0012", LexRequest::new(4), 12);
    let mut cursor = ParseCursor::from("12345");
    assert_eq!(lexer.try_lex(&mut cursor, &LexRequest::new(3)), Ok(123));
    assert_eq!(cursor.remaining(), b"45");

    // Non-digits and short input roll back to the entry position
    assert_rejects(
        lexer,
        "12a45",
        LexRequest::new(5),
        LexError::InvalidDigit {
            column: 2,
            byte: b'a',
        },
    );
    assert_rejects(lexer, "123", LexRequest::new(5), LexError::UnexpectedEnd { column: 3 });
    assert_rejects(
        lexer,
        "12\u{0}",
        LexRequest::new(3),
        LexError::InvalidDigit { column: 2, byte: 0 },
    );

    // Cursor positioned mid-buffer
    let mut cursor = ParseCursor::at(b"ab123cd", 2);
    assert_eq!(lexer.try_lex(&mut cursor, &LexRequest::new(3)), Ok(123));
    assert_eq!(cursor.position(), 5);
    let mut cursor = ParseCursor::at(b"ab12xcd", 2);
    assert!(lexer.try_lex(&mut cursor, &LexRequest::new(3)).is_err());
    assert_eq!(cursor.position(), 2);

    // Sticky flag: a failed call suppresses later ones
    let mut cursor = ParseCursor::from("99x42");
    let mut error = ErrorFlag::new();
    assert_eq!(lexer.lex(&mut cursor, &mut error, &LexRequest::new(2)), 99);
    assert!(!error.is_set());
    assert_eq!(lexer.lex(&mut cursor, &mut error, &LexRequest::new(2)), 0);
    assert!(error.is_set());
    assert_eq!(cursor.position(), 2);
    cursor.advance(1);
    assert_eq!(lexer.lex(&mut cursor, &mut error, &LexRequest::new(2)), 0);
    assert_eq!(cursor.position(), 3);
    assert!(error.is_set());
}
