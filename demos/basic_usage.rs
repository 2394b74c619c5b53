// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_lexer::prelude::*;

/// Print one lex attempt as: input, unread bytes, value, consumed, flag.
fn show(lexer: &dyn DecimalLexer, text: &str, request: LexRequest) {
    let mut cursor = ParseCursor::from(text);
    let mut error = ErrorFlag::new();
    let value = lexer.lex(&mut cursor, &mut error, &request);

    let unread = String::from_utf8_lossy(cursor.remaining());
    println!(
        "{:>21}{:>21}{:>21} {:>2} {}",
        text,
        unread,
        value,
        cursor.position(),
        u8::from(error.is_set())
    );
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Decimal Lexer Example ===\n");

    let lexer = create_from_config(&LexerConfig::new(LexerKind::Table).with_logging());
    println!("Using {} lexer\n", lexer.name());

    println!("{:>21}{:>21}{:>21}  N E", "IN", "BAD", "OUT");
    let inputs = [
        "0",
        "1",
        "10",
        "900",
        "8000",
        "2000000000",
        "10000000000000000000",
        "18446744073709551615",
        "18446744073709551616",
        "20000000000000000000",
    ];
    for text in inputs {
        show(lexer.as_ref(), text, LexRequest::new(text.len()));
    }
    show(lexer.as_ref(), "2", LexRequest::new(1).with_lower_bound(3));

    // Illegal widths fail before reading
    for digit_count in [21, 0] {
        let mut cursor = ParseCursor::from("300000000000000000000");
        if let Err(error) = lexer.try_lex(&mut cursor, &LexRequest::new(digit_count)) {
            println!("{error}");
        }
    }

    // Fixed-width record with separators
    println!("\n=== Fixed-Width Record ===");
    let mut scanner = FieldScanner::new(lexer.as_ref(), b"20240518-13:45:01");
    let year = scanner.field(&LexRequest::calendar_year());
    let month = scanner.field(&LexRequest::month());
    let day = scanner.field(&LexRequest::day_of_month());
    scanner.literal(b"-");
    let hour = scanner.field(&LexRequest::hour());
    scanner.literal(b":");
    let minute = scanner.field(&LexRequest::minute());
    scanner.literal(b":");
    let second = scanner.field(&LexRequest::second());

    match scanner.finish() {
        Ok(_) => println!(
            "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
        ),
        Err(error) => println!("record rejected: {error}"),
    }
}
