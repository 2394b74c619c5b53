// ============================================================================
// Column Tables
// Digit validity and weighted digit values for each place value
// ============================================================================

use std::fmt;

/// Widest request: u64::MAX has 20 decimal digits.
pub const MAX_DIGITS: usize = 20;

/// Row of the 10^19 column, the only one limited to digits 0 and 1.
pub const TOP_COLUMN_POWER: usize = MAX_DIGITS - 1;

/// Placeholder weight for bytes the validity table rejects.
///
/// Never read by a lexer: validity is always checked first.
pub const BAD_WEIGHT: u64 = 0;

const BYTE_VALUES: usize = 256;

/// Compute 10^n at compile time
const fn pow10(n: usize) -> u64 {
    let mut result: u64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Table row used by `column` of a `digit_count`-digit request.
///
/// Column 0 is the most significant requested digit. Callers validate
/// `column < digit_count` first; anything else underflows.
#[inline(always)]
pub(crate) const fn column_power(digit_count: usize, column: usize) -> usize {
    digit_count - 1 - column
}

// ============================================================================
// Validity
// ============================================================================

/// 20×256 matrix of rejected bytes.
///
/// Stored in the inverted sense: `true` means the byte is NOT a digit that
/// may appear at that place value. Every row rejects bytes outside `'0'..='9'`;
/// the 10^19 row also rejects `'2'..='9'` because u64::MAX begins with 1.
#[derive(Clone, PartialEq, Eq)]
pub struct ColumnValidityTable {
    invalid: [[bool; BYTE_VALUES]; MAX_DIGITS],
}

impl ColumnValidityTable {
    pub const fn build() -> Self {
        let mut invalid = [[true; BYTE_VALUES]; MAX_DIGITS];
        let mut power = 0;
        while power < MAX_DIGITS {
            let highest = if power == TOP_COLUMN_POWER { b'1' } else { b'9' };
            let mut byte = b'0';
            while byte <= highest {
                invalid[power][byte as usize] = false;
                byte += 1;
            }
            power += 1;
        }
        Self { invalid }
    }

    /// Whether `byte` is rejected at place value 10^`power`.
    #[inline(always)]
    pub fn is_invalid(&self, power: usize, byte: u8) -> bool {
        self.invalid[power][byte as usize]
    }

    #[inline(always)]
    pub fn is_valid(&self, power: usize, byte: u8) -> bool {
        !self.is_invalid(power, byte)
    }

    /// The full row for place value 10^`power`.
    pub fn row(&self, power: usize) -> &[bool; BYTE_VALUES] {
        &self.invalid[power]
    }
}

impl fmt::Debug for ColumnValidityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnValidityTable")
            .field("columns", &MAX_DIGITS)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Weighted Values
// ============================================================================

/// 20×256 matrix of `digit × 10^power` for every byte.
///
/// Entries for rejected bytes hold `BAD_WEIGHT`. That includes `'2'..='9'`
/// in the 10^19 row, whose true weights do not fit in a u64.
#[derive(Clone, PartialEq, Eq)]
pub struct ColumnValueTable {
    weights: [[u64; BYTE_VALUES]; MAX_DIGITS],
}

impl ColumnValueTable {
    pub const fn build() -> Self {
        let mut weights = [[BAD_WEIGHT; BYTE_VALUES]; MAX_DIGITS];
        let mut power = 0;
        while power < MAX_DIGITS {
            let place = pow10(power);
            let mut digit: u64 = 0;
            while digit <= 9 {
                weights[power][b'0' as usize + digit as usize] = match digit.checked_mul(place) {
                    Some(weight) => weight,
                    None => BAD_WEIGHT,
                };
                digit += 1;
            }
            power += 1;
        }
        Self { weights }
    }

    /// Contribution of `byte` at place value 10^`power`.
    #[inline(always)]
    pub fn weight(&self, power: usize, byte: u8) -> u64 {
        self.weights[power][byte as usize]
    }

    pub fn row(&self, power: usize) -> &[u64; BYTE_VALUES] {
        &self.weights[power]
    }
}

impl fmt::Debug for ColumnValueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnValueTable")
            .field("columns", &MAX_DIGITS)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Shared Instance
// ============================================================================

/// Both lookup tables, built together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTables {
    pub validity: ColumnValidityTable,
    pub values: ColumnValueTable,
}

impl ColumnTables {
    /// Deterministic and input-free; every call yields identical tables.
    pub const fn build() -> Self {
        Self {
            validity: ColumnValidityTable::build(),
            values: ColumnValueTable::build(),
        }
    }
}

impl Default for ColumnTables {
    fn default() -> Self {
        Self::build()
    }
}

// Evaluated at compile time, so there is no first-use initialization race.
static COLUMN_TABLES: ColumnTables = ColumnTables::build();

/// The process-wide tables. Read-only; safe to share across threads.
#[inline(always)]
pub fn column_tables() -> &'static ColumnTables {
    &COLUMN_TABLES
}
