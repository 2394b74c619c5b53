// ============================================================================
// Tables Module
// Precomputed per-column lookup tables for decimal lexing
// ============================================================================
//
// This module provides:
// - ColumnValidityTable: which bytes are rejected in each column
// - ColumnValueTable: weighted value of each digit byte in each column
// - column_tables(): the process-wide instance, built at compile time
//
// Rows are indexed by place value: row p holds digit × 10^p. A request for
// d digits reads rows d-1 down to 0.

mod column_tables;

pub use column_tables::{
    column_tables, ColumnTables, ColumnValidityTable, ColumnValueTable, BAD_WEIGHT, MAX_DIGITS,
    TOP_COLUMN_POWER,
};

pub(crate) use column_tables::column_power;
