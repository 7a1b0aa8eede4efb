use rust_decimal::Decimal;

use crate::models::Transaction;

const ID_WIDTH: usize = 5;
const DATE_WIDTH: usize = 12;
const CATEGORY_WIDTH: usize = 20;
const AMOUNT_WIDTH: usize = 14;
/// Single spaces between ID, Date, Category and Amount.
const COLUMN_GAPS: usize = 3;
/// Two spaces before the unbounded Description column.
const DESCRIPTION_GAP: usize = 2;
/// How far the rule extends under Description.
const DESCRIPTION_RULE_WIDTH: usize = 20;

/// Format a decimal amount as currency with thousand separators and 2 decimal places.
/// e.g. `-1234.5` → `"-$1,234.50"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let rounded = val.round_dp(2);
    let formatted = format!("{:.2}", rounded.abs());
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let grouped = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if rounded < Decimal::ZERO {
        format!("-${grouped}.{dec_part}")
    } else {
        format!("${grouped}.{dec_part}")
    }
}

pub(crate) fn table_header() -> String {
    format!(
        "{:<ID_WIDTH$} {:<DATE_WIDTH$} {:<CATEGORY_WIDTH$} {:>AMOUNT_WIDTH$}  Description",
        "ID", "Date", "Category", "Amount"
    )
}

pub(crate) fn table_rule() -> String {
    "─".repeat(
        ID_WIDTH
            + DATE_WIDTH
            + CATEGORY_WIDTH
            + AMOUNT_WIDTH
            + COLUMN_GAPS
            + DESCRIPTION_GAP
            + DESCRIPTION_RULE_WIDTH,
    )
}

/// One fixed-width row. Long values push the columns right rather than being cut.
pub(crate) fn table_row(txn: &Transaction) -> String {
    let row = format!(
        "{:<ID_WIDTH$} {:<DATE_WIDTH$} {:<CATEGORY_WIDTH$} {:>AMOUNT_WIDTH$}  {}",
        txn.id.unwrap_or(0),
        txn.date,
        txn.category,
        format_amount(txn.amount),
        txn.description,
    );
    row.trim_end().to_string()
}
