use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{MenuChoice, Transaction};

pub(crate) const MAX_DATE_LEN: usize = 10;
pub(crate) const MAX_CATEGORY_LEN: usize = 49;
pub(crate) const MAX_DESCRIPTION_LEN: usize = 99;

/// Amounts must stay below this in absolute value so sums remain representable.
pub(crate) const AMOUNT_LIMIT: i64 = 1_000_000_000_000_000;

/// Raw answers to the add-transaction prompts, one line each.
#[derive(Debug, Default)]
pub(crate) struct TransactionInput {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl TransactionInput {
    pub(crate) fn into_transaction(self) -> Result<Transaction> {
        let date = required("Date", self.date.trim(), MAX_DATE_LEN)?;
        let category = required("Category", self.category.trim(), MAX_CATEGORY_LEN)?;

        let amount_str = self.amount.trim();
        let amount = Decimal::from_str(amount_str)
            .with_context(|| format!("Invalid amount '{amount_str}'. Please enter a number like 12.34."))?;
        if amount.abs() >= Decimal::from(AMOUNT_LIMIT) {
            bail!("Amount too large: must be less than {AMOUNT_LIMIT} in absolute value.");
        }

        let description = bounded("Description", &self.description, MAX_DESCRIPTION_LEN)?;

        Ok(Transaction::new(date, category, amount, description))
    }
}

fn required(field: &str, value: &str, max: usize) -> Result<String> {
    if value.is_empty() {
        bail!("{field} cannot be empty.");
    }
    bounded(field, value, max)
}

/// Reject values longer than `max` characters instead of cutting them.
/// Lines that were not valid UTF-8 carry replacement characters and are rejected too.
pub(crate) fn bounded(field: &str, value: &str, max: usize) -> Result<String> {
    if value.contains(char::REPLACEMENT_CHARACTER) {
        bail!("Invalid input: {field} is not valid text.");
    }
    if value.chars().count() > max {
        bail!("Input too long: {field} must be at most {max} characters.");
    }
    Ok(value.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    Choice(MenuChoice),
    OutOfRange,
    NotANumber,
}

/// Menu selections are whole lines holding one integer.
pub(crate) fn parse_selection(line: &str) -> Selection {
    let line = line.trim();
    match line.parse::<i64>() {
        Ok(n) => MenuChoice::from_number(n).map_or(Selection::OutOfRange, Selection::Choice),
        Err(_) if is_integer_literal(line) => Selection::OutOfRange,
        Err(_) => Selection::NotANumber,
    }
}

/// Integers too wide for `i64` still count as numbers.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
