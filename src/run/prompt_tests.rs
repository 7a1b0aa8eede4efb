#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::prompt::*;
use crate::models::MenuChoice;

fn input(date: &str, category: &str, amount: &str, description: &str) -> TransactionInput {
    TransactionInput {
        date: date.into(),
        category: category.into(),
        amount: amount.into(),
        description: description.into(),
    }
}

// ── parse_selection ───────────────────────────────────────────

#[test]
fn test_parse_selection_number() {
    assert_eq!(parse_selection("3"), Selection::Choice(MenuChoice::Total));
    assert_eq!(parse_selection("  2 "), Selection::Choice(MenuChoice::List));
    assert_eq!(parse_selection("-7"), Selection::OutOfRange);
    assert_eq!(parse_selection("5"), Selection::OutOfRange);
}

#[test]
fn test_parse_selection_wider_than_i64_is_out_of_range() {
    assert_eq!(parse_selection("99999999999999999999"), Selection::OutOfRange);
    assert_eq!(parse_selection("-99999999999999999999"), Selection::OutOfRange);
}

#[test]
fn test_parse_selection_rejects_text() {
    assert_eq!(parse_selection("abc"), Selection::NotANumber);
    assert_eq!(parse_selection(""), Selection::NotANumber);
    assert_eq!(parse_selection("-"), Selection::NotANumber);
    assert_eq!(parse_selection("2abc"), Selection::NotANumber);
    assert_eq!(parse_selection("1.5"), Selection::NotANumber);
    assert_eq!(parse_selection("\u{FFFD}\u{FFFD}"), Selection::NotANumber);
}

// ── bounded ───────────────────────────────────────────────────

#[test]
fn test_bounded_at_limit() {
    assert_eq!(bounded("Date", "2024-03-01", MAX_DATE_LEN).unwrap(), "2024-03-01");
}

#[test]
fn test_bounded_over_limit() {
    let err = bounded("Date", "2024-03-011", MAX_DATE_LEN).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Input too long: Date must be at most 10 characters."
    );
}

#[test]
fn test_bounded_counts_chars_not_bytes() {
    let cafe = "é".repeat(MAX_CATEGORY_LEN);
    assert!(bounded("Category", &cafe, MAX_CATEGORY_LEN).is_ok());
}

// ── TransactionInput ──────────────────────────────────────────

#[test]
fn test_into_transaction_valid() {
    let txn = input("2024-03-01", " Coffee ", "4.50", "Latte")
        .into_transaction()
        .unwrap();
    assert_eq!(txn.id, None);
    assert_eq!(txn.date, "2024-03-01");
    assert_eq!(txn.category, "Coffee");
    assert_eq!(txn.amount, dec!(4.50));
    assert_eq!(txn.description, "Latte");
}

#[test]
fn test_into_transaction_blank_date_rejected() {
    let err = input("  ", "Coffee", "1", "")
        .into_transaction()
        .unwrap_err();
    assert_eq!(err.to_string(), "Date cannot be empty.");
}

#[test]
fn test_into_transaction_date_not_calendar_checked() {
    let txn = input("2024-13-45", "Coffee", "1", "")
        .into_transaction()
        .unwrap();
    assert_eq!(txn.date, "2024-13-45");
}

#[test]
fn test_into_transaction_negative_amount_allowed() {
    let txn = input("2024-03-01", "Refund", "-12.25", "")
        .into_transaction()
        .unwrap();
    assert_eq!(txn.amount, dec!(-12.25));
}

#[test]
fn test_into_transaction_empty_category() {
    let err = input("2024-03-01", "   ", "1", "")
        .into_transaction()
        .unwrap_err();
    assert!(err.to_string().contains("Category cannot be empty"));
}

#[test]
fn test_into_transaction_bad_amount() {
    let err = input("2024-03-01", "Coffee", "four", "")
        .into_transaction()
        .unwrap_err();
    assert!(err.to_string().contains("Invalid amount 'four'"));
}

#[test]
fn test_into_transaction_empty_amount() {
    assert!(input("2024-03-01", "Coffee", "", "")
        .into_transaction()
        .is_err());
}

#[test]
fn test_into_transaction_amount_limit() {
    assert!(input("2024-03-01", "Car", "999999999999999.99", "")
        .into_transaction()
        .is_ok());
    assert!(input("2024-03-01", "Refund", "-999999999999999", "")
        .into_transaction()
        .is_ok());

    let err = input("2024-03-01", "Yacht", "1000000000000000", "")
        .into_transaction()
        .unwrap_err();
    assert!(err.to_string().contains("Amount too large"));
    assert!(input("2024-03-01", "Yacht", "-79228162514264337593543950335", "")
        .into_transaction()
        .is_err());
}

#[test]
fn test_into_transaction_rejects_undecodable_text() {
    let err = input("2024-03-01", "Caf\u{FFFD}", "1", "")
        .into_transaction()
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid input: Category is not valid text.");

    assert!(input("2024-03-01", "Coffee", "1", "\u{FFFD}")
        .into_transaction()
        .is_err());
}

#[test]
fn test_into_transaction_long_category() {
    let err = input("2024-03-01", &"x".repeat(50), "1", "")
        .into_transaction()
        .unwrap_err();
    assert!(err.to_string().contains("Category must be at most 49"));
}

#[test]
fn test_into_transaction_long_description() {
    let ok = input("2024-03-01", "Coffee", "1", &"d".repeat(99)).into_transaction();
    assert!(ok.is_ok());

    let err = input("2024-03-01", "Coffee", "1", &"d".repeat(100))
        .into_transaction()
        .unwrap_err();
    assert!(err.to_string().contains("Description must be at most 99"));
}

#[test]
fn test_into_transaction_keeps_description_spacing() {
    let txn = input("2024-03-01", "Coffee", "1", "  oat milk ")
        .into_transaction()
        .unwrap();
    assert_eq!(txn.description, "  oat milk ");
}
