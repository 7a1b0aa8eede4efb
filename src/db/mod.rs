mod schema;

use anyhow::{Context, Result};
use rusqlite::types::Type;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::Transaction;

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        let db = Self { conn };
        db.ensure_schema()
            .with_context(|| format!("Failed to create schema in {}", path.display()))?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn drop_expenses_table(&self) -> Result<()> {
        self.conn.execute_batch("DROP TABLE expenses")?;
        Ok(())
    }

    fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(schema::SCHEMA)?;
        Ok(())
    }

    // ── Transactions ──────────────────────────────────────────

    pub(crate) fn insert_transaction(&self, txn: &Transaction) -> Result<i64> {
        // The REAL column affinity turns the decimal text into a float.
        self.conn.execute(
            "INSERT INTO expenses (date, category, amount, description)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                txn.date,
                txn.category,
                txn.amount.to_string(),
                txn.description,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All transactions, newest date first. Dates compare as plain text.
    pub(crate) fn get_transactions(&self) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, category, printf('%.15g', amount), description
             FROM expenses
             ORDER BY date DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            let amount_str: String = row.get(3)?;
            Ok(Transaction {
                id: Some(row.get(0)?),
                date: row.get(1)?,
                category: row.get(2)?,
                amount: parse_stored_amount(3, &amount_str)?,
                description: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_transaction_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?)
    }

    /// Sum of every amount, computed by SQLite. An empty table sums to zero.
    pub(crate) fn get_total_spending(&self) -> Result<Decimal> {
        let total: String = self.conn.query_row(
            "SELECT printf('%.15g', COALESCE(SUM(amount), 0)) FROM expenses",
            [],
            |row| row.get(0),
        )?;
        Ok(parse_stored_amount(0, &total)?)
    }
}

/// SQLite renders large or tiny floats in exponent form, which `Decimal::from_str` rejects.
fn parse_stored_amount(idx: usize, s: &str) -> rusqlite::Result<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
