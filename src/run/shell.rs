use anyhow::Result;
use std::io::{BufRead, Write};

use super::prompt::{parse_selection, Selection, TransactionInput};
use crate::db::Database;
use crate::models::MenuChoice;
use crate::ui::util::{format_amount, table_header, table_row, table_rule};

const GOODBYE: &str = "Exiting SocketMoney. Goodbye!";

/// The three streams the shell talks through: user input, normal output, diagnostics.
pub(crate) struct Console<R, W, E> {
    pub(crate) input: R,
    pub(crate) out: W,
    pub(crate) err: E,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub(crate) fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    /// Read one full line without its line ending. `None` at end of input.
    /// Bytes that are not UTF-8 become U+FFFD so callers can reject them.
    pub(crate) fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.read_line()
    }
}

pub(crate) fn run_menu<R: BufRead, W: Write, E: Write>(
    db: &Database,
    console: &mut Console<R, W, E>,
) -> Result<()> {
    loop {
        print_menu(console)?;

        let Some(line) = console.read_line()? else {
            // stdin closed
            writeln!(console.out)?;
            writeln!(console.out, "{GOODBYE}")?;
            return Ok(());
        };

        match parse_selection(&line) {
            Selection::Choice(MenuChoice::Add) => add_transaction(db, console)?,
            Selection::Choice(MenuChoice::List) => view_transactions(db, console)?,
            Selection::Choice(MenuChoice::Total) => view_total(db, console)?,
            Selection::Choice(MenuChoice::Exit) => {
                writeln!(console.out, "{GOODBYE}")?;
                return Ok(());
            }
            Selection::OutOfRange => writeln!(
                console.out,
                "Invalid choice. Please select a number between 1 and 4."
            )?,
            Selection::NotANumber => writeln!(
                console.out,
                "Invalid input. Please enter a number between 1 and 4."
            )?,
        }
    }
}

fn print_menu<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> Result<()> {
    writeln!(console.out)?;
    writeln!(console.out, "--- SocketMoney Finance Tool ---")?;
    for choice in MenuChoice::all() {
        writeln!(console.out, "{choice}")?;
    }
    write!(console.out, "Select an option (1-4): ")?;
    console.out.flush()?;
    Ok(())
}

fn add_transaction<R: BufRead, W: Write, E: Write>(
    db: &Database,
    console: &mut Console<R, W, E>,
) -> Result<()> {
    writeln!(console.out)?;
    writeln!(console.out, "--- Add New Transaction ---")?;

    let Some(input) = collect_transaction_input(console)? else {
        writeln!(console.out)?;
        writeln!(console.out, "Input closed. Transaction not added.")?;
        return Ok(());
    };

    let txn = match input.into_transaction() {
        Ok(txn) => txn,
        Err(e) => {
            writeln!(console.out, "{e:#}")?;
            return Ok(());
        }
    };

    match db.insert_transaction(&txn) {
        Ok(id) => writeln!(console.out, "Transaction added successfully! (ID {id})")?,
        Err(e) => writeln!(console.err, "ERROR: Failed to add transaction: {e:#}")?,
    }
    Ok(())
}

fn collect_transaction_input<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
) -> Result<Option<TransactionInput>> {
    let today = chrono::Local::now().format("%Y-%m-%d");
    let Some(date) = console.prompt(&format!("Date (YYYY-MM-DD, today is {today}): "))? else {
        return Ok(None);
    };
    let Some(category) = console.prompt("Category (e.g. Coffee, Groceries): ")? else {
        return Ok(None);
    };
    let Some(amount) = console.prompt("Transaction Amount: ")? else {
        return Ok(None);
    };
    let Some(description) = console.prompt("Description: ")? else {
        return Ok(None);
    };
    Ok(Some(TransactionInput {
        date,
        category,
        amount,
        description,
    }))
}

fn view_transactions<R: BufRead, W: Write, E: Write>(
    db: &Database,
    console: &mut Console<R, W, E>,
) -> Result<()> {
    let txns = match db.get_transactions() {
        Ok(txns) => txns,
        Err(e) => {
            writeln!(console.err, "ERROR: Failed to load transactions: {e:#}")?;
            return Ok(());
        }
    };

    writeln!(console.out)?;
    writeln!(console.out, "{}", table_header())?;
    writeln!(console.out, "{}", table_rule())?;
    for txn in &txns {
        writeln!(console.out, "{}", table_row(txn))?;
    }
    if txns.is_empty() {
        writeln!(console.out, "No transactions yet.")?;
    }
    Ok(())
}

fn view_total<R: BufRead, W: Write, E: Write>(
    db: &Database,
    console: &mut Console<R, W, E>,
) -> Result<()> {
    let totals = db
        .get_total_spending()
        .and_then(|total| Ok((total, db.get_transaction_count()?)));
    let (total, count) = match totals {
        Ok(t) => t,
        Err(e) => {
            writeln!(console.err, "ERROR: Failed to calculate total: {e:#}")?;
            return Ok(());
        }
    };

    writeln!(console.out)?;
    if count == 0 {
        writeln!(
            console.out,
            "Total Spending: {} (no transactions yet)",
            format_amount(total)
        )?;
    } else {
        writeln!(console.out, "Total Spending: {}", format_amount(total))?;
    }
    Ok(())
}
