mod db;
mod models;
mod run;
mod ui;

use anyhow::{Context, Result};
use std::path::PathBuf;

const DB_FILE_NAME: &str = "socketmoney.db";

fn main() -> Result<()> {
    let db_path = db_path();
    let db = db::Database::open(&db_path).context("CRITICAL: Can't open database")?;
    run::as_shell(&db)?;
    // Dropping the handle closes the connection.
    drop(db);
    Ok(())
}

fn db_path() -> PathBuf {
    PathBuf::from(DB_FILE_NAME)
}
