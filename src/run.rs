mod prompt;
mod shell;

use anyhow::Result;
use std::io;

use crate::db::Database;

pub(crate) use shell::{run_menu, Console};

pub(crate) fn as_shell(db: &Database) -> Result<()> {
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), io::stderr());
    run_menu(db, &mut console)
}

#[cfg(test)]
mod prompt_tests;
