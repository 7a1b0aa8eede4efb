mod menu;
mod transaction;

pub use menu::MenuChoice;
pub use transaction::Transaction;
