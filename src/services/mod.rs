// Service exports
pub mod store;

pub use store::{ExpenseStore, LoggedExpense};
