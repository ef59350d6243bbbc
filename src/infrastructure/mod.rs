pub mod bank_queries;
pub mod bank_writer;
pub mod sqlite;

pub use bank_writer::BankWriter;
pub use sqlite::{open_database, open_memory_database};
