//! Tabular data: CSV files and in-memory records.

mod data;
mod reader;

pub use data::Table;
pub use reader::{read_headers, read_table};
