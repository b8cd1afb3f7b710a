//! Tabular input for OED validation.
//!
//! Reads CSV header lines and rows from disk and wraps in-memory rows as
//! [`Record`]s. Missing cells are `None`; reader failures are [`IngestError`]s.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use oed_ingest::{read_headers, read_table};
//!
//! let headers = read_headers(Path::new("SourceLocOEDPiWind.csv"))?;
//! let table = read_table(Path::new("SourceLocOEDPiWind.csv"))?;
//! let tivs = table.column_values("BuildingTIV");
//! ```

mod error;
mod record;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Rows ===
pub use record::Record;

// === CSV Reading ===
pub use table::{Table, read_headers, read_table};
