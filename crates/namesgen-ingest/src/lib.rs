//! Service name data ingestion.
//!
//! Reads `names_data.csv`, resolves the columns the generator needs and turns
//! accepted rows into [`ServiceSet`](namesgen_model::ServiceSet) records.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use namesgen_ingest::{ColumnSelector, MapOptions, map_rows, read_rows};
//!
//! let rows = read_rows(Path::new("names_data.csv"))?;
//! let columns = ColumnSelector::default().resolve(&rows)?;
//! let services = map_rows(&rows, &columns, &MapOptions::default())?;
//! println!("{} services", services.len());
//! # Ok::<(), namesgen_ingest::IngestError>(())
//! ```

mod error;
mod mapper;
mod reader;
mod schema;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{CsvRows, read_rows, read_rows_from_reader};

// === Column Resolution ===
pub use schema::{ColumnSelector, ResolvedColumns};

// === Row Filtering ===
pub use mapper::{MapOptions, RowDecision, classify_row, map_rows};
