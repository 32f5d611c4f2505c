//! Data model for the service name constant generator.
//!
//! - [`ServiceRecord`]: one accepted row of `names_data.csv`
//! - [`ServiceSet`]: accepted records in input order, with source row numbers
//! - [`columns`]: header names and legacy positions of the shared CSV schema

pub mod columns;
pub mod record;

pub use record::{ServiceRecord, ServiceSet, SourcedRecord};
