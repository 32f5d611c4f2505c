//! Row filtering and projection into service records.

use std::collections::BTreeMap;

use csv::StringRecord;
use tracing::{debug, info};

use namesgen_model::{ServiceRecord, ServiceSet};

use crate::error::{IngestError, Result};
use crate::reader::CsvRows;
use crate::schema::ResolvedColumns;

/// Options for [`map_rows`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapOptions {
    /// Let duplicate constant names through instead of failing.
    pub allow_duplicates: bool,
}

/// Outcome of inspecting one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowDecision {
    /// Row becomes a constant.
    Accept(ServiceRecord),
    /// Exclude flag is set.
    Excluded,
    /// Package identifier is empty.
    MissingPackage,
    /// Row has fewer fields than the referenced columns need.
    Short { actual: usize },
}

/// Decides whether a row is generated.
///
/// A row is accepted iff its exclude field is empty and its package field is
/// not. Field values are copied verbatim.
pub fn classify_row(record: &StringRecord, columns: &ResolvedColumns) -> RowDecision {
    let (Some(package), Some(name_upper), Some(exclude)) = (
        record.get(columns.package),
        record.get(columns.name_upper),
        record.get(columns.exclude),
    ) else {
        return RowDecision::Short {
            actual: record.len(),
        };
    };

    if !exclude.is_empty() {
        return RowDecision::Excluded;
    }
    if package.is_empty() {
        return RowDecision::MissingPackage;
    }
    RowDecision::Accept(ServiceRecord::new(name_upper, package))
}

/// Filters the data rows of `rows` into a [`ServiceSet`].
///
/// The header row is skipped by position. Short rows and, unless allowed,
/// duplicate names are fatal.
pub fn map_rows(
    rows: &CsvRows,
    columns: &ResolvedColumns,
    options: &MapOptions,
) -> Result<ServiceSet> {
    let mut services = ServiceSet::new();
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    let mut skipped = 0usize;

    for (row, record) in rows.data_rows() {
        match classify_row(record, columns) {
            RowDecision::Accept(service) => {
                if let Some(&first_row) = seen.get(&service.provider_name_upper) {
                    if !options.allow_duplicates {
                        return Err(IngestError::DuplicateIdentifier {
                            path: rows.path().to_path_buf(),
                            name: service.provider_name_upper,
                            first_row,
                            row,
                        });
                    }
                    debug!(
                        row,
                        first_row,
                        name = %service.provider_name_upper,
                        "duplicate identifier allowed"
                    );
                } else {
                    seen.insert(service.provider_name_upper.clone(), row);
                }
                services.push(row, service);
            }
            RowDecision::Excluded => {
                debug!(row, reason = "exclude flag set", "skipping row");
                skipped += 1;
            }
            RowDecision::MissingPackage => {
                debug!(row, reason = "empty package identifier", "skipping row");
                skipped += 1;
            }
            RowDecision::Short { actual } => {
                return Err(IngestError::ShortRow {
                    path: rows.path().to_path_buf(),
                    row,
                    expected: columns.required_width(),
                    actual,
                });
            }
        }
    }

    info!(accepted = services.len(), skipped, "filtered service rows");
    Ok(services)
}
