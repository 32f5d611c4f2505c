//! Resolution of the columns the generator reads.

use namesgen_model::columns::{self, Column};

use crate::error::{IngestError, Result};
use crate::reader::CsvRows;

/// How the package, name and exclude columns are located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Look the columns up in the header row.
    ByName {
        package: String,
        name_upper: String,
        exclude: String,
    },
    /// Use fixed positions; the header row is not inspected.
    ByIndex {
        package: usize,
        name_upper: usize,
        exclude: usize,
    },
}

impl Default for ColumnSelector {
    fn default() -> Self {
        Self::by_name()
    }
}

impl ColumnSelector {
    /// Header-name lookup with the standard column names.
    pub fn by_name() -> Self {
        Self::ByName {
            package: columns::PROVIDER_PACKAGE_BOTH.name.to_string(),
            name_upper: columns::PROVIDER_NAME_UPPER.name.to_string(),
            exclude: columns::EXCLUDE.name.to_string(),
        }
    }

    /// The legacy positional layout (6, 7, 13).
    pub fn positional() -> Self {
        Self::ByIndex {
            package: columns::PROVIDER_PACKAGE_BOTH.index,
            name_upper: columns::PROVIDER_NAME_UPPER.index,
            exclude: columns::EXCLUDE.index,
        }
    }

    /// Resolves the selector against the header row of `rows`.
    pub fn resolve(&self, rows: &CsvRows) -> Result<ResolvedColumns> {
        match self {
            Self::ByIndex {
                package,
                name_upper,
                exclude,
            } => Ok(ResolvedColumns {
                package: *package,
                name_upper: *name_upper,
                exclude: *exclude,
            }),
            Self::ByName {
                package,
                name_upper,
                exclude,
            } => {
                let headers: Vec<&str> = rows.header().iter().map(normalize_header).collect();
                let find = |name: &str| {
                    headers
                        .iter()
                        .position(|header| *header == name)
                        .ok_or_else(|| IngestError::MissingColumn {
                            column: name.to_string(),
                            path: rows.path().to_path_buf(),
                        })
                };
                let resolved = ResolvedColumns {
                    package: find(package)?,
                    name_upper: find(name_upper)?,
                    exclude: find(exclude)?,
                };
                log_moved_columns(&resolved);
                Ok(resolved)
            }
        }
    }
}

/// Positions of the three columns the filter reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub package: usize,
    pub name_upper: usize,
    pub exclude: usize,
}

impl ResolvedColumns {
    /// Minimum number of fields a row needs.
    pub fn required_width(&self) -> usize {
        self.package.max(self.name_upper).max(self.exclude) + 1
    }
}

fn normalize_header(value: &str) -> &str {
    value.trim_matches('\u{feff}').trim()
}

fn log_moved_columns(resolved: &ResolvedColumns) {
    let pairs: [(Column, usize); 3] = [
        (columns::PROVIDER_PACKAGE_BOTH, resolved.package),
        (columns::PROVIDER_NAME_UPPER, resolved.name_upper),
        (columns::EXCLUDE, resolved.exclude),
    ];
    for (column, index) in pairs {
        if column.index != index {
            tracing::debug!(
                column = column.name,
                expected = column.index,
                actual = index,
                "column moved from legacy position"
            );
        }
    }
}
