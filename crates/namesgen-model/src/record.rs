//! Service records produced by the row filter.

use serde::Serialize;

/// One generated constant: identifier and string value.
///
/// Serialized field names are the ones the output template refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    #[serde(rename = "ProviderNameUpper")]
    pub provider_name_upper: String,
    #[serde(rename = "ProviderPackage")]
    pub provider_package: String,
}

impl ServiceRecord {
    pub fn new(
        provider_name_upper: impl Into<String>,
        provider_package: impl Into<String>,
    ) -> Self {
        Self {
            provider_name_upper: provider_name_upper.into(),
            provider_package: provider_package.into(),
        }
    }
}

/// A record together with the 1-based CSV row it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedRecord {
    pub row: usize,
    pub record: ServiceRecord,
}

/// Accepted records in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceSet {
    entries: Vec<SourcedRecord>,
}

impl ServiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record read from `row`. Order of insertion is kept.
    pub fn push(&mut self, row: usize, record: ServiceRecord) {
        self.entries.push(SourcedRecord { row, record });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates records in input order.
    pub fn records(&self) -> impl Iterator<Item = &ServiceRecord> {
        self.entries.iter().map(|entry| &entry.record)
    }

    pub fn entries(&self) -> &[SourcedRecord] {
        &self.entries
    }

    /// Returns the source row of the first record named `name`.
    pub fn row_of(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.record.provider_name_upper == name)
            .map(|entry| entry.row)
    }
}

impl FromIterator<(usize, ServiceRecord)> for ServiceSet {
    fn from_iter<I: IntoIterator<Item = (usize, ServiceRecord)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (row, record) in iter {
            set.push(row, record);
        }
        set
    }
}
