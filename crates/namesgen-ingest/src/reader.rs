//! CSV reading into a fully materialized row set.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

/// All rows of a CSV file in file order, header first.
#[derive(Debug, Clone)]
pub struct CsvRows {
    path: PathBuf,
    rows: Vec<StringRecord>,
}

impl CsvRows {
    /// Path the rows were read from (used in diagnostics).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The header row.
    pub fn header(&self) -> &StringRecord {
        // read_rows rejects empty input, so row 0 always exists
        &self.rows[0]
    }

    /// Data rows with their 1-based row number (the header is row 1).
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &StringRecord)> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(idx, record)| (idx + 1, record))
    }

    /// Total number of rows including the header.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a value returned by [`read_rows`].
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads every row of the CSV file at `path`.
///
/// The file is released before returning. Field counts must be consistent
/// across rows; the csv parser reports anything else as a parse error.
pub fn read_rows(path: &Path) -> Result<CsvRows> {
    let file = File::open(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows_from_reader(file, path)
}

/// Reads every row from `reader`; `path` labels errors.
///
/// Quotes must balance within each record: an unterminated quoted field or a
/// bare `"` is a parse error.
pub fn read_rows_from_reader<R: Read>(mut reader: R, path: &Path) -> Result<CsvRows> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(data.as_slice());

    let mut rows = Vec::new();
    let mut starts = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| csv_error(path, err))?;
        starts.push(record.position().map_or(0, csv::Position::byte));
        rows.push(record);
    }
    check_quotes(&data, &starts, path)?;

    let Some(header) = rows.first_mut() else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    strip_bom(header);

    tracing::debug!(path = %path.display(), rows = rows.len(), "read csv rows");
    Ok(CsvRows {
        path: path.to_path_buf(),
        rows,
    })
}

/// Fails on the first record whose raw bytes hold an odd number of quotes.
///
/// The csv parser closes a quoted field at end of input without complaint, so
/// this is the only place an unterminated final field shows up.
fn check_quotes(data: &[u8], starts: &[u64], path: &Path) -> Result<()> {
    for (idx, start) in starts.iter().enumerate() {
        let end = starts.get(idx + 1).copied().unwrap_or(data.len() as u64);
        let raw = usize::try_from(*start)
            .ok()
            .zip(usize::try_from(end).ok())
            .and_then(|(start, end)| data.get(start..end))
            .unwrap_or_default();
        let quotes = raw.iter().filter(|byte| **byte == b'"').count();
        if quotes % 2 != 0 {
            return Err(IngestError::CsvParse {
                path: path.to_path_buf(),
                message: format!("record {}: extraneous or missing \" in quoted-field", idx + 1),
            });
        }
    }
    Ok(())
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}

fn strip_bom(record: &mut StringRecord) {
    let has_bom = record
        .get(0)
        .is_some_and(|field| field.starts_with('\u{feff}'));
    if !has_bom {
        return;
    }
    let fields: Vec<String> = record
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            if idx == 0 {
                field.trim_start_matches('\u{feff}').to_string()
            } else {
                field.to_string()
            }
        })
        .collect();
    *record = StringRecord::from(fields);
}
