//! Loading response tables from disk.
//!
//! Callers depend on [`TableReader`] only; each backing library gets its own
//! adapter.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use crate::error::{CogexError, Result};
use crate::table::{Cell, ResponseTable};

/// Opens a file and returns its content as a [`ResponseTable`].
pub trait TableReader {
    fn open(&self, path: &Path) -> Result<ResponseTable>;
}

/// Spreadsheet workbooks (xlsx, xlsm, xlsb, xls, ods). Only the first sheet
/// is read; its first row is the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkbookReader;

impl TableReader for WorkbookReader {
    fn open(&self, path: &Path) -> Result<ResponseTable> {
        let mut workbook = open_workbook_auto(path)?;
        let sheet = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| CogexError::NoSheets {
                path: path.to_path_buf(),
            })?;
        let range = workbook.worksheet_range(&sheet)?;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .ok_or_else(|| CogexError::EmptyTable {
                path: path.to_path_buf(),
            })?
            .iter()
            .map(|h| match h {
                Data::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        let table = ResponseTable::from_rows(
            headers,
            rows.map(|row| row.iter().map(cell_from_data).collect::<Vec<_>>()),
        );
        debug!(path = %path.display(), %sheet, rows = table.n_rows(), "read workbook sheet");
        Ok(table)
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Missing,
        Data::Int(v) => Cell::Int(*v),
        Data::Float(v) => Cell::Float(*v),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) if s.is_empty() => Cell::Missing,
        Data::String(s) => Cell::Text(s.clone()),
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        other => Cell::Text(other.to_string()),
    }
}

/// Headered delimited text (csv, tsv).
#[derive(Debug, Clone, Copy)]
pub struct DelimitedReader {
    pub delimiter: u8,
}

impl Default for DelimitedReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl TableReader for DelimitedReader {
    fn open(&self, path: &Path) -> Result<ResponseTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_path(path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        if headers.is_empty() {
            return Err(CogexError::EmptyTable {
                path: path.to_path_buf(),
            });
        }
        let rows = reader
            .records()
            .map(|record| -> Result<Vec<Cell>> { Ok(record?.iter().map(parse_field).collect()) })
            .collect::<Result<Vec<_>>>()?;
        let table = ResponseTable::from_rows(headers, rows);
        debug!(path = %path.display(), rows = table.n_rows(), "read delimited table");
        Ok(table)
    }
}

fn parse_field(field: &str) -> Cell {
    let field = field.trim();
    match field {
        "" | "NA" | "N/A" | "NaN" | "nan" | "null" => Cell::Missing,
        "True" | "true" | "TRUE" => Cell::Bool(true),
        "False" | "false" | "FALSE" => Cell::Bool(false),
        _ => field
            .parse::<i64>()
            .map(Cell::Int)
            .or_else(|_| field.parse::<f64>().map(Cell::Float))
            .unwrap_or_else(|_| Cell::Text(field.to_string())),
    }
}

/// Chooses the adapter from the extension of each path it opens.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionReader;

impl TableReader for ExtensionReader {
    fn open(&self, path: &Path) -> Result<ResponseTable> {
        reader_for_path(path)?.open(path)
    }
}

/// Picks a reader from the file extension.
pub fn reader_for_path(path: &Path) -> Result<Box<dyn TableReader>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Ok(Box::new(WorkbookReader)),
        Some("csv") => Ok(Box::new(DelimitedReader::default())),
        Some("tsv" | "tab") => Ok(Box::new(DelimitedReader { delimiter: b'\t' })),
        _ => Err(CogexError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
