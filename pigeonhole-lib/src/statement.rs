use std::{
    fs::File,
    io::{Cursor, Read},
    path::Path,
};

use calamine::{Data, Reader};
use derive_more::{From, Into};
use displaydoc::Display;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Display)]
pub enum Error {
    /// io: {0}
    Io(#[from] std::io::Error),
    /// csv: {0}
    Csv(#[from] csv::Error),
    /// spreadsheet: {0}
    Spreadsheet(#[from] calamine::Error),
    /// workbook has no sheets
    NoSheets,
    /// statement has no rows
    Empty,
}

/// One record of the bank statement: ordered column values as text
#[derive(Debug, Clone, Default, PartialEq, From, Into, Serialize)]
pub struct Row {
    pub columns: Vec<String>,
}

impl Row {
    /// Column value by zero-based index, if the row is long enough
    pub fn column(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }
}

/// A bank statement: the header row plus the data rows in source order
///
/// Row 0 of the input is strictly the header. It is kept for reference and
/// never categorized or aggregated.
#[derive(Debug, Clone)]
pub struct Statement {
    /// Row 0 of the input
    pub header: Row,
    /// Data rows in source order
    pub rows: Vec<Row>,
}

impl Statement {
    /// Create a new statement from already-parsed rows, header first
    pub fn from_rows(rows: Vec<Row>) -> Result<Self, Error> {
        let mut rows = rows.into_iter();
        let header = rows.next().ok_or(Error::Empty)?;
        Ok(Self {
            header,
            rows: rows.collect(),
        })
    }

    /// Read a statement, picking the reader by file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let spreadsheet = path.extension().map_or(false, |extension| {
            extension.eq_ignore_ascii_case("xlsx") || extension.eq_ignore_ascii_case("xls")
        });
        if spreadsheet {
            Self::from_xlsx_file(path)
        } else {
            Self::from_csv_file(path)
        }
    }

    /// Read a statement from the first sheet of a workbook
    pub fn from_xlsx_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut workbook = calamine::open_workbook_auto(path)?;
        let sheet = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(Error::NoSheets)?;
        let range = workbook.worksheet_range(&sheet)?;
        let rows = range
            .rows()
            .map(|cells| Row::from(cells.iter().map(cell_text).collect::<Vec<_>>()))
            .collect();
        Self::from_rows(rows)
    }

    /// Read a statement from a csv file
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?)
    }

    /// Read a statement from a csv buffer
    pub fn from_csv_buffer<B: AsRef<[u8]>>(buffer: B) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(buffer))
    }

    /// Read a statement from a csv reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(Row::from(
                record.iter().map(String::from).collect::<Vec<_>>(),
            ));
        }
        Self::from_rows(rows)
    }
}

/// Render a workbook cell as text
///
/// Strings as-is, booleans as `true`/`false`, numbers as their decimal
/// form, anything else as the empty string.
pub(crate) fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.clone(),
        Data::Bool(value) => value.to_string(),
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        _ => String::new(),
    }
}
