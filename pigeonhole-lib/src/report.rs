use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use derive_more::{From, Into};
use displaydoc::Display;
use serde::{Deserialize, Serialize};
use strum::EnumString;
use thiserror::Error;

use crate::{aggregate::Breakdown, config::ColumnLayout, statement::Row};

/// Column titles of the report header row
pub const HEADER: [&str; 3] = ["Description", "Date", "Amount"];

#[derive(Error, Debug, Display)]
pub enum Error {
    /// io: {0}
    Io(#[from] std::io::Error),
    /// csv: {0}
    Csv(#[from] csv::Error),
    /// row has {len} columns, column {index} is required
    MissingColumn { len: usize, index: usize },
}

/// How a category subtotal is rendered in the report
#[derive(Clone, Copy, Debug, Default, Deserialize, EnumString, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubtotalPolicy {
    /// Full floating point precision
    #[default]
    Exact,
    /// Truncated toward zero to a whole number
    Truncate,
}

impl SubtotalPolicy {
    fn apply(&self, subtotal: f64) -> f64 {
        match self {
            SubtotalPolicy::Exact => subtotal,
            SubtotalPolicy::Truncate => subtotal.trunc(),
        }
    }
}

/// One output cell, typed the way spreadsheet cells are
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    /// Free text
    Text(String),
    /// Numeric value
    Number(f64),
    /// Blank
    Empty,
}

impl Cell {
    /// Cell content as written to a tabular file
    pub fn to_field(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Number(number) => number.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// A rendered report: rows of typed cells ready for a tabular writer
#[derive(Debug, Clone, Default, From, Into, Serialize)]
pub struct Report {
    pub rows: Vec<Vec<Cell>>,
}

impl Report {
    /// Lay out the aggregated result as a grouped statement
    ///
    /// One header row, then for each category in order: one row per
    /// expense, a subtotal row with only the amount cell populated, and a
    /// blank separator row. No grand total.
    pub fn render(
        breakdowns: &[Breakdown],
        layout: &ColumnLayout,
        policy: SubtotalPolicy,
    ) -> Result<Self, Error> {
        let mut rows = vec![HEADER
            .iter()
            .map(|title| Cell::Text(title.to_string()))
            .collect::<Vec<_>>()];
        for breakdown in breakdowns {
            for expense in &breakdown.expenses {
                rows.push(vec![
                    Cell::Text(field(&expense.row, layout.description)?),
                    Cell::Text(field(&expense.row, layout.date)?),
                    Cell::Number(expense.amount),
                ]);
            }
            rows.push(vec![
                Cell::Empty,
                Cell::Empty,
                Cell::Number(policy.apply(breakdown.subtotal)),
            ]);
            rows.push(vec![Cell::Empty, Cell::Empty, Cell::Empty]);
        }
        Ok(Self { rows })
    }

    /// Write the report through a csv writer
    pub fn to_csv_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            writer.write_record(row.iter().map(Cell::to_field))?;
        }
        Ok(writer.flush()?)
    }

    /// Write the report to a csv file
    pub fn write_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        self.to_csv_writer(File::create(path)?)
    }
}

/// Derive the output path: strip the input extension, append the suffix,
/// add the new extension
pub fn output_path<P: AsRef<Path>>(input: P, suffix: &str, extension: &str) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{suffix}.{extension}"))
}

fn field(row: &Row, index: usize) -> Result<String, Error> {
    row.column(index)
        .map(String::from)
        .ok_or(Error::MissingColumn {
            len: row.columns.len(),
            index,
        })
}
