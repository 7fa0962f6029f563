use std::{
    fs::File,
    io::{BufReader, Cursor, Read},
    path::Path,
};

use displaydoc::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{categorizer::MatchPolicy, report::SubtotalPolicy};

#[derive(Error, Debug, Display)]
pub enum Error {
    /// io: {0}
    Io(#[from] std::io::Error),
    /// serde_yaml: {0}
    SerdeYaml(#[from] serde_yaml::Error),
}

/// Zero-based indices of the semantic columns in the input statement
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ColumnLayout {
    /// Amount column
    pub amount: usize,
    /// Description column
    pub description: usize,
    /// Date column
    pub date: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            amount: 4,
            description: 6,
            date: 1,
        }
    }
}

impl ColumnLayout {
    /// Smallest row length that holds every semantic column
    pub fn min_columns(&self) -> usize {
        self.amount.max(self.description).max(self.date) + 1
    }
}

/// Settings for one categorization run
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct RunConfig {
    /// Where the semantic columns live in the input
    pub columns: ColumnLayout,
    /// Whether a row may land in several categories
    pub match_policy: MatchPolicy,
    /// How subtotals are rendered in the report
    pub subtotal_policy: SubtotalPolicy,
    /// Suffix appended to the input file stem to derive the output path
    pub output_suffix: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            columns: ColumnLayout::default(),
            match_policy: MatchPolicy::default(),
            subtotal_policy: SubtotalPolicy::default(),
            output_suffix: "_out".to_string(),
        }
    }
}

impl RunConfig {
    /// Create a new run config from a yaml file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?)
    }

    /// Create a new run config from a yaml buffer
    pub fn from_yaml_buffer<B: AsRef<[u8]>>(buffer: B) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(buffer))
    }

    /// Create a new run config from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let reader = BufReader::new(reader);
        Ok(serde_yaml::from_reader::<_, Self>(reader)?)
    }
}
