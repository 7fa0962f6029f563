use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor, Read},
    path::Path,
};

use derive_more::{From, Into};
use displaydoc::Display;
use serde::Serialize;
use thiserror::Error;

/// Marker prefixing comment lines in the category config
pub const COMMENT_MARKER: &str = "//";

/// Categories used when no config file is given
const BUILTIN: &[&[&str]] = &[
    &["STARBUCKS", "COFFEE"],
    &["CHEVRON", "SHELL", "PETROL"],
    &["MAYURI", "SAFEWAY", "GROCERY"],
    &["RENT", "LEASE"],
    &["NETFLIX", "SPOTIFY"],
];

#[derive(Error, Debug, Display)]
pub enum Error {
    /// io: {0}
    Io(#[from] std::io::Error),
    /// category config line {0} has no keywords
    EmptyCategory(usize),
}

/// A spending bucket, identified by the keywords that pull expenses into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Keywords matched against the description column
    pub keywords: Vec<String>,
}

impl Category {
    /// Check if a description falls in this category
    ///
    /// True when the description contains any of the keywords as a
    /// substring, ignoring case.
    pub fn matches(&self, description: &str) -> bool {
        let description = description.to_uppercase();
        self.keywords
            .iter()
            .any(|keyword| description.contains(&keyword.to_uppercase()))
    }
}

/// Ordered collection of categories for a run
#[derive(Debug, Clone, Default, From, Into, Serialize)]
pub struct CategorySet {
    pub categories: Vec<Category>,
}

impl CategorySet {
    /// Create a new category set from a line-oriented config file
    pub fn from_text_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?)
    }

    /// Create a new category set from a line-oriented config buffer
    pub fn from_text_buffer<B: AsRef<[u8]>>(buffer: B) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(buffer))
    }

    /// Create a new category set from a reader
    ///
    /// One category per line, keywords comma-separated. Blank lines and
    /// lines starting with `//` are skipped. A remaining line with no
    /// keywords is rejected.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let reader = BufReader::new(reader);
        let mut categories = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }
            let keywords = line
                .split(',')
                .map(str::trim)
                .filter(|keyword| !keyword.is_empty())
                .map(String::from)
                .collect::<Vec<_>>();
            if keywords.is_empty() {
                return Err(Error::EmptyCategory(index + 1));
            }
            categories.push(Category { keywords });
        }
        Ok(Self { categories })
    }

    /// The hardcoded fallback category table
    pub fn builtin() -> Self {
        BUILTIN
            .iter()
            .map(|keywords| Category {
                keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
            })
            .collect::<Vec<_>>()
            .into()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
