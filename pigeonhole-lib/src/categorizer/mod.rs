use displaydoc::Display;
use serde::{Deserialize, Serialize};
use strum::EnumString;
use thiserror::Error;

use crate::{category::CategorySet, config::ColumnLayout, statement::Statement};

pub use assignment::*;

mod assignment;

#[derive(Error, Debug, Display)]
pub enum Error {
    /// row {row} has {len} columns, description column is {index}
    RowTooShort { row: usize, len: usize, index: usize },
}

/// Whether a row may be assigned to more than one category
#[derive(Clone, Copy, Debug, Default, Deserialize, EnumString, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchPolicy {
    /// Assign to the first matching category only, in load order
    First,
    /// Assign to every matching category
    #[default]
    All,
}

/// Assigns statement rows to categories by keyword containment
#[derive(Debug, Clone, Default)]
pub struct Categorizer {
    /// Categories in load order
    pub categories: CategorySet,
    /// Whether a row may land in several categories
    pub match_policy: MatchPolicy,
}

impl Categorizer {
    pub fn new(categories: CategorySet, match_policy: MatchPolicy) -> Self {
        Self {
            categories,
            match_policy,
        }
    }

    /// Assign every data row to the categories whose keywords match
    ///
    /// Categories are tested in load order. Every category appears in the
    /// assignment, matched or not. Rows that match nothing are dropped and
    /// only counted.
    pub fn categorize(
        &self,
        statement: &Statement,
        layout: &ColumnLayout,
    ) -> Result<Assignment, Error> {
        let mut assigned = self
            .categories
            .iter()
            .map(|category| AssignedCategory {
                category: category.clone(),
                rows: Vec::new(),
            })
            .collect::<Vec<_>>();
        let mut unmatched = 0;
        for (index, row) in statement.rows.iter().enumerate() {
            let description = row.column(layout.description).ok_or(Error::RowTooShort {
                row: index + 1,
                len: row.columns.len(),
                index: layout.description,
            })?;
            let mut matched = false;
            for entry in assigned.iter_mut() {
                if entry.category.matches(description) {
                    entry.rows.push(row.clone());
                    matched = true;
                    if self.match_policy == MatchPolicy::First {
                        break;
                    }
                }
            }
            if !matched {
                unmatched += 1;
            }
        }
        Ok(Assignment { assigned, unmatched })
    }
}
