use displaydoc::Display;
use serde::Serialize;
use thiserror::Error;

use crate::{
    category::Category,
    categorizer::Assignment,
    config::ColumnLayout,
    statement::Row,
};

#[derive(Error, Debug, Display)]
pub enum Error {
    /// amount {0:?} is not a number
    MalformedAmount(String),
    /// row has {len} columns, amount column is {index}
    RowTooShort { len: usize, index: usize },
}

/// One assigned row with its parsed amount
#[derive(Debug, Clone, Serialize)]
pub struct Expense {
    pub row: Row,
    pub amount: f64,
}

/// One category's share of the statement: its rows and their summed amount
#[derive(Debug, Clone, Serialize)]
pub struct Breakdown {
    pub category: Category,
    pub expenses: Vec<Expense>,
    pub subtotal: f64,
}

/// Sum the amount column per category, in category load order
///
/// A category with no rows keeps a zero subtotal and stays in the result.
/// A malformed amount aborts the run.
pub fn aggregate(assignment: &Assignment, layout: &ColumnLayout) -> Result<Vec<Breakdown>, Error> {
    assignment
        .assigned
        .iter()
        .map(|entry| {
            let expenses = entry
                .rows
                .iter()
                .map(|row| {
                    Ok(Expense {
                        row: row.clone(),
                        amount: parse_amount(row, layout)?,
                    })
                })
                .collect::<Result<Vec<_>, Error>>()?;
            let subtotal = expenses.iter().map(|expense| expense.amount).sum();
            Ok(Breakdown {
                category: entry.category.clone(),
                expenses,
                subtotal,
            })
        })
        .collect()
}

fn parse_amount(row: &Row, layout: &ColumnLayout) -> Result<f64, Error> {
    let text = row.column(layout.amount).ok_or(Error::RowTooShort {
        len: row.columns.len(),
        index: layout.amount,
    })?;
    text.trim()
        .parse()
        .map_err(|_| Error::MalformedAmount(text.to_string()))
}
