use serde::Serialize;

use crate::{category::Category, statement::Row};

/// Rows assigned to one category
#[derive(Debug, Clone, Serialize)]
pub struct AssignedCategory {
    /// The category the rows fell in
    pub category: Category,
    /// Matched rows in source order
    pub rows: Vec<Row>,
}

/// Result of categorizing a statement
///
/// Every category in load order, matched or not, plus the count of rows no
/// category claimed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Assignment {
    pub assigned: Vec<AssignedCategory>,
    pub unmatched: usize,
}
