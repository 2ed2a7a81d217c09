//! Column filters applied to rows before pagination.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::table::Record;

/// A set of column filters. Every entry must match for a row to pass.
///
/// Matching is case-insensitive. When both the cell and the filter value
/// parse as numbers they are compared numerically (so `"5"` matches
/// `"5.0"`); otherwise the filter value must be a substring of the cell.
/// Rows missing a filtered column never match.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterParams(HashMap<String, String>);

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of one column filter.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(column.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Tests a single row against all filters.
    pub fn matches(&self, row: &Record) -> bool {
        self.0.iter().all(|(column, wanted)| {
            let Some(cell) = row.get(column) else {
                return false;
            };
            let cell = cell.to_lowercase();
            let wanted = wanted.to_lowercase();
            match (cell.trim().parse::<f64>(), wanted.trim().parse::<f64>()) {
                (Ok(cell_num), Ok(wanted_num)) => cell_num == wanted_num,
                _ => cell.contains(&wanted),
            }
        })
    }

    /// Keeps only the rows that pass all filters.
    pub fn apply(&self, rows: Vec<Record>) -> Vec<Record> {
        if self.is_empty() {
            return rows;
        }
        rows.into_iter().filter(|row| self.matches(row)).collect()
    }
}

impl FromIterator<(String, String)> for FilterParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
