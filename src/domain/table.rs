//! Tabular data as sources deliver it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One row keyed by column name. Columns carry no type information; cells
/// are the raw text the source produced.
pub type Record = HashMap<String, String>;

/// A full result set together with its column names in display order.
///
/// Row maps do not preserve column order, so `headers` is the single
/// source of truth for how columns are laid out.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl TableData {
    pub fn new(headers: Vec<String>, rows: Vec<Record>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
