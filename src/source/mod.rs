//! Data sources the grid pulls rows from.
//!
//! The grid only ever talks to the [`TableSource`] trait; the CSV
//! implementation lives behind the `csv` feature and tests substitute
//! their own sources (or the `mockall` mock behind `test-mocks`).

#[cfg(feature = "csv")]
pub mod csv;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

use crate::domain::table::TableData;
use crate::filter::FilterParams;
use crate::source::errors::SourceResult;

/// A tabular data source.
pub trait TableSource {
    /// Fetches the rows passing `filter`, plus the column names.
    ///
    /// Implementations apply the filter themselves so sources that can
    /// filter natively are free to do so before materializing rows.
    fn fetch(&self, filter: &FilterParams) -> SourceResult<TableData>;
}
