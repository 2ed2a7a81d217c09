//! Mock table source for isolating the grid service in tests.

use mockall::mock;

use crate::domain::table::TableData;
use crate::filter::FilterParams;
use crate::source::TableSource;
use crate::source::errors::SourceResult;

mock! {
    pub Source {}

    impl TableSource for Source {
        fn fetch(&self, filter: &FilterParams) -> SourceResult<TableData>;
    }
}
