//! Service layer gluing a table source to the pagination engine.
//!
//! [`DataGrid`] performs one fetch → filter → paginate cycle and returns a
//! fresh [`Paginated`] snapshot. [`GridSession`] holds the caller-side
//! state between cycles (current query, last good snapshot) and enforces a
//! latest-request-wins policy: every load is tagged with the query that
//! triggered it, and completions carrying an outdated tag are discarded so
//! a slow older fetch can never overwrite a newer page.

use thiserror::Error;

use crate::domain::table::Record;
use crate::filter::FilterParams;
use crate::navigation::{NavTarget, resolve_target};
use crate::pagination::{
    ButtonToken, DEFAULT_ITEMS_PER_PAGE, LayoutParams, Paginated, PaginationEngine,
    PaginationError,
};
use crate::source::TableSource;
use crate::source::errors::SourceError;

/// Errors surfaced by the grid service.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("pagination error: {0}")]
    Pagination(#[from] PaginationError),

    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// The session moved on to a newer query while this load was in
    /// flight; the completion was discarded.
    #[error("stale request discarded")]
    StaleRequest,
}

pub type GridResult<T> = Result<T, GridError>;

/// One pagination request: page, limit, and the active column filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridQuery {
    pub page: usize,
    pub limit: usize,
    pub filter: FilterParams,
}

impl GridQuery {
    pub fn new() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_ITEMS_PER_PAGE,
            filter: FilterParams::new(),
        }
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn filter(mut self, filter: FilterParams) -> Self {
        self.filter = filter;
        self
    }
}

impl Default for GridQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies one load request so late completions can be recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTag(GridQuery);

impl From<&GridQuery> for RequestTag {
    fn from(query: &GridQuery) -> Self {
        Self(query.clone())
    }
}

/// Fetches, filters, and paginates rows from a [`TableSource`].
#[derive(Clone, Debug)]
pub struct DataGrid<S> {
    source: S,
    engine: PaginationEngine,
}

impl<S: TableSource> DataGrid<S> {
    pub fn new(source: S, layout: LayoutParams) -> Self {
        Self {
            source,
            engine: PaginationEngine::new(layout),
        }
    }

    pub fn engine(&self) -> &PaginationEngine {
        &self.engine
    }

    /// Runs one full cycle for `query` and returns the snapshot.
    pub fn load_page(&self, query: &GridQuery) -> GridResult<Paginated<Record>> {
        let table = self.source.fetch(&query.filter).map_err(|err| {
            log::error!("Failed to fetch table data: {err}");
            err
        })?;

        let snapshot = self
            .engine
            .paginate(&table.rows, &table.headers, query.page, query.limit)?;
        Ok(snapshot)
    }
}

/// Caller-side pagination state with a latest-request-wins policy.
///
/// Single-threaded by design: all methods take `&mut self`, and the query
/// update in [`begin`](Self::begin) is the single assignment that makes
/// every older in-flight request stale.
#[derive(Clone, Debug, Default)]
pub struct GridSession {
    current: GridQuery,
    snapshot: Option<Paginated<Record>>,
}

impl GridSession {
    pub fn new(query: GridQuery) -> Self {
        Self {
            current: query,
            snapshot: None,
        }
    }

    /// The query the session currently wants displayed.
    pub fn query(&self) -> &GridQuery {
        &self.current
    }

    /// The last successfully applied snapshot, if any.
    pub fn snapshot(&self) -> Option<&Paginated<Record>> {
        self.snapshot.as_ref()
    }

    /// Records `query` as current and returns the tag a load on its behalf
    /// must present when it completes.
    pub fn begin(&mut self, query: GridQuery) -> RequestTag {
        self.current = query;
        RequestTag::from(&self.current)
    }

    /// Applies a completed load.
    ///
    /// A tag that no longer matches the current query means a newer request
    /// superseded this one; the completion is discarded with
    /// [`GridError::StaleRequest`]. A failed load propagates its error and
    /// leaves the previous snapshot visible either way.
    pub fn apply(
        &mut self,
        tag: &RequestTag,
        loaded: GridResult<Paginated<Record>>,
    ) -> GridResult<&Paginated<Record>> {
        if *tag != RequestTag::from(&self.current) {
            log::debug!("Discarding stale pagination response");
            return Err(GridError::StaleRequest);
        }
        let snapshot = loaded?;
        Ok(self.snapshot.insert(snapshot))
    }

    /// Applies a clicked button to the current query.
    ///
    /// Returns the tag for the reload when the click navigates; clicks
    /// that resolve to nothing (ellipsis, absent prev/next) return `None`
    /// and leave the session untouched.
    pub fn navigate(&mut self, token: ButtonToken) -> Option<RequestTag> {
        let snapshot = self.snapshot.as_ref()?;
        match resolve_target(token, snapshot) {
            NavTarget::Go(page) => {
                let query = self.current.clone().page(page);
                Some(self.begin(query))
            }
            NavTarget::Ignore => None,
        }
    }
}
