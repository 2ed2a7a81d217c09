//! Data-grid toolkit: fetch delimited-text data into row objects, filter
//! them, paginate them with a windowed button row, and render the result.
//!
//! The heart of the crate is the [`pagination`] module, which turns a result
//! set plus a requested page into an immutable [`pagination::Paginated`]
//! snapshot: the sliced rows, the ordered button row
//! (first/prev/numbers/ellipsis/next/last), and navigation metadata.
//! [`navigation`] maps a clicked button back to a target page, [`filter`]
//! holds the column-filter predicate, [`source`] abstracts where rows come
//! from, and [`grid`] glues everything together with a stale-request guard.

pub mod domain;
pub mod filter;
pub mod grid;
pub mod models;
pub mod navigation;
pub mod pagination;
#[cfg(feature = "render")]
pub mod render;
pub mod source;
