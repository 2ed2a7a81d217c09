//! Value types exchanged between sources, the grid, and renderers.

pub mod table;
