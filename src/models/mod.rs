//! Models backing the demo binary.

pub mod config;
