//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_ON_EACH_SIDE, DEFAULT_ON_ENDS};

#[derive(Clone, Debug, Deserialize)]
/// Settings for the demo table printer.
pub struct GridConfig {
    /// Path of the CSV file to paginate.
    pub csv_path: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_on_ends")]
    pub on_ends: usize,
    #[serde(default = "default_on_each_side")]
    pub on_each_side: usize,
    /// Output format: `html` (default) or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_page_size() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_on_ends() -> usize {
    DEFAULT_ON_ENDS
}

fn default_on_each_side() -> usize {
    DEFAULT_ON_EACH_SIDE
}

fn default_format() -> String {
    "html".to_string()
}
