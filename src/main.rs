//! Demo binary: paginate a CSV file and print one page.

use std::env;

use config::Config;
use dotenvy::dotenv;

use simplicity_grid::grid::{DataGrid, GridQuery};
use simplicity_grid::models::config::GridConfig;
use simplicity_grid::pagination::LayoutParams;
use simplicity_grid::render::GridRenderer;
use simplicity_grid::source::csv::CsvSource;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let grid_config = match settings.try_deserialize::<GridConfig>() {
        Ok(grid_config) => grid_config,
        Err(err) => {
            log::error!("Error loading grid config: {err}");
            std::process::exit(1);
        }
    };

    // Requested page comes as the single positional argument.
    let page = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(1);

    let layout = LayoutParams::new(grid_config.on_ends, grid_config.on_each_side);
    let grid = DataGrid::new(CsvSource::new(&grid_config.csv_path), layout);
    let query = GridQuery::new().page(page).limit(grid_config.page_size);

    let snapshot = match grid.load_page(&query) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            log::error!("Failed to load page {page}: {err}");
            std::process::exit(1);
        }
    };

    match grid_config.format.as_str() {
        "json" => match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::error!("Failed to serialize snapshot: {err}");
                std::process::exit(1);
            }
        },
        _ => {
            let renderer = match GridRenderer::new() {
                Ok(renderer) => renderer,
                Err(err) => {
                    log::error!("Failed to build renderer: {err}");
                    std::process::exit(1);
                }
            };
            match renderer.render(&snapshot) {
                Ok(html) => println!("{html}"),
                Err(err) => {
                    log::error!("Failed to render page: {err}");
                    std::process::exit(1);
                }
            }
        }
    }
}
