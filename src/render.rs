//! HTML rendering of paginated snapshots through Tera templates.
//!
//! Produces a self-contained fragment: the table, a row-count indicator,
//! and the pagination button row with the current page marked
//! `page-active` and ellipsis rendered as a non-interactive span.

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::table::Record;
use crate::pagination::{ButtonToken, Paginated};

const GRID_TEMPLATE_NAME: &str = "grid.html";

const GRID_TEMPLATE: &str = r#"<div class="simplicity-table">
  <table>
    <thead>
      <tr>{% for header in headers %}<th>{{ header }}</th>{% endfor %}</tr>
    </thead>
    <tbody>
      {%- for row in rows %}
      <tr>{% for cell in row %}<td>{{ cell }}</td>{% endfor %}</tr>
      {%- endfor %}
    </tbody>
  </table>
  <div class="table-footer">
    <span class="row-count">{% if count > 0 %}Showing {{ start_index + 1 }}-{{ end_index }} of {{ count }}{% else %}No rows{% endif %}</span>
    <nav class="table-pagination">
      {%- for button in buttons %}
      {%- if button.ellipsis %}
      <span class="pagination-ellipsis">{{ button.label }}</span>
      {%- elif button.active %}
      <button class="pagination-btn page-active">{{ button.label }}</button>
      {%- else %}
      <button class="pagination-btn">{{ button.label }}</button>
      {%- endif %}
      {%- endfor %}
    </nav>
  </div>
</div>
"#;

/// Errors surfaced while rendering a snapshot.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// One button prepared for template consumption.
#[derive(Debug, Serialize)]
struct ButtonView {
    label: String,
    active: bool,
    ellipsis: bool,
}

/// Renders [`Paginated`] snapshots as HTML fragments.
pub struct GridRenderer {
    tera: Tera,
}

impl GridRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(GRID_TEMPLATE_NAME, GRID_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Renders the table plus its pagination controls.
    ///
    /// Cells are emitted in header order; a row missing a column renders
    /// an empty cell.
    pub fn render(&self, data: &Paginated<Record>) -> Result<String, RenderError> {
        let buttons: Vec<ButtonView> = data
            .buttons
            .iter()
            .map(|token| ButtonView {
                label: token.label(&data.labels),
                active: matches!(token, ButtonToken::Page(page) if *page == data.page),
                ellipsis: matches!(token, ButtonToken::Ellipsis),
            })
            .collect();

        let rows: Vec<Vec<&str>> = data
            .rows
            .iter()
            .map(|row| {
                data.headers
                    .iter()
                    .map(|header| row.get(header).map(String::as_str).unwrap_or(""))
                    .collect()
            })
            .collect();

        let mut context = Context::new();
        context.insert("headers", &data.headers);
        context.insert("rows", &rows);
        context.insert("buttons", &buttons);
        context.insert("count", &data.count);
        context.insert("start_index", &data.start_index);
        context.insert("end_index", &data.end_index);

        Ok(self.tera.render(GRID_TEMPLATE_NAME, &context)?)
    }
}
