//! CSV-backed table source.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::domain::table::{Record, TableData};
use crate::filter::FilterParams;
use crate::source::TableSource;
use crate::source::errors::SourceResult;

/// Reads delimited text with a header row from a file.
///
/// Blank records are skipped and ragged rows are tolerated: cells beyond
/// the header row are dropped, missing cells are simply absent from the
/// row map.
#[derive(Clone, Debug)]
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Builder-style override of the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn read_table<R: Read>(&self, reader: R) -> SourceResult<TableData> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            let mut row = Record::with_capacity(headers.len());
            for (index, cell) in record.iter().enumerate() {
                if let Some(header) = headers.get(index) {
                    row.insert(header.clone(), cell.to_string());
                }
            }
            rows.push(row);
        }

        Ok(TableData::new(headers, rows))
    }
}

impl TableSource for CsvSource {
    fn fetch(&self, filter: &FilterParams) -> SourceResult<TableData> {
        let file = File::open(&self.path)?;
        let mut table = self.read_table(file)?;
        if !filter.is_empty() {
            table.rows.retain(|row| filter.matches(row));
        }
        Ok(table)
    }
}
