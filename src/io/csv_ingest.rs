use std::error::Error;
use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::{Relation, RelationBuilder};

/// Options controlling how a CSV source is turned into a [`Relation`].
/// Every cell is treated as an opaque string code (no numeric/type
/// inference); this is the simplest possible reading of spec.md's "CSV
/// ingestion and type inference... not respecified".
#[derive(Clone, Debug)]
pub struct CsvIngestOptions {
    delimiter: u8,
    has_headers: bool,
    null_marker: Option<String>,
}

impl Default for CsvIngestOptions {
    fn default() -> Self {
        CsvIngestOptions {
            delimiter: b',',
            has_headers: true,
            null_marker: None,
        }
    }
}

impl CsvIngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn null_marker(mut self, marker: impl Into<String>) -> Self {
        self.null_marker = Some(marker.into());
        self
    }

    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Relation, CsvIngestError> {
        let reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .from_path(path)?;
        self.build(reader)
    }

    pub fn from_reader<R: Read>(&self, source: R) -> Result<Relation, CsvIngestError> {
        let reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .from_reader(source);
        self.build(reader)
    }

    fn build<R: Read>(&self, mut reader: csv::Reader<R>) -> Result<Relation, CsvIngestError> {
        let names: Vec<String> = if self.has_headers {
            reader.headers()?.iter().map(str::to_string).collect()
        } else {
            Vec::new()
        };

        let mut builder = if names.is_empty() {
            None
        } else {
            Some(RelationBuilder::new(names))
        };
        if let Some(marker) = &self.null_marker {
            builder = builder.map(|b| b.null_marker(marker.clone()));
        }

        for record in reader.records() {
            let record = record?;
            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            builder = Some(match builder {
                Some(b) => b.push_row(cells),
                None => {
                    let names: Vec<String> = (0..cells.len()).map(|i| format!("col{}", i)).collect();
                    let mut fresh = RelationBuilder::new(names);
                    if let Some(marker) = &self.null_marker {
                        fresh = fresh.null_marker(marker.clone());
                    }
                    fresh.push_row(cells)
                }
            });
        }

        match builder {
            Some(builder) => Ok(builder.build()),
            None => Err(CsvIngestError::EmptySource),
        }
    }
}

/// Errors surfaced at the CSV ingestion boundary. Parse failures propagate
/// the `csv` crate's own error type unchanged (ingestion is a thin wrapper,
/// not a reimplementation of error recovery).
#[derive(Debug)]
pub enum CsvIngestError {
    Csv(csv::Error),
    /// No header row and no data rows: there is no way to know the schema width.
    EmptySource,
}

impl fmt::Display for CsvIngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvIngestError::Csv(err) => write!(f, "CSV error: {}", err),
            CsvIngestError::EmptySource => {
                write!(f, "cannot infer a schema from an empty, headerless CSV source")
            }
        }
    }
}

impl Error for CsvIngestError {}

impl From<csv::Error> for CsvIngestError {
    fn from(err: csv::Error) -> Self {
        CsvIngestError::Csv(err)
    }
}
