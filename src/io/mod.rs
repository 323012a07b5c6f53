//! CSV ingestion, kept outside the discovery core per spec.md's "out of
//! scope: CSV ingestion and type inference" — the core only ever sees a
//! `Relation`. Grounded in the teacher's bulk-mode ingestion
//! (`src/bin/bulk_fbas_analyzer.rs`), which reads external files with the
//! `csv` crate rather than hand-rolling a parser.

mod csv_ingest;

pub use csv_ingest::{CsvIngestError, CsvIngestOptions};
