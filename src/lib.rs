//! Discovers exact functional dependencies (FDs) in a relational table via
//! the FastFDs algorithm: all minimal non-trivial rules `X -> A` such that
//! every pair of tuples agreeing on `X` also agrees on `A`.
//!
//! The crate consumes a loaded, dictionary-encoded [`Relation`] — built
//! programmatically via [`RelationBuilder`] or, with the `csv-io` feature,
//! from a CSV file — and runs a three-stage pipeline over it: agree-set /
//! difference-set generation from a compressed partition representation,
//! per-attribute difference-set minimization, and a depth-first minimal-cover
//! search over an ordered attribute lattice.
//!
//! # Example
//! ```
//! use fastfds::{FdDiscovery, RelationBuilder};
//!
//! // column `a` is a key, so `a -> b` is the only functional dependency.
//! let relation = RelationBuilder::new(vec!["a", "b"])
//!     .push_row(vec!["1", "x"])
//!     .push_row(vec!["2", "y"])
//!     .push_row(vec!["3", "x"])
//!     .build();
//!
//! let discovery = FdDiscovery::new(relation).unwrap();
//! let fds = discovery.discover();
//! let rendered: Vec<String> = fds
//!     .iter()
//!     .map(|fd| fd.to_string(discovery.relation().schema()))
//!     .collect();
//! assert_eq!(rendered, vec!["a -> b"]);
//! ```

mod core_types;
mod discovery;
#[cfg(feature = "csv-io")]
mod io;

pub use core_types::{
    AttributeSet, Column, ColumnData, IdentifierSet, PositionListIndex, Relation,
    RelationBuilder, Schema,
};
pub use discovery::{FdDiscovery, FdDiscoveryError, FdSet, FD};
#[cfg(feature = "csv-io")]
pub use io::{CsvIngestError, CsvIngestOptions};

use log::{debug, info, warn};
