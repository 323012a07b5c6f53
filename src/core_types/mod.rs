use super::*;

pub use bit_set::BitSet;
pub use std::collections::BTreeSet;
pub use std::collections::HashMap;

mod attribute_set;
mod identifier_set;
mod pli;
mod relation;
mod schema;
mod set_helpers;

pub use attribute_set::*;
pub use identifier_set::*;
pub use pli::*;
pub use relation::*;
pub use schema::*;
pub use set_helpers::*;
