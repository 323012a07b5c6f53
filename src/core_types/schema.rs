use super::*;

/// A single column position in a `Schema`. Columns carry no back-reference to
/// their schema; callers that need the schema width pass `&Schema` explicitly
/// rather than asking a `Column` to resolve it through a cycle.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Column {
    pub index: usize,
    pub name: String,
}

impl Column {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Column {
            index,
            name: name.into(),
        }
    }
}

/// The ordered sequence of columns a relation is built over.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let columns = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Column::new(index, name))
            .collect();
        Schema { columns }
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> &Column {
        &self.columns[index]
    }

    pub fn column_name(&self, index: usize) -> &str {
        &self.columns[index].name
    }

    pub fn empty_vertical(&self) -> AttributeSet {
        AttributeSet::empty()
    }

    pub fn universal_vertical(&self) -> AttributeSet {
        AttributeSet::from_indices(0..self.num_columns())
    }

    pub fn vertical_from_indices(&self, indices: impl IntoIterator<Item = usize>) -> AttributeSet {
        AttributeSet::from_indices(indices)
    }
}
