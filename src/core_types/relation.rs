use super::*;

/// A columnar, dictionary-encoded relation: a `Schema` plus one `ColumnData`
/// per column. Constructed once per discovery and read-only thereafter.
#[derive(Clone, Debug)]
pub struct Relation {
    schema: Schema,
    columns: Vec<ColumnData>,
    num_rows: usize,
}

impl Relation {
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn num_columns(&self) -> usize {
        self.schema.num_columns()
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn columns(&self) -> &[ColumnData] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> &ColumnData {
        &self.columns[index]
    }

    pub fn empty_vertical(&self) -> AttributeSet {
        self.schema.empty_vertical()
    }

    pub fn universal_vertical(&self) -> AttributeSet {
        self.schema.universal_vertical()
    }

    pub fn vertical_from_indices(&self, indices: impl IntoIterator<Item = usize>) -> AttributeSet {
        self.schema.vertical_from_indices(indices)
    }
}

/// Builds a `Relation` by pushing rows of string cells and dictionary-encoding
/// each column independently, in first-occurrence order. This is the
/// programmatic entry point; CSV ingestion (behind the `csv-io` feature) is a
/// thin wrapper over the same builder.
#[derive(Clone, Debug)]
pub struct RelationBuilder {
    schema: Schema,
    rows: Vec<Vec<String>>,
    null_marker: Option<String>,
}

impl RelationBuilder {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        RelationBuilder {
            schema: Schema::new(names),
            rows: Vec::new(),
            null_marker: None,
        }
    }

    /// Cells equal to `marker` are treated as null/missing rather than as an
    /// ordinary value, so no two rows ever agree on them.
    pub fn null_marker(mut self, marker: impl Into<String>) -> Self {
        self.null_marker = Some(marker.into());
        self
    }

    pub fn push_row(mut self, cells: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        debug_assert_eq!(
            cells.len(),
            self.schema.num_columns(),
            "row arity must match schema width"
        );
        self.rows.push(cells);
        self
    }

    pub fn build(self) -> Relation {
        let num_rows = self.rows.len();
        let num_columns = self.schema.num_columns();
        let mut columns = Vec::with_capacity(num_columns);

        for column_index in 0..num_columns {
            let mut code_of_value: HashMap<&str, usize> = HashMap::new();
            let mut next_code = 1usize;
            let mut codes = Vec::with_capacity(num_rows);
            for row in &self.rows {
                let value = row[column_index].as_str();
                let is_null = self.null_marker.as_deref() == Some(value);
                if is_null {
                    codes.push(0);
                    continue;
                }
                let code = *code_of_value.entry(value).or_insert_with(|| {
                    let code = next_code;
                    next_code += 1;
                    code
                });
                codes.push(code);
            }
            columns.push(ColumnData::new(column_index, codes));
        }

        Relation {
            schema: self.schema,
            columns,
            num_rows,
        }
    }
}
