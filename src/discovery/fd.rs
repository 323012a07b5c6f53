use super::*;

/// A functional dependency `lhs -> rhs`, with `lhs ∩ {rhs} = ∅`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FD {
    pub lhs: AttributeSet,
    pub rhs: usize,
}

impl FD {
    pub fn new(lhs: AttributeSet, rhs: usize) -> Self {
        debug_assert!(!lhs.contains_index(rhs), "FD must not have rhs in its lhs");
        FD { lhs, rhs }
    }

    /// Renders `{col|col|...} -> col`, LHS in ascending column-index order;
    /// the empty LHS prints as `[]`.
    pub fn to_string(&self, schema: &Schema) -> String {
        let lhs_names: Vec<&str> = {
            let mut indices: Vec<usize> = self.lhs.iter().collect();
            indices.sort_unstable();
            indices.into_iter().map(|i| schema.column_name(i)).collect()
        };
        let lhs_rendered = if lhs_names.is_empty() {
            "[]".to_string()
        } else {
            lhs_names.join("|")
        };
        format!("{} -> {}", lhs_rendered, schema.column_name(self.rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_empty_lhs_as_brackets() {
        let schema = Schema::new(vec!["a", "b"]);
        let fd = FD::new(AttributeSet::empty(), 0);
        assert_eq!(fd.to_string(&schema), "[] -> a");
    }

    #[test]
    fn renders_composite_lhs_in_index_order() {
        let schema = Schema::new(vec!["a", "b", "c"]);
        let fd = FD::new(attrset![1, 0], 2);
        assert_eq!(fd.to_string(&schema), "a|b -> c");
    }
}
