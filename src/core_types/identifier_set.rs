use super::*;

/// A row's per-column cluster-membership descriptor. Entries are sorted by
/// column index, with null/missing cells simply absent rather than given a
/// special cluster id — the dictionary code doubles as the cluster id, which
/// is safe because singleton codes are by definition unique to one row.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct IdentifierSet {
    entries: Vec<(usize, usize)>,
}

impl IdentifierSet {
    pub fn for_row(relation: &Relation, row: usize) -> Self {
        let entries = relation
            .columns()
            .iter()
            .filter_map(|column| column.code_at(row).map(|code| (column.column_index(), code)))
            .collect();
        IdentifierSet { entries }
    }

    /// Agree-set of the two rows: bit i set iff both share column i's code.
    pub fn intersect(&self, other: &IdentifierSet) -> AttributeSet {
        let mut agree = AttributeSet::empty();
        let (mut i, mut j) = (0, 0);
        while i < self.entries.len() && j < other.entries.len() {
            let (col_i, code_i) = self.entries[i];
            let (col_j, code_j) = other.entries[j];
            match col_i.cmp(&col_j) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    if code_i == code_j {
                        agree.insert(col_i);
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        agree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_agrees_only_on_shared_columns() {
        let relation = RelationBuilder::new(vec!["a", "b", "c"])
            .push_row(vec!["1", "x", "p"])
            .push_row(vec!["1", "y", "p"])
            .build();
        let id0 = IdentifierSet::for_row(&relation, 0);
        let id1 = IdentifierSet::for_row(&relation, 1);
        let agree = id0.intersect(&id1);
        assert_eq!(agree, attrset![0, 2]);
    }

    #[test]
    fn null_cells_never_agree() {
        let relation = RelationBuilder::new(vec!["a"])
            .null_marker("")
            .push_row(vec![""])
            .push_row(vec![""])
            .build();
        let id0 = IdentifierSet::for_row(&relation, 0);
        let id1 = IdentifierSet::for_row(&relation, 1);
        assert!(id0.intersect(&id1).is_empty());
    }
}
