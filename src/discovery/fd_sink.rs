use super::*;

use std::collections::HashSet;

/// Deduplicating collector for discovered FDs (spec §4.H), plus the
/// post-processing step that folds arity-1 FDs from every other column into
/// a single `[] -> rhs` when `rhs` turns out to be constant (a case the main
/// per-column search loop can otherwise miss; see spec §4.H).
///
/// The DFS in `cover_search` cannot itself produce two identical `(lhs, rhs)`
/// pairs for one RHS (each ordering position is visited forward-only, so a
/// given subset is reached through at most one recursion path), but `seen`
/// guards the registration boundary anyway rather than relying on that as an
/// implicit invariant callers must never violate.
#[derive(Debug, Default)]
pub struct FdSink {
    fds: Vec<FD>,
    seen: HashSet<(AttributeSet, usize)>,
}

impl FdSink {
    pub fn new() -> Self {
        FdSink {
            fds: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn register(&mut self, lhs: AttributeSet, rhs: usize) {
        if self.seen.insert((lhs.clone(), rhs)) {
            self.fds.push(FD::new(lhs, rhs));
        }
    }

    pub fn verify_empty_lhs(&mut self, relation: &Relation) {
        let num_columns = relation.num_columns();
        let mut arity_one_fds_per_rhs = vec![0usize; num_columns];
        for fd in &self.fds {
            if fd.lhs.arity() == 1 {
                arity_one_fds_per_rhs[fd.rhs] += 1;
            }
        }

        for rhs in 0..num_columns {
            let column_is_constant = relation.column(rhs).is_constant();
            if arity_one_fds_per_rhs[rhs] == num_columns - 1 && column_is_constant {
                self.fds.retain(|fd| fd.rhs != rhs);
                self.register(relation.empty_vertical(), rhs);
            }
        }
    }

    pub fn into_fds(self) -> Vec<FD> {
        self.fds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_empty_lhs_collapses_constant_column_fds() {
        // b is constant; every other (single) column functionally determines it,
        // so the per-column search would register "a -> b" instead of "[] -> b".
        let relation = RelationBuilder::new(vec!["a", "b"])
            .push_row(vec!["1", "1"])
            .push_row(vec!["2", "1"])
            .push_row(vec!["3", "1"])
            .build();
        let mut sink = FdSink::new();
        sink.register(attrset![0], 1);
        sink.verify_empty_lhs(&relation);
        let fds = sink.into_fds();
        assert_eq!(fds.len(), 1);
        assert_eq!(fds[0].lhs, relation.empty_vertical());
        assert_eq!(fds[0].rhs, 1);
    }

    #[test]
    fn verify_empty_lhs_leaves_non_constant_columns_alone() {
        let relation = RelationBuilder::new(vec!["a", "b"])
            .push_row(vec!["1", "x"])
            .push_row(vec!["2", "y"])
            .build();
        let mut sink = FdSink::new();
        sink.register(attrset![0], 1);
        sink.verify_empty_lhs(&relation);
        let fds = sink.into_fds();
        assert_eq!(fds.len(), 1);
        assert_eq!(fds[0].lhs, attrset![0]);
    }
}
