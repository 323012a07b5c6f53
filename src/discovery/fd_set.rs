use super::*;

use std::collections::HashMap;

/// A thin collection wrapper around the discovered `FD`s, grounded in the
/// teacher's `NodeIdSetVecResult` (len/is_empty/describe over a `Vec` of
/// results) — the same quick-inspection convenience, recast for FDs.
#[derive(Clone, Debug, Default)]
pub struct FdSet {
    fds: Vec<FD>,
}

impl FdSet {
    pub fn new(fds: Vec<FD>) -> Self {
        FdSet { fds }
    }

    pub fn len(&self) -> usize {
        self.fds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FD> {
        self.fds.iter()
    }

    pub fn into_vec(self) -> Vec<FD> {
        self.fds
    }

    /// Groups FDs by their RHS column index.
    pub fn grouped_by_rhs(&self) -> HashMap<usize, Vec<&FD>> {
        let mut groups: HashMap<usize, Vec<&FD>> = HashMap::new();
        for fd in &self.fds {
            groups.entry(fd.rhs).or_default().push(fd);
        }
        groups
    }

    /// Returns `(count, (min_lhs_arity, max_lhs_arity, mean_lhs_arity))`.
    pub fn describe(&self) -> (usize, (usize, usize, f64)) {
        (self.len(), self.lhs_arity_minmaxmean())
    }

    fn lhs_arity_minmaxmean(&self) -> (usize, usize, f64) {
        if self.fds.is_empty() {
            return (0, 0, 0.0);
        }
        let arities: Vec<usize> = self.fds.iter().map(|fd| fd.lhs.arity()).collect();
        let min = *arities.iter().min().unwrap();
        let max = *arities.iter().max().unwrap();
        let mean = arities.iter().sum::<usize>() as f64 / arities.len() as f64;
        (min, max, mean)
    }

    /// Renders every FD via `FD::to_string`, sorted lexicographically, as the
    /// harness-level JSON format is expected to list them (spec §6).
    pub fn to_sorted_strings(&self, schema: &Schema) -> Vec<String> {
        let mut rendered: Vec<String> = self.fds.iter().map(|fd| fd.to_string(schema)).collect();
        rendered.sort();
        rendered
    }
}

impl IntoIterator for FdSet {
    type Item = FD;
    type IntoIter = std::vec::IntoIter<FD>;

    fn into_iter(self) -> Self::IntoIter {
        self.fds.into_iter()
    }
}
