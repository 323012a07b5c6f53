use super::*;

/// Equivalence clusters of row indices sharing a code within one column,
/// excluding singletons. Cluster order is the first-occurrence order of the
/// value in the source table.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct PositionListIndex {
    clusters: Vec<Vec<usize>>,
    size: usize,
}

impl PositionListIndex {
    /// `codes` is one entry per row; `0` is the reserved null/missing code,
    /// every other value groups rows sharing it.
    pub fn from_codes(codes: &[usize]) -> Self {
        let mut cluster_of_code: HashMap<usize, usize> = HashMap::new();
        let mut clusters: Vec<Vec<usize>> = Vec::new();
        for (row, &code) in codes.iter().enumerate() {
            if code == 0 {
                continue;
            }
            match cluster_of_code.get(&code) {
                Some(&cluster_index) => clusters[cluster_index].push(row),
                None => {
                    cluster_of_code.insert(code, clusters.len());
                    clusters.push(vec![row]);
                }
            }
        }
        clusters.retain(|cluster| cluster.len() >= 2);
        let size = clusters.iter().map(|cluster| cluster.len()).sum();
        PositionListIndex { clusters, size }
    }

    pub fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }

    /// Sum of cluster sizes (rows that participate in some non-singleton cluster).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn num_non_singleton_clusters(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

/// Per-column dictionary-encoded values plus the derived PLI.
#[derive(Clone, Debug)]
pub struct ColumnData {
    column_index: usize,
    codes: Vec<usize>,
    pli: PositionListIndex,
}

impl ColumnData {
    pub fn new(column_index: usize, codes: Vec<usize>) -> Self {
        let pli = PositionListIndex::from_codes(&codes);
        ColumnData {
            column_index,
            codes,
            pli,
        }
    }

    pub fn column_index(&self) -> usize {
        self.column_index
    }

    pub fn num_rows(&self) -> usize {
        self.codes.len()
    }

    /// `None` when the row's value in this column is null/missing.
    pub fn code_at(&self, row: usize) -> Option<usize> {
        match self.codes[row] {
            0 => None,
            code => Some(code),
        }
    }

    pub fn pli(&self) -> &PositionListIndex {
        &self.pli
    }

    /// A column is constant when no pair of (non-null) rows can ever disagree
    /// on it: either there are fewer than two rows, or every non-null value
    /// collapses into a single cluster spanning every row.
    pub fn is_constant(&self) -> bool {
        self.num_rows() <= 1
            || (self.pli.num_non_singleton_clusters() == 1 && self.pli.size() == self.num_rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pli_groups_by_code_excluding_singletons() {
        // codes: row0=1, row1=2, row2=1, row3=3, row4=2
        let pli = PositionListIndex::from_codes(&[1, 2, 1, 3, 2]);
        assert_eq!(pli.num_non_singleton_clusters(), 2);
        assert_eq!(pli.size(), 4);
        assert!(pli.clusters().contains(&vec![0, 2]));
        assert!(pli.clusters().contains(&vec![1, 4]));
    }

    #[test]
    fn pli_all_distinct_is_empty() {
        let pli = PositionListIndex::from_codes(&[1, 2, 3]);
        assert!(pli.is_empty());
        assert_eq!(pli.size(), 0);
    }

    #[test]
    fn pli_skips_null_code_zero() {
        let pli = PositionListIndex::from_codes(&[0, 0, 1]);
        assert!(pli.is_empty());
    }

    #[test]
    fn column_is_constant_when_single_cluster_spans_all_rows() {
        let column = ColumnData::new(0, vec![1, 1, 1]);
        assert!(column.is_constant());
    }

    #[test]
    fn column_is_not_constant_when_values_differ() {
        let column = ColumnData::new(0, vec![1, 2, 1]);
        assert!(!column.is_constant());
    }

    #[test]
    fn column_with_at_most_one_row_is_vacuously_constant() {
        assert!(ColumnData::new(0, vec![]).is_constant());
        assert!(ColumnData::new(0, vec![1]).is_constant());
    }
}
