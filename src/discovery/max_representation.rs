use super::*;

/// The ⊆-maximal clusters taken over all column PLIs. Every row pair that
/// could ever produce a non-empty agree-set sits inside at least one maximal
/// cluster, so the diff-set generator only needs to inspect pairs within
/// these clusters.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct MaxRepresentation {
    clusters: Vec<Vec<usize>>,
}

impl MaxRepresentation {
    pub fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn compute(columns: &[ColumnData]) -> MaxRepresentation {
        let mut non_empty_plis = columns.iter().filter(|column| !column.pli().is_empty());
        let seed = match non_empty_plis.next() {
            Some(column) => column,
            None => return MaxRepresentation::default(),
        };
        let mut clusters: Vec<Vec<usize>> = seed.pli().clusters().to_vec();
        for column in non_empty_plis {
            fold_in(&mut clusters, column.pli().clusters());
        }
        MaxRepresentation { clusters }
    }
}

/// Folds the clusters of one more column's PLI into the running maximal set:
/// a cluster already dominated by an existing maximal cluster is discarded;
/// otherwise it is added and any existing cluster it dominates is dropped.
fn fold_in(max_clusters: &mut Vec<Vec<usize>>, incoming: &[Vec<usize>]) {
    for cluster in incoming {
        if max_clusters
            .iter()
            .any(|existing| is_subset(cluster, existing))
        {
            continue;
        }
        max_clusters.retain(|existing| !is_subset(existing, cluster));
        max_clusters.push(cluster.clone());
    }
}

fn is_subset(a: &[usize], b: &[usize]) -> bool {
    let b: std::collections::HashSet<usize> = b.iter().copied().collect();
    a.iter().all(|row| b.contains(row))
}
