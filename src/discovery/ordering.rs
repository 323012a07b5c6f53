use super::*;

/// Candidate attributes, ordered by (coverage over `diff_sets` desc, column
/// index asc). Coverage ties are broken by index ascending — the tie-break
/// is normative (spec §4.G) and kept deterministic on purpose.
pub fn coverage_cmp(diff_sets: &[AttributeSet], a: usize, b: usize) -> std::cmp::Ordering {
    let coverage = |col: usize| diff_sets.iter().filter(|d| d.contains_index(col)).count();
    coverage(b).cmp(&coverage(a)).then(a.cmp(&b))
}

/// Initial ordering for RHS attribute `rhs`: every other column, sorted by
/// coverage over `diff_sets_mod`. Unlike `next_ordering`, this does not
/// filter out zero-coverage columns.
pub fn initial_ordering(diff_sets_mod: &[AttributeSet], num_columns: usize, rhs: usize) -> Vec<usize> {
    let mut candidates: Vec<usize> = (0..num_columns).filter(|&c| c != rhs).collect();
    candidates.sort_by(|&a, &b| coverage_cmp(diff_sets_mod, a, b));
    candidates
}

/// Ordering for the next recursion level: only the columns from `suffix`
/// (the parent ordering's tail after the column just picked) that still
/// appear in `next_diff_sets`, re-sorted by their coverage over
/// `next_diff_sets`.
pub fn next_ordering(next_diff_sets: &[AttributeSet], suffix: &[usize]) -> Vec<usize> {
    let mut candidates: Vec<usize> = suffix
        .iter()
        .copied()
        .filter(|&col| next_diff_sets.iter().any(|d| d.contains_index(col)))
        .collect();
    candidates.sort_by(|&a, &b| coverage_cmp(next_diff_sets, a, b));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_coverage_desc_then_index_asc() {
        let diff_sets = vec![attrset![0, 1], attrset![1], attrset![1, 2]];
        // coverage: col0=1, col1=3, col2=1 -> [1, 0, 2]
        let ordering = initial_ordering(&diff_sets, 3, 99);
        assert_eq!(ordering, vec![1, 0, 2]);
    }

    #[test]
    fn next_ordering_drops_zero_coverage_and_restricts_to_suffix() {
        let next_diff_sets = vec![attrset![2]];
        let suffix = vec![0, 2];
        assert_eq!(next_ordering(&next_diff_sets, &suffix), vec![2]);
    }
}
