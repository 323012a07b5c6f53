use super::*;

use ordering::{initial_ordering, next_ordering};

/// Runs the per-RHS cover search (spec §4.G) for `rhs` over the full sorted
/// `diff_sets`, registering every minimal cover found into `sink`.
pub fn search_covers_for_rhs(
    diff_sets: &[AttributeSet],
    relation: &Relation,
    rhs: usize,
    sink: &mut FdSink,
) {
    let diff_sets_mod = diff_sets_modulo(diff_sets, rhs);

    if diff_sets_mod.is_empty() {
        // Nothing disagrees on rhs once rhs itself is stripped out: rhs is
        // functionally determined by nothing, i.e. a constant column.
        sink.register(relation.empty_vertical(), rhs);
        return;
    }
    if diff_sets_mod.len() == 1 && diff_sets_mod[0].is_empty() {
        // Some pair disagrees on rhs alone; no LHS can ever cover that.
        return;
    }

    let ordering = initial_ordering(&diff_sets_mod, relation.num_columns(), rhs);
    find_covers(
        rhs,
        &diff_sets_mod,
        &diff_sets_mod,
        relation.empty_vertical(),
        &ordering,
        sink,
    );
}

/// Streams `diff_sets` (sorted) and keeps only the minimal elements of
/// `{D \ {rhs} : rhs in D}`. Sortedness by the §3 total order guarantees any
/// accepted subset was seen before the sets it subsumes, so a single forward
/// pass with a streaming subset test suffices (spec §4.G).
fn diff_sets_modulo(diff_sets: &[AttributeSet], rhs: usize) -> Vec<AttributeSet> {
    let mut diff_sets_mod: Vec<AttributeSet> = Vec::new();
    for diff_set in diff_sets {
        if !diff_set.contains_index(rhs) {
            continue;
        }
        let is_minimal = !diff_sets_mod
            .iter()
            .any(|accepted| diff_set.contains(accepted));
        if is_minimal {
            diff_sets_mod.push(diff_set.without_index(rhs));
        }
    }
    diff_sets_mod
}

fn is_cover(candidate: &AttributeSet, sets: &[AttributeSet]) -> bool {
    sets.iter().all(|set| set.intersects(candidate))
}

fn is_minimal_cover(cover: &AttributeSet, diff_sets_mod: &[AttributeSet]) -> bool {
    cover
        .iter()
        .all(|column| !is_cover(&cover.without_index(column), diff_sets_mod))
}

#[allow(clippy::too_many_arguments)]
fn find_covers(
    rhs: usize,
    diff_sets_mod: &[AttributeSet],
    current_diff_sets: &[AttributeSet],
    path: AttributeSet,
    ordering: &[usize],
    sink: &mut FdSink,
) {
    if current_diff_sets.is_empty() {
        if is_minimal_cover(&path, diff_sets_mod) {
            sink.register(path, rhs);
        }
        return;
    }
    if ordering.is_empty() {
        return; // infeasible branch: nothing left can cover the residual
    }

    for (position, &column) in ordering.iter().enumerate() {
        let next_diff_sets: Vec<AttributeSet> = current_diff_sets
            .iter()
            .filter(|diff_set| !diff_set.contains_index(column))
            .cloned()
            .collect();

        let suffix = &ordering[position + 1..];
        let child_ordering = next_ordering(&next_diff_sets, suffix);
        let next_path = path.union(&AttributeSet::singleton(column));
        find_covers(
            rhs,
            diff_sets_mod,
            &next_diff_sets,
            next_path,
            &child_ordering,
            sink,
        );
    }
}
