use super::*;

use itertools::Itertools;
use std::time::Instant;

/// Generates the sorted, deduplicated list of difference sets for a relation
/// per spec §4.F: max-representation → identifier sets → pairwise agree sets
/// → inversion → sort.
pub fn generate_diff_sets(relation: &Relation) -> Vec<AttributeSet> {
    let (max_representation, max_repr_secs) = timed_secs!(MaxRepresentation::compute(relation.columns()));
    debug!(
        "max representation: {} clusters in {:.6}s",
        max_representation.clusters().len(),
        max_repr_secs
    );
    if max_representation.is_empty() && relation.num_rows() > 1 {
        warn!(
            "no column has a repeated value over {} rows; every column is independently a key",
            relation.num_rows()
        );
    }

    let (identifier_sets, id_sets_secs) = timed_secs!(build_identifier_sets(relation, &max_representation));
    debug!(
        "identifier sets: {} distinct rows in {:.6}s",
        identifier_sets.len(),
        id_sets_secs
    );

    let (diff_sets, diff_sets_secs) = timed_secs!(agree_sets_to_diff_sets(relation, &identifier_sets));
    debug!("diff sets: {} sets in {:.6}s", diff_sets.len(), diff_sets_secs);

    diff_sets
}

fn build_identifier_sets(relation: &Relation, max_representation: &MaxRepresentation) -> Vec<IdentifierSet> {
    let mut seen = std::collections::HashSet::new();
    let mut identifier_sets = Vec::new();
    for cluster in max_representation.clusters() {
        for &row in cluster {
            if seen.insert(row) {
                identifier_sets.push(IdentifierSet::for_row(relation, row));
            }
        }
    }
    identifier_sets
}

fn agree_sets_to_diff_sets(relation: &Relation, identifier_sets: &[IdentifierSet]) -> Vec<AttributeSet> {
    let mut agree_sets: BTreeSet<AttributeSet> = BTreeSet::new();

    for (left, right) in identifier_sets.iter().tuple_combinations() {
        agree_sets.insert(left.intersect(right));
    }

    // Ensures the inversion below always yields the universal set at least
    // once, matching the reference behavior for the degenerate (no pairs)
    // case as well as the general one.
    agree_sets.insert(relation.empty_vertical());

    let width = relation.num_columns();
    let mut diff_sets: Vec<AttributeSet> = agree_sets
        .into_iter()
        .map(|agree_set| agree_set.invert(width))
        .collect();
    diff_sets.sort();
    diff_sets.dedup();
    diff_sets
}
