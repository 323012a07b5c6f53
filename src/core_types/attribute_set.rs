use super::*;

use std::cmp::Ordering;
use std::fmt;

/// A fixed-width bit-indexed set of column positions ("Vertical" in the FastFDs
/// literature). All `AttributeSet`s produced by one discovery share the same
/// schema width, but the set itself does not carry that width around — callers
/// that need it (e.g. `invert`) pass it in explicitly.
#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct AttributeSet(BitSet);

impl AttributeSet {
    pub fn empty() -> Self {
        AttributeSet(BitSet::new())
    }

    pub fn singleton(index: usize) -> Self {
        let mut set = BitSet::new();
        set.insert(index);
        AttributeSet(set)
    }

    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        AttributeSet(indices.into_iter().collect())
    }

    pub fn insert(&mut self, index: usize) -> bool {
        self.0.insert(index)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.0.contains(index)
    }

    /// Superset test: does `self` contain every attribute in `other`?
    pub fn contains(&self, other: &AttributeSet) -> bool {
        other.0.is_subset(&self.0)
    }

    pub fn is_subset(&self, other: &AttributeSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn intersects(&self, other: &AttributeSet) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    pub fn union(&self, other: &AttributeSet) -> AttributeSet {
        let mut result = self.0.clone();
        result.union_with(&other.0);
        AttributeSet(result)
    }

    pub fn intersect(&self, other: &AttributeSet) -> AttributeSet {
        let mut result = self.0.clone();
        result.intersect_with(&other.0);
        AttributeSet(result)
    }

    pub fn without_index(&self, index: usize) -> AttributeSet {
        let mut result = self.0.clone();
        result.remove(index);
        AttributeSet(result)
    }

    pub fn without(&self, other: &AttributeSet) -> AttributeSet {
        let mut result = self.0.clone();
        result.difference_with(&other.0);
        AttributeSet(result)
    }

    /// Complement within a schema of `width` columns.
    pub fn invert(&self, width: usize) -> AttributeSet {
        let universal: BitSet = (0..width).collect();
        let mut result = universal;
        result.difference_with(&self.0);
        AttributeSet(result)
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter()
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0.iter().collect::<Vec<_>>())
    }
}

/// Total order over attribute sets: the set whose *lowest differing bit* is
/// set is the greater. Used to sort and deduplicate diff-sets; the streaming
/// minimality check in diff-set modulation relies on this order holding.
impl Ord for AttributeSet {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.0 == other.0 {
            return Ordering::Equal;
        }
        let lowest_differing_bit = self
            .0
            .symmetric_difference(&other.0)
            .next()
            .expect("sets differ, so their symmetric difference is non-empty");
        if other.0.contains(lowest_differing_bit) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl PartialOrd for AttributeSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::hash::Hash for AttributeSet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for bit in self.0.iter() {
            bit.hash(state);
        }
    }
}

impl FromIterator<usize> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        AttributeSet::from_indices(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_order_lowest_differing_bit_wins() {
        // {1} vs {0,1}: symmetric difference is {0}; {0,1} has it set, so {0,1} > {1}.
        let a = attrset![1];
        let b = attrset![0, 1];
        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn total_order_is_antisymmetric_and_consistent_with_equality() {
        let a = attrset![0, 2];
        let b = attrset![1];
        assert_ne!(a.cmp(&b), Ordering::Equal);
        assert!(!(a < b && b < a));
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn total_order_sorts_consistently() {
        let mut sets = vec![attrset![0, 1], attrset![], attrset![1], attrset![0]];
        sets.sort();
        // empty set is always smallest; singletons ordered by index next.
        assert_eq!(sets[0], attrset![]);
        assert_eq!(sets[1], attrset![0]);
    }

    #[test]
    fn superset_and_intersects() {
        let whole = attrset![0, 1, 2];
        let part = attrset![0, 2];
        assert!(whole.contains(&part));
        assert!(!part.contains(&whole));
        assert!(whole.intersects(&part));
        assert!(!attrset![0].intersects(&attrset![1]));
    }

    #[test]
    fn invert_is_complement_within_width() {
        let set = attrset![0, 2];
        assert_eq!(set.invert(3), attrset![1]);
        assert_eq!(attrset![].invert(3), attrset![0, 1, 2]);
    }

    #[test]
    fn without_removes_members() {
        let set = attrset![0, 1, 2];
        assert_eq!(set.without_index(1), attrset![0, 2]);
        assert_eq!(set.without(&attrset![0, 2]), attrset![1]);
    }
}
