/**
 * Stores a set of disjunct intervals, unifying them when possible. The
 * intervals are kept sorted and no two of them overlap or touch.
 */

use crate::discrete::Discrete;
use crate::interval::Interval;

#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct IntervalSet<T> {
    pub(crate) intervals: Vec<Interval<T>>,
}

impl <T> IntervalSet<T> {
    pub fn new() -> Self {
        IntervalSet{ intervals: Vec::new() }
    }

    /// The normalized intervals, in ascending order.
    pub fn intervals(&self) -> &[Interval<T>] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }
}

impl <T> std::fmt::Debug for IntervalSet<T> where T : std::fmt::Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.intervals.iter()).finish()
    }
}

impl <T> IntervalSet<T> where T : Discrete {
    /// Inserts an interval into the set, unifying every touching and
    /// overlapping entry.
    pub fn insert(&mut self, value: Interval<T>) {
        let range = self.mergeable_index_range(&value);

        if range.is_empty() {
            // Intersects or touches nothing, just insert
            self.intervals.insert(range.start, value);
        }
        else {
            // Unify with everything in range, then drop the now redundant entries
            let first = self.intervals[range.start];
            let last = self.intervals[range.end - 1];
            let unified = Interval{
                lower: std::cmp::min(first.lower, value.lower),
                upper: std::cmp::max(last.upper, value.upper),
            };
            self.intervals.splice(range, std::iter::once(unified));
        }
    }

    pub fn contains(&self, element: &T) -> bool {
        let idx = self.intervals.partition_point(|iv| iv.upper < *element);
        idx < self.intervals.len() && self.intervals[idx].contains(element)
    }

    /// The number of elements in the set.
    pub fn len(&self) -> u64 {
        self.intervals.iter().map(|iv| iv.len()).sum()
    }

    // The contiguous index range of entries that overlap or touch the interval
    fn mergeable_index_range(&self, value: &Interval<T>) -> std::ops::Range<usize> {
        let start = self.intervals.partition_point(|iv|
            iv.is_before(value) && !iv.is_touching(value));
        let end = start + self.intervals[start..].partition_point(|iv|
            !value.is_before(iv) || value.is_touching(iv));
        start..end
    }
}

impl <T> std::iter::FromIterator<Interval<T>> for IntervalSet<T> where T : Discrete {
    fn from_iter<I>(iter: I) -> Self where I : IntoIterator<Item = Interval<T>> {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl <T> Extend<Interval<T>> for IntervalSet<T> where T : Discrete {
    fn extend<I>(&mut self, iter: I) where I : IntoIterator<Item = Interval<T>> {
        for iv in iter {
            self.insert(iv);
        }
    }
}

impl <'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod interval_set_tests {
    use super::*;

    fn ri(a: char, b: char) -> Interval<char> {
        Interval::with_bounds(a, b)
    }

    fn set(ivs: &[(char, char)]) -> IntervalSet<char> {
        ivs.iter().map(|(a, b)| ri(*a, *b)).collect()
    }

    fn ranges(s: &IntervalSet<char>) -> Vec<(char, char)> {
        s.iter().map(|iv| (iv.lower, iv.upper)).collect()
    }

    #[test]
    fn insert_disjunct_keeps_order() {
        let s = set(&[('y', 'z'), ('a', 'c'), ('e', 'g')]);
        assert_eq!(ranges(&s), vec![('a', 'c'), ('e', 'g'), ('y', 'z')]);
    }

    #[test]
    fn insert_touching_unifies() {
        let s = set(&[('a', 'c'), ('d', 'f')]);
        assert_eq!(ranges(&s), vec![('a', 'f')]);
    }

    #[test]
    fn insert_touching_from_below_unifies() {
        let s = set(&[('d', 'f'), ('a', 'c')]);
        assert_eq!(ranges(&s), vec![('a', 'f')]);
    }

    #[test]
    fn insert_overlapping_multiple_unifies() {
        let s = set(&[('a', 'b'), ('e', 'f'), ('k', 'm'), ('x', 'z'), ('c', 'l')]);
        assert_eq!(ranges(&s), vec![('a', 'm'), ('x', 'z')]);
    }

    #[test]
    fn insert_contained_is_noop() {
        let s = set(&[('a', 'z'), ('k', 'm')]);
        assert_eq!(ranges(&s), vec![('a', 'z')]);
    }

    #[test]
    fn insert_singletons() {
        let s: IntervalSet<char> = "cabfe".chars().map(Interval::singleton).collect();
        assert_eq!(ranges(&s), vec![('a', 'c'), ('e', 'f')]);
    }

    #[test]
    fn len_sums_ranges() {
        let s = set(&[('a', 'c'), ('e', 'g'), ('y', 'z')]);
        assert_eq!(s.len(), 8);
    }

    #[test]
    fn contains_checks_every_range() {
        let s = set(&[('a', 'c'), ('e', 'g'), ('y', 'z')]);
        assert!(s.contains(&'a'));
        assert!(s.contains(&'f'));
        assert!(s.contains(&'z'));
        assert!(!s.contains(&'d'));
        assert!(!s.contains(&'x'));
        assert!(!s.contains(&'0'));
    }
}
