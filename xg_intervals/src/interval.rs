/**
 * Inclusive intervals over a discrete domain.
 */

use crate::discrete::Discrete;

/// Represents the inclusive interval [lower; upper]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    pub lower: T,
    pub upper: T,
}

/**
 * Constructing an interval.
 */

impl <T> Interval<T> where T : Ord {
    /// Creates an interval from two endpoints, in whichever order they are given.
    pub fn with_bounds(a: T, b: T) -> Self {
        if a <= b {
            Self{ lower: a, upper: b }
        }
        else {
            Self{ lower: b, upper: a }
        }
    }
}

impl <T> Interval<T> where T : Clone {
    pub fn singleton(value: T) -> Self {
        Self{ lower: value.clone(), upper: value }
    }
}

/**
 * Debug-print an interval.
 */
impl <T> std::fmt::Debug for Interval<T> where T : std::fmt::Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}; {:?}]", self.lower, self.upper)
    }
}

/**
 * Info about a single interval.
 */

impl <T> Interval<T> where T : Discrete {
    pub fn contains(&self, element: &T) -> bool {
        self.lower <= *element && *element <= self.upper
    }

    /// The number of elements inside the interval.
    pub fn len(&self) -> u64 {
        T::count(self.lower, self.upper)
    }

    /// The `n`th element of the interval, counting from the lower end.
    pub fn nth(&self, n: u64) -> Option<T> {
        self.lower.advance(n).filter(|x| *x <= self.upper)
    }
}

/**
 * Relation of intervals.
 */

impl <T> Interval<T> where T : Discrete {
    /// Checks if this interval ends before the other one starts
    pub fn is_before(&self, other: &Self) -> bool {
        self.upper < other.lower
    }

    /// Checks if this interval ends right where the other one starts, with no
    /// element between them
    pub fn is_touching(&self, other: &Self) -> bool {
        self.upper.succ() == Some(other.lower)
    }

    pub fn is_disjunct(&self, other: &Self) -> bool {
        self.is_before(other) || other.is_before(self)
    }

    /// Checks if the two intervals could be unified into one.
    pub fn is_mergeable(&self, other: &Self) -> bool {
        !self.is_disjunct(other) || self.is_touching(other) || other.is_touching(self)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
