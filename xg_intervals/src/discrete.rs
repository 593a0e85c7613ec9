/**
 * Discrete, totally ordered domains that intervals can be built over. Every
 * element has a well-defined successor (except at the end), which is what
 * makes touching intervals mergeable.
 */

pub trait Discrete : Copy + Ord {
    fn succ(self) -> Option<Self>;

    /// Number of elements in the inclusive range [lower; upper].
    fn count(lower: Self, upper: Self) -> u64;

    /// The element `n` steps after `self`, if it exists.
    fn advance(self, n: u64) -> Option<Self>;
}

/**
 * Unicode scalar values. The surrogate block is not part of the domain, so
 * it is skipped when stepping and counting.
 */

const SURROGATE_LOW: u32 = 0xD800;
const SURROGATE_HIGH: u32 = 0xDFFF;
const SURROGATE_COUNT: u64 = (SURROGATE_HIGH - SURROGATE_LOW + 1) as u64;

impl Discrete for char {
    fn succ(self) -> Option<Self> {
        match self as u32 {
            0xD7FF => Some('\u{E000}'),
            x => std::char::from_u32(x + 1),
        }
    }

    fn count(lower: Self, upper: Self) -> u64 {
        if lower > upper {
            return 0;
        }
        let (l, u) = (lower as u32, upper as u32);
        let raw = (u - l) as u64 + 1;
        if l < SURROGATE_LOW && u > SURROGATE_HIGH {
            raw - SURROGATE_COUNT
        }
        else {
            raw
        }
    }

    fn advance(self, n: u64) -> Option<Self> {
        let start = self as u64;
        let mut target = start.checked_add(n)?;
        if start < SURROGATE_LOW as u64 && target >= SURROGATE_LOW as u64 {
            target += SURROGATE_COUNT;
        }
        if target > u32::MAX as u64 {
            return None;
        }
        std::char::from_u32(target as u32)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
