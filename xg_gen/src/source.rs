/**
 * Random utilities. Every generator owns its source of randomness, there's
 * no process-wide generator behind the scenes.
 */

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;
use rand::{RngCore, SeedableRng};
use rand_pcg::Mcg128Xsl64;

/// The engine used when the caller doesn't bring their own
pub type DefaultSource = Mcg128Xsl64;

pub trait RandomSource {
    /// The next non-negative integer, uniform over [0; 2^63).
    fn next_int(&mut self) -> u64;

    /// A value in [0; n), reduced from `next_int` by modulo. `n` must be
    /// positive.
    fn below(&mut self, n: u64) -> u64 {
        debug_assert!(n > 0);
        self.next_int() % n
    }
}

impl <R> RandomSource for R where R : RngCore {
    fn next_int(&mut self) -> u64 {
        self.next_u64() >> 1
    }
}

/**
 * Sharing one stream between generators, possibly on different threads.
 */

#[derive(Debug)]
pub struct Shared<R>(Arc<Mutex<R>>);

impl <R> Shared<R> {
    pub fn new(source: R) -> Self {
        Shared(Arc::new(Mutex::new(source)))
    }
}

impl <R> Clone for Shared<R> {
    fn clone(&self) -> Self {
        Shared(Arc::clone(&self.0))
    }
}

impl <R> RandomSource for Shared<R> where R : RandomSource {
    fn next_int(&mut self) -> u64 {
        // A panic elsewhere can't leave the stream in a broken state
        let mut source = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        source.next_int()
    }
}

/**
 * Constructing sources.
 */

// Keeps default sources created within the same clock tick apart
static SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn seed_from_system_time() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// A source seeded from the current time.
pub fn default_source() -> DefaultSource {
    let count = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    seeded_source(seed_from_system_time() ^ count.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// A source producing the same sequence for the same seed.
pub fn seeded_source(seed: u64) -> DefaultSource {
    Mcg128Xsl64::seed_from_u64(seed)
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod source_tests {
    use super::*;

    #[test]
    fn next_int_is_non_negative() {
        let mut src = seeded_source(7);
        for _ in 0..1000 {
            assert!(src.next_int() < (1 << 63));
        }
    }

    #[test]
    fn below_stays_in_range() {
        let mut src = seeded_source(7);
        for n in 1..200 {
            assert!(src.below(n) < n);
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = seeded_source(123456);
        let mut b = seeded_source(123456);
        for _ in 0..100 {
            assert_eq!(a.next_int(), b.next_int());
        }
    }

    #[test]
    fn default_sources_diverge() {
        let mut a = default_source();
        let mut b = default_source();
        let xs: Vec<u64> = (0..4).map(|_| a.next_int()).collect();
        let ys: Vec<u64> = (0..4).map(|_| b.next_int()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn shared_handles_continue_one_stream() {
        let mut reference = seeded_source(99);
        let mut first = Shared::new(seeded_source(99));
        let mut second = first.clone();
        assert_eq!(first.next_int(), reference.next_int());
        assert_eq!(second.next_int(), reference.next_int());
        assert_eq!(first.next_int(), reference.next_int());
    }
}
