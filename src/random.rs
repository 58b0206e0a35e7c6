//! Seeded random stream for decorative layout.
//!
//! Every generator that scatters things owns a `RandomStream` built from a
//! fixed seed, so layouts are identical on every run and do not depend on
//! the order generators run in.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A deterministic pseudo-random source.
#[derive(Debug, Clone)]
pub struct RandomStream {
    rng: StdRng,
}

impl RandomStream {
    /// Create a stream from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Integer in `lo..=hi`. Returns `lo` when the range is empty.
    pub fn next_int(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Channel value in `lo..=hi`.
    pub fn next_u8(&mut self, lo: u8, hi: u8) -> u8 {
        self.next_int(lo as i32, hi as i32) as u8
    }

    /// Float in `[0, 1)`.
    pub fn next_float(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_float() < p
    }

    /// Pick one element. `None` for an empty slice.
    pub fn choice<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomStream::seeded(42);
        let mut b = RandomStream::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_int(0, 1000), b.next_int(0, 1000));
            assert_eq!(a.next_float(), b.next_float());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = RandomStream::seeded(1);
        let mut b = RandomStream::seeded(2);
        let xs: Vec<i32> = (0..20).map(|_| a.next_int(0, 1_000_000)).collect();
        let ys: Vec<i32> = (0..20).map(|_| b.next_int(0, 1_000_000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_next_int_inclusive_bounds() {
        let mut rng = RandomStream::seeded(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let v = rng.next_int(-1, 1);
            assert!((-1..=1).contains(&v));
            seen[(v + 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_next_int_empty_range() {
        let mut rng = RandomStream::seeded(7);
        assert_eq!(rng.next_int(5, 5), 5);
        assert_eq!(rng.next_int(9, 3), 9);
    }

    #[test]
    fn test_next_float_range() {
        let mut rng = RandomStream::seeded(3);
        for _ in 0..200 {
            let f = rng.next_float();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn test_choice() {
        let mut rng = RandomStream::seeded(11);
        let options = [1, 1, 1, 2];
        for _ in 0..50 {
            assert!(options.contains(rng.choice(&options).unwrap()));
        }
        let empty: [u8; 0] = [];
        assert_eq!(rng.choice(&empty), None);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = RandomStream::seeded(5);
        assert!((0..50).all(|_| !rng.chance(0.0)));
        assert!((0..50).all(|_| rng.chance(1.0)));
    }
}
