//! Seeded randomness for the simulation.
//!
//! Every operation that draws randomness is generic over `R: rand::Rng`, so any seeded generator
//! can be injected. [`rng_from_seed`] builds the generator used by default: reproducible runs come
//! from reusing the same seed, independent runs from varying it.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Creates the generator that drives a simulation run. Two generators built from the same seed
/// produce identical populations and identical round updates.
pub fn rng_from_seed(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Rolls a percentage chance in `[0, 100]`. A chance of `0` never succeeds and `100` always does.
pub fn roll_percent<R: Rng>(rng: &mut R, chance: f64) -> bool {
    rng.random::<f64>() * 100.0 < chance
}

/// Draws a symptom-onset countdown uniformly from `[0, incubation_period)`.
pub(crate) fn draw_symptom_countdown<R: Rng>(rng: &mut R, incubation_period: u32) -> u32 {
    rng.random_range(0..incubation_period)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::RngCore;

    #[test]
    fn same_seed_same_stream() {
        let mut a = rng_from_seed(42);
        let mut b = rng_from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seed_different_stream() {
        let mut a = rng_from_seed(42);
        let mut b = rng_from_seed(88);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn roll_percent_extremes() {
        let mut rng = rng_from_seed(123);
        for _ in 0..1000 {
            assert!(!roll_percent(&mut rng, 0.0));
            assert!(roll_percent(&mut rng, 100.0));
        }
    }

    #[test]
    fn symptom_countdown_in_range() {
        let mut rng = rng_from_seed(7);
        for _ in 0..1000 {
            assert!(draw_symptom_countdown(&mut rng, 5) < 5);
        }
    }
}
