//! Attract-mode spinner
//!
//! Generates plausible flick velocities from a seeded RNG so an unattended
//! wheel can spin itself. Deterministic per seed - useful for demo kiosks
//! and for reproducing a spin in tests. Not a fairness mechanism.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Velocity range of a convincing flick, degrees per millisecond.
/// The low end still clears a couple of revolutions.
const MIN_VELOCITY: f64 = 0.8;
const MAX_VELOCITY: f64 = 3.5;

/// Seeded source of release velocities
#[derive(Debug, Clone)]
pub struct DemoSpinner {
    rng: Pcg32,
}

impl DemoSpinner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Next simulated release velocity
    pub fn next_velocity(&mut self) -> f64 {
        self.rng.random_range(MIN_VELOCITY..MAX_VELOCITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocities_stay_in_flick_range() {
        let mut spinner = DemoSpinner::new(7);
        for _ in 0..100 {
            let v = spinner.next_velocity();
            assert!((MIN_VELOCITY..MAX_VELOCITY).contains(&v));
        }
    }

    #[test]
    fn test_same_seed_same_spins() {
        let mut a = DemoSpinner::new(99999);
        let mut b = DemoSpinner::new(99999);
        for _ in 0..20 {
            assert_eq!(a.next_velocity(), b.next_velocity());
        }
    }
}
