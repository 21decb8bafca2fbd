//! Ownership assignment policy for rooms and parking spaces.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Attaches an owner with probability `rate`, drawing uniformly from the
/// pool. An empty pool always leaves the asset unowned.
///
/// The occupancy flag must be derived from the returned value
/// (`OccupancyStatus::for_owner`), never sampled on its own.
pub fn assign_owner(rng: &mut StdRng, owners: &[String], rate: f64) -> Option<String> {
    if owners.is_empty() || !rng.gen_bool(rate) {
        return None;
    }
    owners.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn pool() -> Vec<String> {
        vec!["u1".to_string(), "u2".to_string(), "u3".to_string()]
    }

    #[test]
    fn test_zero_rate_never_assigns() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(assign_owner(&mut rng, &pool(), 0.0).is_none());
        }
    }

    #[test]
    fn test_full_rate_always_assigns_from_pool() {
        let mut rng = StdRng::seed_from_u64(2);
        let pool = pool();
        for _ in 0..100 {
            let owner = assign_owner(&mut rng, &pool, 1.0).expect("rate 1.0 must assign");
            assert!(pool.contains(&owner));
        }
    }

    #[test]
    fn test_empty_pool_never_assigns() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(assign_owner(&mut rng, &[], 1.0).is_none());
        }
    }
}
