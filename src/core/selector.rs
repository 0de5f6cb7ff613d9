// src/core/selector.rs
//
// The weighting model and the weighted-random draw. Both are pure so they
// can be tested apart from the engine that composes them.

use rand::Rng;

/// Score-derived multiplier: `max(1, 5 - score)`.
///
/// Scores of 4 and above collapse to the floor of 1, so mastered items keep
/// appearing at their baseline frequency. Negative scores grow the multiplier
/// linearly with no ceiling; an item at -20 is sampled 25 times its baseline.
pub fn score_multiplier(score: i32) -> u32 {
    (5i64 - i64::from(score)).max(1) as u32
}

/// Sampling weight for one item under the current score.
pub fn weight(frequency_weight: u32, score: i32) -> f64 {
    f64::from(frequency_weight) * f64::from(score_multiplier(score))
}

/// Draws one key from an ordered candidate list by weight. Linear remainder
/// walk: uniform r in [0, total), subtract weights until one covers r. If
/// floating-point drift exhausts the list, the last candidate wins. O(n),
/// which is fine for catalogs of a few hundred phrases.
pub fn sample_one_with_rng<'a, R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[(&'a str, f64)],
) -> Option<&'a str> {
    let &(last, _) = candidates.last()?;
    let total: f64 = candidates.iter().map(|&(_, w)| w).sum();
    if !(total > 0.0) {
        return Some(last);
    }
    let mut remainder = rng.gen_range(0.0..total);
    for &(key, w) in candidates {
        if remainder < w {
            return Some(key);
        }
        remainder -= w;
    }
    Some(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn multiplier_floors_at_one_for_mastered_scores() {
        for score in [4, 5, 7, 10] {
            assert_eq!(score_multiplier(score), 1);
        }
    }

    #[test]
    fn multiplier_grows_linearly_below_five() {
        assert_eq!(score_multiplier(0), 5);
        assert_eq!(score_multiplier(3), 2);
        assert_eq!(score_multiplier(-1), 6);
        assert_eq!(score_multiplier(-20), 25);
    }

    #[test]
    fn weight_is_frequency_times_multiplier() {
        assert_eq!(weight(10, 0), 50.0);
        assert_eq!(weight(10, 10), 10.0);
        assert_eq!(weight(100, -5), 1000.0);
    }

    #[test]
    fn single_candidate_always_wins() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates = [("ni3hao3", 12.5)];
        for _ in 0..100 {
            assert_eq!(sample_one_with_rng(&mut rng, &candidates), Some("ni3hao3"));
        }
    }

    #[test]
    fn empty_candidate_list_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample_one_with_rng(&mut rng, &[]), None);
    }

    #[test]
    fn draws_follow_the_weight_ratio() {
        // a: freq 10 at score 0 -> weight 50; b: freq 10 at score 10 -> 10.
        let candidates = [("a", 50.0), ("b", 10.0)];
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 6000;
        let mut a_hits = 0;
        for _ in 0..draws {
            if sample_one_with_rng(&mut rng, &candidates) == Some("a") {
                a_hits += 1;
            }
        }
        // Expected 5/6 of draws, i.e. 5000. Allow a wide band.
        assert!((4700..5300).contains(&a_hits), "a_hits = {}", a_hits);
    }
}
