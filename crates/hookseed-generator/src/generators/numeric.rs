//! Numeric value generators.

use rand::Rng;

/// Smallest generated amount, in cents.
pub const MIN_AMOUNT: i64 = 1_000;
/// Largest generated amount, in cents.
pub const MAX_AMOUNT: i64 = 50_000;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    if min >= max {
        return min;
    }
    rng.random_range(min..=max)
}

/// Generate a payment amount in cents.
pub fn generate_amount<R: Rng>(rng: &mut R) -> i64 {
    generate_int_range(rng, MIN_AMOUNT, MAX_AMOUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_int_range(&mut rng, 10, 20);
            assert!((10..=20).contains(&value));
        }
    }

    #[test]
    fn test_generate_int_range_degenerate() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_int_range(&mut rng, 5, 5), 5);
        assert_eq!(generate_int_range(&mut rng, 9, 3), 9);
    }

    #[test]
    fn test_generate_amount() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let amount = generate_amount(&mut rng);
            assert!((MIN_AMOUNT..=MAX_AMOUNT).contains(&amount));
        }
    }
}
