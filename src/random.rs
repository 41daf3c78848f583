//! Uniform sampling helpers.

use rand::Rng;
use std::fmt;

/// Errors from range sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// The lower bound was greater than the upper bound.
    InvalidRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::InvalidRange { min, max } => {
                write!(f, "invalid range: min {min} is greater than max {max}")
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Samples a value uniformly distributed over the closed interval `[min, max]`.
///
/// Any single draw satisfies `min <= v <= max`; over repeated sampling the
/// draws approach both endpoints. `min == max` always yields that value.
///
/// # Errors
///
/// Returns [`RangeError::InvalidRange`] if `min > max`. NaN bounds are out of
/// contract.
pub fn random_double_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
) -> Result<f64, RangeError> {
    if min > max {
        return Err(RangeError::InvalidRange { min, max });
    }
    Ok(min + rng.random::<f64>() * (max - min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_invalid_range_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = random_double_in_range(&mut rng, 1.0, -1.0);
        assert_eq!(
            result,
            Err(RangeError::InvalidRange { min: 1.0, max: -1.0 })
        );
    }

    #[test]
    fn test_degenerate_range_returns_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = random_double_in_range(&mut rng, 2.5, 2.5).unwrap();
            assert!((v - 2.5).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_samples_within_bounds_and_reach_endpoints() {
        let mut rng = StdRng::seed_from_u64(7);
        let (min, max) = (-3.5, 4.25);
        let mut saw_near_min = false;
        let mut saw_near_max = false;

        for _ in 0..10_000 {
            let v = random_double_in_range(&mut rng, min, max).unwrap();
            assert!((min..=max).contains(&v), "value {v} out of bounds");
            if (v - min).abs() < 1e-3 {
                saw_near_min = true;
            }
            if (v - max).abs() < 1e-3 {
                saw_near_max = true;
            }
        }

        assert!(
            saw_near_min || saw_near_max,
            "expected at least one draw near an endpoint over 10k samples"
        );
    }
}
