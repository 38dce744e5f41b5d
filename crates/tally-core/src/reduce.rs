//! Slice reductions over caller-borrowed buffers.
//!
//! Every function borrows its input for the duration of the call and
//! retains nothing past return. The median sorts a private scratch copy;
//! nothing the caller owns is modified. Summation accumulates left to
//! right in the input's order.

use crate::error::ReduceError;

/// Sum of an `f64` sequence. The empty sum is `0.0`.
#[must_use]
pub fn sum_f64(xs: &[f64]) -> f64 {
    xs.iter().copied().sum()
}

/// Sum of an `f32` sequence. The empty sum is `0.0`.
#[must_use]
pub fn sum_f32(xs: &[f32]) -> f32 {
    xs.iter().copied().sum()
}

/// Arithmetic mean. Undefined on the empty sequence.
pub fn mean(xs: &[f64]) -> Result<f64, ReduceError> {
    if xs.is_empty() {
        return Err(ReduceError::EmptyInput);
    }
    Ok(sum_f64(xs) / xs.len() as f64)
}

/// Population standard deviation (divides by `n`, not `n - 1`).
///
/// Undefined on the empty sequence.
pub fn std_dev(xs: &[f64]) -> Result<f64, ReduceError> {
    let mu = mean(xs)?;
    let mut acc = 0.0f64;
    for &x in xs {
        let d = x - mu;
        acc += d * d;
    }
    Ok((acc / xs.len() as f64).sqrt())
}

/// Median under IEEE-754 total ordering ([`f64::total_cmp`]).
///
/// Even-length inputs average the two middle elements. NaNs are ordered by
/// `total_cmp`, never invented by the reduction itself. Undefined on the
/// empty sequence.
pub fn median(xs: &[f64]) -> Result<f64, ReduceError> {
    if xs.is_empty() {
        return Err(ReduceError::EmptyInput);
    }
    let mut scratch = xs.to_vec();
    scratch.sort_by(f64::total_cmp);
    let n = scratch.len();
    if n % 2 == 1 {
        Ok(scratch[n / 2])
    } else {
        Ok((scratch[n / 2 - 1] + scratch[n / 2]) * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sum_of_known_values() {
        assert_eq!(sum_f64(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(sum_f64(&[]), 0.0);
        assert_eq!(sum_f32(&[0.5, 0.25, 0.25]), 1.0);
        assert_eq!(sum_f32(&[]), 0.0);
    }

    #[test]
    fn mean_of_known_values() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
        assert_eq!(mean(&[]), Err(ReduceError::EmptyInput));
    }

    #[test]
    fn std_dev_of_known_values() {
        // Population std of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(std_dev(&xs), Ok(2.0));
        assert_eq!(std_dev(&[3.5]), Ok(0.0));
        assert_eq!(std_dev(&[]), Err(ReduceError::EmptyInput));
    }

    #[test]
    fn median_odd_even_and_single() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
        assert_eq!(median(&[7.0]), Ok(7.0));
        assert_eq!(median(&[]), Err(ReduceError::EmptyInput));
    }

    #[test]
    fn median_with_nan_does_not_panic() {
        // Positive NaN sorts above every finite value under total_cmp, so
        // the middle element stays finite here.
        assert_eq!(median(&[f64::NAN, 1.0, 2.0]), Ok(2.0));
    }

    fn bounded(len: impl Into<proptest::collection::SizeRange>) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1.0e6..1.0e6, len)
    }

    proptest! {
        #[test]
        fn sum_is_order_insensitive_within_tolerance(xs in bounded(0..64usize)) {
            let forward = sum_f64(&xs);
            let mut rev = xs.clone();
            rev.reverse();
            prop_assert!((forward - sum_f64(&rev)).abs() <= 1e-5);
        }

        #[test]
        fn mean_lies_within_input_range(xs in bounded(1..64usize)) {
            let m = mean(&xs).unwrap();
            let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
        }

        #[test]
        fn std_dev_is_nonnegative(xs in bounded(1..64usize)) {
            prop_assert!(std_dev(&xs).unwrap() >= 0.0);
        }

        #[test]
        fn median_of_odd_length_is_an_input_element(xs in bounded(1..64usize)) {
            prop_assume!(xs.len() % 2 == 1);
            let m = median(&xs).unwrap();
            prop_assert!(xs.contains(&m));
        }
    }
}
