//! Fixed-width scalar arithmetic.

use crate::error::ArithError;

/// Two's-complement wrapping 32-bit addition.
///
/// `i32::MAX + 1` wraps to `i32::MIN`. There is no failure mode.
#[inline]
#[must_use]
pub fn add_wrapping(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Checked 32-bit addition: detects overflow instead of wrapping.
#[inline]
pub fn add_checked(a: i32, b: i32) -> Result<i32, ArithError> {
    a.checked_add(b).ok_or(ArithError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wrapping_matches_contract_examples() {
        assert_eq!(add_wrapping(2, 3), 5);
        assert_eq!(add_wrapping(i32::MAX, 1), i32::MIN);
        assert_eq!(add_wrapping(i32::MIN, -1), i32::MAX);
        assert_eq!(add_wrapping(0, 0), 0);
    }

    #[test]
    fn checked_detects_overflow_at_both_extremes() {
        assert_eq!(add_checked(i32::MAX, 1), Err(ArithError::Overflow));
        assert_eq!(add_checked(i32::MIN, -1), Err(ArithError::Overflow));
        assert_eq!(add_checked(-5, 7), Ok(2));
        assert_eq!(add_checked(i32::MAX, 0), Ok(i32::MAX));
    }

    proptest! {
        #[test]
        fn wrapping_is_addition_mod_2_pow_32(a: i32, b: i32) {
            let expected = ((a as i64 + b as i64) & 0xFFFF_FFFF) as u32 as i32;
            prop_assert_eq!(add_wrapping(a, b), expected);
        }

        #[test]
        fn checked_agrees_with_exact_sum(a: i32, b: i32) {
            let wide = a as i64 + b as i64;
            match add_checked(a, b) {
                Ok(v) => prop_assert_eq!(v as i64, wide),
                Err(ArithError::Overflow) => {
                    prop_assert!(wide > i32::MAX as i64 || wide < i32::MIN as i64);
                }
            }
        }
    }
}
