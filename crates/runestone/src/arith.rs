//! Checked arithmetic over the unsigned 128-bit domain.
//!
//! Supply accounting must never wrap: a mint schedule whose total does not fit
//! in a `u128` poisons the message instead.

use crate::error::ArithmeticError;

/// Adds two amounts, failing instead of wrapping.
#[inline]
pub fn add(a: u128, b: u128) -> Result<u128, ArithmeticError> {
    a.checked_add(b).ok_or(ArithmeticError::Overflow)
}

/// Multiplies two amounts, failing instead of wrapping.
#[inline]
pub fn mul(a: u128, b: u128) -> Result<u128, ArithmeticError> {
    a.checked_mul(b).ok_or(ArithmeticError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_at_boundary() {
        assert_eq!(add(u128::MAX - 1, 1), Ok(u128::MAX));
        assert_eq!(add(u128::MAX, 1), Err(ArithmeticError::Overflow));
        assert_eq!(add(0, 0), Ok(0));
    }

    #[test]
    fn test_mul_at_boundary() {
        assert_eq!(mul(u128::MAX, 1), Ok(u128::MAX));
        assert_eq!(mul(u128::MAX, 0), Ok(0));
        assert_eq!(mul(u128::MAX / 2 + 1, 2), Err(ArithmeticError::Overflow));
        assert_eq!(mul(1 << 64, 1 << 63), Ok(1 << 127));
        assert_eq!(mul(1 << 64, 1 << 64), Err(ArithmeticError::Overflow));
    }
}
