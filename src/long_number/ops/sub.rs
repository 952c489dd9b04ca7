use super::*;
use core::cmp::Ordering;

impl LongNumber {
    /// Subtracts `other` from `self` at `max(self.fraction_bits, other.fraction_bits)` of
    /// precision.
    ///
    /// Mixed signs are rewritten as `a - b = a + (-b)`. For a common sign, the larger-magnitude
    /// operand is found with the total order (undoing its negative-sign inversion), both operands
    /// are aligned to the common precision, and the smaller is subtracted chunk by chunk with a
    /// borrow. The result takes `+` if `a` was the (signed) larger operand, `-` otherwise.
    pub fn sub(&self, other: &Self) -> Self {
        if self.sign != other.sign {
            return self.add(&-other);
        }

        let max_precision = self.fraction_bits.max(other.fraction_bits);
        let ordering = self.cmp(other);
        if ordering == Ordering::Equal {
            return Self::zero(max_precision);
        }
        let magnitude_ordering = match self.sign {
            Sign::Positive => ordering,
            Sign::Negative => ordering.reverse(),
        };
        let (larger, smaller) = match magnitude_ordering {
            Ordering::Greater => (self, other),
            _ => (other, self),
        };
        let larger = larger.with_precision(max_precision);
        let smaller = smaller.with_precision(max_precision);

        let mut result = Self::zero(max_precision);
        result.sign = if ordering == Ordering::Greater { Sign::Positive } else { Sign::Negative };
        result.chunks.resize(larger.chunks.len(), 0);

        let mut borrow = 0i64;
        for i in 0..larger.chunks.len() {
            let mut difference = i64::from(larger.chunks[i]) - borrow;
            if let Some(chunk) = smaller.chunks.get(i) {
                difference -= i64::from(*chunk);
            }
            if difference < 0 {
                borrow = 1;
                difference += 1i64 << CHUNK_BITS;
            } else {
                borrow = 0;
            }
            result.chunks[i] = difference as u32;
        }
        result.truncate_whole_part();
        result
    }
}

use core::ops::{Sub, SubAssign};
super::mk_ops! {Sub, SubAssign, sub, sub_assign}

impl core::ops::Neg for &LongNumber {
    type Output = LongNumber;

    /// Flips the sign; zero stays non-negative.
    fn neg(self) -> LongNumber {
        let mut result = self.clone();
        result.sign = result.sign.flipped();
        result.canonicalize();
        result
    }
}

impl core::ops::Neg for LongNumber {
    type Output = LongNumber;

    fn neg(self) -> LongNumber {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PROPTEST_CASES;
    use proptest::prelude::*;

    fn parse(input: &str, fraction_bits: u32) -> LongNumber {
        LongNumber::from_binary_str(input, fraction_bits).unwrap()
    }

    #[test]
    fn basic_borrowing() {
        let a = parse(&format!("1{}", "0".repeat(32)), 0); // 2^32
        let b = parse("1", 0);
        assert_eq!((&a - &b).chunks, [0xffff_ffff]);
    }

    #[test]
    fn smaller_minus_larger_is_negative() {
        assert_eq!(&parse("11", 0) - &parse("101", 0), parse("-10", 0));
        assert_eq!(&parse("0.001", 3) - &parse("0.1", 1), parse("-0.011", 3));
    }

    #[test]
    fn negative_pairs() {
        // -5 - -3 = -2: the larger magnitude is on the left even though it orders lower.
        assert_eq!(&parse("-101", 0) - &parse("-11", 0), parse("-10", 0));
        // -3 - -5 = 2.
        assert_eq!(&parse("-11", 0) - &parse("-101", 0), parse("10", 0));
    }

    #[test]
    fn mixed_signs_become_addition() {
        assert_eq!(&parse("101", 0) - &parse("-11", 0), parse("1000", 0));
        assert_eq!(&parse("-101", 0) - &parse("11", 0), parse("-1000", 0));
    }

    #[test]
    fn equal_operands_give_canonical_zero() {
        let a = parse("10.101", 3);
        let b = parse("10.1010", 7);
        let difference = &a - &b;
        assert!(difference.is_zero());
        assert_eq!(difference.sign(), Sign::Positive);
        assert_eq!(difference.fraction_bits(), 7);
    }

    #[test]
    fn aligns_narrow_whole_operand() {
        // 5 - 3.5 must align 5 up to the wider precision, not truncate 3.5 down.
        let five = parse("101", 0);
        let three_and_a_half = parse("11.1", 1);
        assert_eq!(&five - &three_and_a_half, parse("1.1", 1));
    }

    #[test]
    fn negate() {
        assert_eq!(-&parse("10.1", 1), parse("-10.1", 1));
        assert_eq!(-parse("-10.1", 1), parse("10.1", 1));
        let zero = -LongNumber::zero(32);
        assert_eq!(zero.sign(), Sign::Positive);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

        /// Subtraction of junk-free operands is exact.
        #[test]
        fn matches_rational_difference(
            a in LongNumber::cases_proptest(),
            b in LongNumber::cases_proptest(),
        ) {
            prop_assert_eq!((&a - &b).to_rational(), a.to_rational() - b.to_rational());
        }

        /// `(a - b) + b == a` once everything sits at the common precision.
        #[test]
        fn subtraction_consistency(
            a in LongNumber::cases_proptest(),
            b in LongNumber::cases_proptest(),
        ) {
            prop_assert_eq!(&(&a - &b) + &b, a.clone());
        }

        /// `x - x == 0` and `0 - x == -x`.
        #[test]
        fn self_inverse(x in LongNumber::cases_proptest()) {
            prop_assert!((&x - &x).is_zero());
            prop_assert_eq!(&LongNumber::zero(0) - &x, -&x);
        }
    }
}
