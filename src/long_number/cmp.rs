use super::*;
use core::cmp::Ordering;

impl LongNumber {
    /// Compares magnitudes only, ignoring signs.
    ///
    /// Works across mismatched precisions without aligning either operand: whole-part chunk
    /// counts decide first, then chunks are walked most-significant-first by position, with the
    /// shorter operand padded with conceptual zero chunks. Insignificant fraction bits are
    /// masked out on both sides.
    pub(crate) fn cmp_magnitude(&self, other: &Self) -> Ordering {
        let whole_chunks_self = self.chunks.len() - self.fraction_chunks();
        let whole_chunks_other = other.chunks.len() - other.fraction_chunks();
        if whole_chunks_self != whole_chunks_other {
            return whole_chunks_self.cmp(&whole_chunks_other);
        }

        let longest = self.chunks.len().max(other.chunks.len());
        for position in 0..longest {
            let chunk_self = match self.chunks.len().checked_sub(position + 1) {
                Some(index) => self.masked_chunk(index),
                None => 0,
            };
            let chunk_other = match other.chunks.len().checked_sub(position + 1) {
                Some(index) => other.masked_chunk(index),
                None => 0,
            };
            if chunk_self != chunk_other {
                return chunk_self.cmp(&chunk_other);
            }
        }
        Ordering::Equal
    }
}

impl Ord for LongNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => return Ordering::Less,
            (Sign::Positive, Sign::Negative) => return Ordering::Greater,
            _ => {}
        }
        // For two negative values the magnitude order reverses: more magnitude is further from
        // zero in the negative direction.
        match self.sign {
            Sign::Positive => self.cmp_magnitude(other),
            Sign::Negative => self.cmp_magnitude(other).reverse(),
        }
    }
}

impl PartialOrd for LongNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for LongNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LongNumber {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PROPTEST_CASES;
    use proptest::prelude::*;

    fn parse(input: &str, fraction_bits: u32) -> LongNumber {
        LongNumber::from_binary_str(input, fraction_bits).unwrap()
    }

    #[test]
    fn sign_decides_first() {
        assert!(parse("-10", 0) < parse("1", 0));
        assert!(parse("0.1", 1) > parse("-10", 0));
    }

    #[test]
    fn whole_chunk_count_decides_next() {
        let small = parse("1", 0);
        let big = parse(&format!("1{}", "0".repeat(32)), 0);
        assert!(small < big);
        // ...and reversed for negatives.
        assert!(-small > -big);
    }

    #[test]
    fn negative_order_reverses_magnitude() {
        assert!(parse("-101", 0) < parse("-11", 0));
        assert!(parse("-11", 0) > parse("-101", 0));
        assert!(parse("-0.111", 3) < parse("-0.011", 3));
    }

    #[test]
    fn zero_is_equal_across_precisions() {
        assert_eq!(LongNumber::zero(0), LongNumber::zero(96));
        assert_eq!(parse("0.0", 48), LongNumber::zero(0));
    }

    #[test]
    fn equal_values_at_different_precisions() {
        assert_eq!(parse("10.101", 3), parse("10.1010000", 7));
        assert_eq!(parse("10.101", 3), parse("10.101", 96));
        assert!(parse("10.101", 3) < parse("10.1011", 4));
    }

    #[test]
    fn fraction_only_comparison() {
        assert!(parse("0.011", 3) < parse("0.1", 1));
        assert!(parse("0.1", 1) < parse("1", 0));
        assert!(parse("0.000000000000000000000000000000001", 33) > LongNumber::zero(33));
    }

    #[test]
    fn junk_bits_do_not_affect_ordering() {
        let mut a = parse("1.101", 3);
        let b = parse("1.101", 3);
        a.chunks[0] |= 0xffff; // below the 3 significant fraction bits
        assert_eq!(a, b);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

        /// The ordering agrees with the exact rational value of each operand.
        #[test]
        fn matches_rational_order(
            a in LongNumber::cases_proptest(),
            b in LongNumber::cases_proptest(),
        ) {
            prop_assert_eq!(a.cmp(&b), a.to_rational().cmp(&b.to_rational()));
        }

        /// Exactly one of `<`, `==`, `>` holds, and the order is antisymmetric.
        #[test]
        fn total_order(
            a in LongNumber::cases_proptest(),
            b in LongNumber::cases_proptest(),
        ) {
            let forward = a.cmp(&b);
            let backward = b.cmp(&a);
            prop_assert_eq!(forward, backward.reverse());
            prop_assert_eq!(a == b, forward == core::cmp::Ordering::Equal);
        }
    }
}
