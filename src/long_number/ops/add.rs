use super::*;

impl LongNumber {
    /// Adds two values at `max(self.fraction_bits, other.fraction_bits)` of precision.
    ///
    /// Same-sign operands are aligned to the common precision and summed chunk by chunk with a
    /// free-running carry; a carry out of the top position appends one chunk. Mixed signs are
    /// subtraction in disguise: `-a + b = b - a` and `a + -b = a - b`.
    pub fn add(&self, other: &Self) -> Self {
        if self.sign != other.sign {
            if self.sign == Sign::Negative {
                return other.sub(&-self);
            }
            return self.sub(&-other);
        }

        let max_precision = self.fraction_bits.max(other.fraction_bits);
        let a = self.with_precision(max_precision);
        let b = other.with_precision(max_precision);

        let mut result = Self::zero(max_precision);
        result.sign = self.sign;
        let longest = a.chunks.len().max(b.chunks.len());
        result.chunks.resize(longest, 0);

        let mut carry = 0u64;
        for i in 0..longest {
            let mut sum = carry;
            if let Some(chunk) = a.chunks.get(i) {
                sum += u64::from(*chunk);
            }
            if let Some(chunk) = b.chunks.get(i) {
                sum += u64::from(*chunk);
            }
            result.chunks[i] = sum as u32;
            carry = sum >> CHUNK_BITS;
        }
        if carry != 0 {
            result.chunks.push(carry as u32);
        }
        result
    }
}

use core::ops::{Add, AddAssign};
super::mk_ops! {Add, AddAssign, add, add_assign}
