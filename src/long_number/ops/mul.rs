use super::*;

impl LongNumber {
    /// Multiplies two values, normalizing the product to
    /// `max(self.fraction_bits, other.fraction_bits)`.
    ///
    /// The schoolbook double loop accumulates 64-bit chunk products at an intermediate precision
    /// of `(fraction_chunks(a) + fraction_chunks(b)) * 32` bits, so the raw product is exact; the
    /// final precision reduction then drops excess low chunks (truncation toward zero, not
    /// rounding to nearest).
    pub fn mul(&self, other: &Self) -> Self {
        let product_chunks = self.fraction_chunks() + other.fraction_chunks();
        let working_bits = (product_chunks as u32).saturating_mul(CHUNK_BITS);
        let max_precision = self.fraction_bits.max(other.fraction_bits);

        let mut result = Self::zero(working_bits);
        result.sign = self.sign.combine(other.sign);

        if self.is_zero() || other.is_zero() {
            result.set_precision(max_precision);
            return result;
        }
        result.chunks.resize(self.chunks.len() + other.chunks.len(), 0);

        for i in 0..self.chunks.len() {
            let mut carry = 0u32;
            for j in 0..other.chunks.len() {
                let product = u64::from(self.chunks[i]) * u64::from(other.chunks[j])
                    + u64::from(carry)
                    + u64::from(result.chunks[i + j]);
                result.chunks[i + j] = product as u32;
                carry = (product >> CHUNK_BITS) as u32;
            }
            // The slot above the partial product is still untouched at this point, so the final
            // carry cannot overflow it.
            result.chunks[i + other.chunks.len()] += carry;
        }
        result.truncate_whole_part();
        result.set_precision(max_precision);
        result
    }
}

use core::ops::{Mul, MulAssign};
super::mk_ops! {Mul, MulAssign, mul, mul_assign}
