use super::*;

impl LongNumber {
    /// Raises `self` to a non-negative integer power by binary exponentiation, squaring an
    /// accumulator and multiplying it into the result on each set exponent bit. The result keeps
    /// the base's fractional precision; `pow(0)` is one and `pow(1)` is `self`.
    pub fn pow(&self, mut exponent: u32) -> Self {
        if exponent == 1 {
            return self.clone();
        }
        let mut result = Self::from_int(1, self.fraction_bits);
        if exponent == 0 {
            return result;
        }
        let mut accumulator = self.clone();
        while exponent != 0 {
            if exponent & 1 != 0 {
                result = result.mul(&accumulator);
            }
            accumulator = accumulator.mul(&accumulator);
            exponent >>= 1;
        }
        result
    }
}
