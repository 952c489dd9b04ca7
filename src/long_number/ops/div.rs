use super::*;
use crate::LongNumberError;

impl LongNumber {
    /// Divides `self` by `other`, normalizing the quotient to
    /// `max(self.fraction_bits, other.fraction_bits)`.
    ///
    /// Both operands move to a common working precision of at least `max(max_precision, 96)`
    /// bits, rounded up to a whole number of chunks so
    /// that every bit of the working window is significant, with anything below their declared
    /// precision cleared. The dividend is then left-shifted by its full fraction width, which
    /// turns the problem into exact integer long division:
    ///
    ///     remainder = remainder << 1 | next dividend bit
    ///     if remainder >= divisor { remainder -= divisor; set quotient bit }
    ///
    /// walking from the most significant dividend bit down. The quotient keeps the product of
    /// the operand signs.
    ///
    /// # Errors
    ///
    /// [`LongNumberError::DivisionByZero`] if `other` has zero magnitude.
    pub fn try_div(&self, other: &Self) -> Result<Self, LongNumberError> {
        if other.is_zero() {
            return Err(LongNumberError::DivisionByZero);
        }
        let max_precision = self.fraction_bits.max(other.fraction_bits);
        let working_bits =
            max_precision.max(MIN_WORKING_BITS).next_multiple_of(CHUNK_BITS);

        let mut dividend = self.abs();
        dividend.clear_insignificant_bits();
        dividend.set_precision(working_bits);
        let mut divisor = other.abs();
        divisor.clear_insignificant_bits();
        divisor.set_precision(working_bits);

        dividend.shl_in_place(dividend.fraction_chunks() as u32 * CHUNK_BITS);

        let mut quotient = Self::zero(working_bits);
        quotient.sign = self.sign.combine(other.sign);
        let mut remainder = Self::zero(working_bits);

        for bit in (0..dividend.chunks.len() * CHUNK_BITS as usize).rev() {
            remainder.shl_in_place(1);
            if dividend.get_bit(bit) {
                remainder.chunks[0] |= 1;
            }
            if remainder >= divisor {
                remainder = remainder.sub(&divisor);
                quotient.set_bit(bit);
            }
        }

        quotient.set_precision(max_precision);
        quotient.truncate_whole_part();
        quotient.canonicalize();
        Ok(quotient)
    }
}

impl core::ops::Div<&LongNumber> for &LongNumber {
    type Output = LongNumber;

    /// As [`LongNumber::try_div`].
    ///
    /// # Panics
    ///
    /// Panics if `rhs` has zero magnitude, like primitive integer division does.
    fn div(self, rhs: &LongNumber) -> LongNumber {
        match LongNumber::try_div(self, rhs) {
            Ok(quotient) => quotient,
            Err(error) => panic!("{error}"),
        }
    }
}

impl core::ops::Div<LongNumber> for &LongNumber {
    type Output = LongNumber;

    fn div(self, rhs: LongNumber) -> LongNumber {
        self / &rhs
    }
}

impl core::ops::Div<&LongNumber> for LongNumber {
    type Output = LongNumber;

    fn div(self, rhs: &LongNumber) -> LongNumber {
        &self / rhs
    }
}

impl core::ops::Div<LongNumber> for LongNumber {
    type Output = LongNumber;

    fn div(self, rhs: LongNumber) -> LongNumber {
        &self / &rhs
    }
}

impl core::ops::DivAssign<&LongNumber> for LongNumber {
    fn div_assign(&mut self, rhs: &LongNumber) {
        *self = &*self / rhs;
    }
}

impl core::ops::DivAssign<LongNumber> for LongNumber {
    fn div_assign(&mut self, rhs: LongNumber) {
        *self = &*self / &rhs;
    }
}
