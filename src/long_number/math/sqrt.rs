use super::*;
use crate::LongNumberError;

impl LongNumber {
    /// The square root of `self` by Newton-Raphson iteration, at `self`'s precision.
    ///
    /// The operand's working precision is raised to at least 96 bits so the iteration has
    /// fraction room to converge in, then
    ///
    ///     guess = (guess + operand / guess) >> 1
    ///
    /// runs from `guess = 1` until two successive guesses compare equal. With truncating
    /// division the iteration walks down to the truncated root and sticks there, so the loop
    /// terminates after at most a number of steps bounded by the working precision. The result
    /// is re-expressed at the operand's original precision.
    ///
    /// # Errors
    ///
    /// [`LongNumberError::SqrtOfNegative`] if `self` is negative.
    pub fn sqrt(&self) -> Result<Self, LongNumberError> {
        if self.sign == Sign::Negative {
            return Err(LongNumberError::SqrtOfNegative);
        }
        if self.is_zero() {
            return Ok(Self::zero(self.fraction_bits));
        }
        let mut operand = self.clone();
        if operand.fraction_bits < MIN_WORKING_BITS {
            operand.set_precision(MIN_WORKING_BITS);
        }

        let mut guess = Self::from_int(1, operand.fraction_bits);
        let mut previous_guess = Self::zero(operand.fraction_bits);
        while guess != previous_guess {
            previous_guess = guess.clone();
            guess = guess.add(&operand.try_div(&guess)?);
            guess.shr_in_place(1);
        }

        guess.truncate_whole_part();
        guess.set_precision(self.fraction_bits);
        Ok(guess)
    }
}
