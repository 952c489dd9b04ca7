//! Computing π with the Chudnovsky series, as a consumer of [`LongNumber`] arithmetic.
//!
//! This calculates in fixed point, using the value passed in for the binary precision.
//! Credits: <https://www.craig-wood.com/nick/articles/pi-chudnovsky/>

use crate::{LongNumber, LongNumberError};

/// Extra fraction bits the series carries internally, so that per-operation truncation noise
/// stays far below the precision handed back to the caller.
const GUARD_BITS: u32 = 64;

/// Binary fraction bits needed to honor `decimal_digits` digits after the decimal point.
/// Slightly above log2(10), as the exact ratio leaves no slack for the final truncation.
pub fn decimal_to_binary_precision(decimal_digits: u32) -> u32 {
    (f64::from(decimal_digits) * 3.35).ceil() as u32
}

/// Computes π to `precision` binary fraction bits with the Chudnovsky series
///
///   426880 √10005 / π = Σₖ (6k)! (13591409 + 545140134 k) / ((3k)! (k!)³ (-640320)³ᵏ)
///
/// in the rearranged recurrence form: each term `a_k` comes from the previous one by integer
/// multiplications and one division, and the series ends once `a_k` underflows the working
/// precision to zero.
pub fn calculate_pi(precision: u32) -> Result<LongNumber, LongNumberError> {
    let working = precision.saturating_add(GUARD_BITS);

    let one = LongNumber::from_int(1, 0);
    let two = LongNumber::from_int(2, 0);
    let five = LongNumber::from_int(5, 0);
    let six = LongNumber::from_int(6, 0);

    let mut k = one.clone();
    let mut a_k = LongNumber::from_int(1, working);
    let mut a_sum = a_k.clone();
    let mut b_sum = LongNumber::from_int(0, working);

    let c = LongNumber::from_int(640_320, 0);
    let c3_over_24 = c.pow(3).try_div(&LongNumber::from_int(24, 0))?;

    while !a_k.is_zero() {
        let six_k = &k * &six;
        a_k *= -((&six_k - &five) * (&two * &k - &one) * (&six_k - &one));
        a_k = a_k.try_div(&(k.pow(3) * &c3_over_24))?;
        a_sum += &a_k;
        b_sum += &k * &a_k;
        k += &one;
    }

    let total = &a_sum * &LongNumber::from_int(13_591_409, 0)
        + &b_sum * &LongNumber::from_int(545_140_134, 0);
    let root = LongNumber::from_int(10_005, 0).with_precision(working).sqrt()?;
    let pi = (LongNumber::from_int(426_880, 0) * root).try_div(&total)?;
    Ok(pi.with_precision(precision))
}
