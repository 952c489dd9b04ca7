use super::*;
use crate::LongNumberError;

/// 2^32 as a float, the base used when decomposing native numbers into chunks.
const CHUNK_BASE: f64 = (1u64 << CHUNK_BITS) as f64;

impl LongNumber {
    /// Builds a value from a native float, keeping `fraction_bits` bits after the binary point.
    ///
    /// The whole part is peeled into chunks by repeated modulo/divide by 2^32; the fraction part
    /// by repeated multiply-by-2^32 and truncate, filling from the most significant fraction
    /// chunk down until `fraction_bits` bits are placed or the remainder reaches zero. Anything
    /// an `f64` cannot represent exactly is lost before this constructor ever sees it; non-finite
    /// inputs construct zero.
    pub fn from_f64(value: f64, fraction_bits: u32) -> Self {
        let mut number = Self::zero(fraction_bits);
        if !value.is_finite() || value == 0.0 {
            return number;
        }
        number.sign = if value < 0.0 { Sign::Negative } else { Sign::Positive };

        let mut whole = value.abs().trunc();
        let mut fraction = value.abs().fract();

        while whole >= 1.0 {
            number.chunks.push((whole % CHUNK_BASE) as u32);
            whole /= CHUNK_BASE;
        }

        let fraction_chunks = number.fraction_chunks();
        let mut placed = 0;
        while fraction != 0.0 && placed < fraction_chunks {
            fraction *= CHUNK_BASE;
            let chunk = fraction as u32;
            number.chunks[fraction_chunks - placed - 1] = chunk;
            fraction -= f64::from(chunk);
            placed += 1;
        }

        number.canonicalize();
        number
    }

    /// Builds a value from a native integer, keeping `fraction_bits` (all-zero) bits after the
    /// binary point. Exact for the full `i64` range.
    pub fn from_int(value: i64, fraction_bits: u32) -> Self {
        let mut number = Self::zero(fraction_bits);
        number.sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        let mut magnitude = value.unsigned_abs();
        while magnitude != 0 {
            number.chunks.push(magnitude as u32);
            magnitude >>= CHUNK_BITS;
        }
        number
    }

    /// Parses a binary-digit literal `[-]digits[.digits]`, keeping `fraction_bits` bits after the
    /// binary point. Fractional digits beyond `fraction_bits` are truncated, never rounded.
    ///
    /// # Errors
    ///
    /// [`LongNumberError::EmptyInput`] for `""`, and [`LongNumberError::InvalidDigit`] for any
    /// character other than `0` or `1` in a digit position (including a second `-` or `.`).
    pub fn from_binary_str(input: &str, fraction_bits: u32) -> Result<Self, LongNumberError> {
        if input.is_empty() {
            return Err(LongNumberError::EmptyInput);
        }
        let (sign, digits) = match input.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, input),
        };
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };
        validate_digits(whole)?;
        validate_digits(fraction)?;

        let mut number = LongNumber { chunks: Vec::new(), sign, fraction_bits };

        // The fraction converts first so its chunks land at the low end of the buffer. Digits are
        // right-padded to a chunk boundary, which puts fraction bit 1 at the top of the most
        // significant fraction chunk.
        let kept = &fraction[..fraction.len().min(fraction_bits as usize)];
        number.push_digit_chunks(&pad_right(kept));
        let fraction_chunks = number.fraction_chunks();
        if number.chunks.len() > fraction_chunks {
            number.chunks.drain(..number.chunks.len() - fraction_chunks);
        } else {
            let missing = fraction_chunks - number.chunks.len();
            number.chunks.splice(0..0, core::iter::repeat_n(0, missing));
        }

        // The whole part is left-padded instead, so its low 32 digits fill the chunk right above
        // the fraction region.
        number.push_digit_chunks(&pad_left(whole));
        number.truncate_whole_part();
        number.canonicalize();
        Ok(number)
    }

    /// Converts a validated, chunk-aligned run of binary digits (most significant digit first)
    /// and appends the resulting chunks, least significant chunk first.
    fn push_digit_chunks(&mut self, digits: &str) {
        debug_assert!(digits.len() % CHUNK_BITS as usize == 0);
        if digits.is_empty() {
            return;
        }
        let mut current = 0u32;
        for (position, digit) in digits.bytes().rev().enumerate() {
            let bit = position as u32 % CHUNK_BITS;
            if bit == 0 && position != 0 {
                self.chunks.push(current);
                current = 0;
            }
            if digit == b'1' {
                current |= 1 << bit;
            }
        }
        self.chunks.push(current);
    }
}

fn validate_digits(digits: &str) -> Result<(), LongNumberError> {
    match digits.chars().find(|c| *c != '0' && *c != '1') {
        Some(bad) => Err(LongNumberError::InvalidDigit(bad)),
        None => Ok(()),
    }
}

fn pad_right(digits: &str) -> String {
    let target = digits.len().div_ceil(CHUNK_BITS as usize) * CHUNK_BITS as usize;
    let mut padded = String::with_capacity(target);
    padded.push_str(digits);
    padded.extend(core::iter::repeat_n('0', target - digits.len()));
    padded
}

fn pad_left(digits: &str) -> String {
    let target = digits.len().div_ceil(CHUNK_BITS as usize) * CHUNK_BITS as usize;
    let mut padded = String::with_capacity(target);
    padded.extend(core::iter::repeat_n('0', target - digits.len()));
    padded.push_str(digits);
    padded
}

impl From<f64> for LongNumber {
    /// As [`LongNumber::from_f64`] at [`DEFAULT_FRACTION_BITS`].
    fn from(value: f64) -> Self {
        Self::from_f64(value, DEFAULT_FRACTION_BITS)
    }
}

impl From<i64> for LongNumber {
    /// As [`LongNumber::from_int`] at [`DEFAULT_FRACTION_BITS`].
    fn from(value: i64) -> Self {
        Self::from_int(value, DEFAULT_FRACTION_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LongNumberError;

    #[test]
    fn from_f64_integer() {
        let x = LongNumber::from_f64(5.0, 0);
        assert_eq!(x.chunks, [5]);
        assert_eq!(x.sign, Sign::Positive);
        assert_eq!(x.fraction_bits, 0);
    }

    #[test]
    fn from_f64_multi_chunk_whole() {
        // 2^32 + 5 decomposes into two chunks.
        let x = LongNumber::from_f64(4294967301.0, 0);
        assert_eq!(x.chunks, [5, 1]);
    }

    #[test]
    fn from_f64_fraction_fills_top_down() {
        // 2.625 = 10.101 in binary; fraction bit 1 sits at the top of chunk 0.
        let x = LongNumber::from_f64(2.625, 3);
        assert_eq!(x.chunks, [0b101 << 29, 2]);
        assert_eq!(x.to_binary_string(), "10.101");
    }

    #[test]
    fn from_f64_negative_and_zero() {
        let x = LongNumber::from_f64(-2.5, 1);
        assert_eq!(x.sign, Sign::Negative);
        assert_eq!(x.to_binary_string(), "-10.1");

        assert_eq!(LongNumber::from_f64(0.0, 64).sign, Sign::Positive);
        assert!(LongNumber::from_f64(-0.0, 64).is_zero());
        // A magnitude that rounds away entirely still canonicalizes to +0.
        assert_eq!(LongNumber::from_f64(-0.25, 0).sign, Sign::Positive);
    }

    #[test]
    fn from_f64_non_finite_is_zero() {
        assert!(LongNumber::from_f64(f64::NAN, 32).is_zero());
        assert!(LongNumber::from_f64(f64::INFINITY, 32).is_zero());
    }

    #[test]
    fn from_int_matches_from_f64() {
        for value in [0i64, 1, -1, 5, 1 << 40, -(1 << 40), 640_320] {
            assert_eq!(LongNumber::from_int(value, 16), LongNumber::from_f64(value as f64, 16));
        }
    }

    #[test]
    fn from_int_extremes() {
        let x = LongNumber::from_int(i64::MIN, 0);
        assert_eq!(x.sign, Sign::Negative);
        assert_eq!(x.chunks, [0, 1 << 31]);
        assert_eq!(LongNumber::from_int(0, 0).chunks, [] as [u32; 0]);
    }

    #[test]
    fn parse_simple() {
        let x = LongNumber::from_binary_str("10.101", 3).unwrap();
        assert_eq!(x.chunks, [0b101 << 29, 2]);
        let y = LongNumber::from_binary_str("-1", 0).unwrap();
        assert_eq!((y.sign, y.chunks.as_slice()), (Sign::Negative, &[1u32][..]));
    }

    #[test]
    fn parse_truncates_excess_fraction_digits() {
        let x = LongNumber::from_binary_str("10.10111", 3).unwrap();
        assert_eq!(x.to_binary_string(), "10.101");
    }

    #[test]
    fn parse_pads_short_fraction() {
        // One digit into a two-chunk fraction region.
        let x = LongNumber::from_binary_str("0.1", 64).unwrap();
        assert_eq!(x.chunks, [0, 1 << 31]);
    }

    #[test]
    fn parse_long_whole_part() {
        let digits = "1".repeat(40);
        let x = LongNumber::from_binary_str(&digits, 0).unwrap();
        assert_eq!(x.chunks, [0xffff_ffff, 0xff]);
    }

    #[test]
    fn parse_strips_leading_zero_chunks() {
        let x = LongNumber::from_binary_str("00000000000000000000000000000000001", 0).unwrap();
        assert_eq!(x.chunks, [1]);
        let zero = LongNumber::from_binary_str("0.0", 48).unwrap();
        assert_eq!(zero.chunks, [0, 0]);
        assert!(zero.is_zero());
    }

    #[test]
    fn parse_rejects_invalid_digits() {
        assert_eq!(
            LongNumber::from_binary_str("20.1", 3),
            Err(LongNumberError::InvalidDigit('2')),
        );
        assert_eq!(
            LongNumber::from_binary_str("10.2", 3),
            Err(LongNumberError::InvalidDigit('2')),
        );
        assert_eq!(
            LongNumber::from_binary_str("1.0.1", 3),
            Err(LongNumberError::InvalidDigit('.')),
        );
        assert_eq!(
            LongNumber::from_binary_str("1-0", 0),
            Err(LongNumberError::InvalidDigit('-')),
        );
        // Digits past the fraction cap are still digit positions.
        assert_eq!(
            LongNumber::from_binary_str("1.111x", 3),
            Err(LongNumberError::InvalidDigit('x')),
        );
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(LongNumber::from_binary_str("", 3), Err(LongNumberError::EmptyInput));
    }

    #[test]
    fn parse_degenerate_zeroes() {
        // No digits around the separators still parses as canonical zero.
        for input in [".", "-", "-."] {
            let x = LongNumber::from_binary_str(input, 8).unwrap();
            assert!(x.is_zero(), "{input:?}");
            assert_eq!(x.sign, Sign::Positive, "{input:?}");
        }
        assert_eq!(LongNumber::from_binary_str("-0.0", 8).unwrap().sign, Sign::Positive);
    }
}
