use super::*;
use core::fmt;

impl LongNumber {
    /// Renders the significant bits as a binary literal.
    ///
    /// Whole-part bits stream from the most significant chunk down with leading zeros
    /// suppressed; an all-zero whole part renders as `"0"` when there is no fraction and as
    /// nothing before the point otherwise. The fraction renders to exactly `fraction_bits`
    /// digits.
    pub fn to_binary_string(&self) -> String {
        let mut output = String::new();
        if self.sign == Sign::Negative {
            output.push('-');
        }
        let fraction_chunks = self.fraction_chunks();

        let mut seen_one = false;
        for index in (fraction_chunks..self.chunks.len()).rev() {
            let chunk = self.chunks[index];
            for bit in (0..CHUNK_BITS).rev() {
                let set = (chunk >> bit) & 1 != 0;
                seen_one |= set;
                if seen_one {
                    output.push(if set { '1' } else { '0' });
                }
            }
        }

        if self.fraction_bits == 0 {
            if output.is_empty() {
                output.push('0');
            }
            return output;
        }
        output.push('.');

        let mut emitted = 0;
        'fraction: for index in (0..fraction_chunks).rev() {
            let chunk = self.chunks[index];
            for bit in (0..CHUNK_BITS).rev() {
                if emitted == self.fraction_bits {
                    break 'fraction;
                }
                output.push(if (chunk >> bit) & 1 != 0 { '1' } else { '0' });
                emitted += 1;
            }
        }
        output
    }

    /// Renders the value in decimal with up to `digits_after_decimal` fractional digits.
    ///
    /// The whole part comes from repeated division by ten, collecting remainders least
    /// significant first; the fraction from repeated multiplication by ten, peeling one whole
    /// digit per step until the digit budget is spent or the remainder hits zero. Fractional
    /// truncation never rounds. Bits beyond the declared precision are ignored.
    pub fn to_decimal_string(&self, digits_after_decimal: u32) -> String {
        let ten = Self::from_int(10, 0);

        let mut whole_part = self.with_precision(0).abs();
        let mut fraction_part = self.abs();
        fraction_part.chunks.truncate(fraction_part.fraction_chunks());
        fraction_part.clear_insignificant_bits();

        let mut output = String::new();
        while !whole_part.is_zero() {
            let quotient = &whole_part / &ten;
            let remainder = whole_part.sub(&quotient.mul(&ten));
            debug_assert!(remainder < ten);
            let digit = remainder.chunks.first().copied().unwrap_or(0);
            output.push((b'0' + digit as u8) as char);
            whole_part = quotient;
        }
        if output.is_empty() {
            output.push('0');
        }
        if self.sign == Sign::Negative {
            output.push('-');
        }
        // Digits were collected least significant first and the sign marker last.
        output = output.chars().rev().collect();

        if self.fraction_bits == 0 || digits_after_decimal == 0 || fraction_part.is_zero() {
            return output;
        }
        output.push('.');

        let mut emitted = 0;
        while emitted < digits_after_decimal && !fraction_part.is_zero() {
            fraction_part = fraction_part.mul(&ten);
            let whole_digit = fraction_part.with_precision(0);
            debug_assert!(whole_digit < ten);
            let digit = whole_digit.chunks.first().copied().unwrap_or(0);
            output.push((b'0' + digit as u8) as char);
            fraction_part = fraction_part.sub(&whole_digit);
            emitted += 1;
        }
        output
    }
}

impl fmt::Display for LongNumber {
    /// Decimal rendering; `{:.N}` chooses the fractional digit count, defaulting to as many
    /// digits as the declared binary precision can hold.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = match f.precision() {
            Some(digits) => digits as u32,
            // log10(2) ≈ 0.30103
            None => (u64::from(self.fraction_bits) * 30103 / 100000) as u32,
        };
        f.write_str(&self.to_decimal_string(digits))
    }
}

impl fmt::Debug for LongNumber {
    /// Raw little-endian chunk dump with a `|` marking the fraction/whole boundary.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fraction_chunks = self.fraction_chunks();
        write!(f, "LongNumber {{ chunks: [")?;
        for (index, chunk) in self.chunks.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            if index == fraction_chunks {
                write!(f, "| ")?;
            }
            write!(f, "{chunk:#010x}")?;
        }
        if self.chunks.len() == fraction_chunks {
            write!(f, " |")?;
        }
        write!(
            f,
            "], sign: {:?}, fraction_bits: {} }}",
            self.sign, self.fraction_bits,
        )
    }
}
