use super::*;

impl LongNumber {
    /// Shifts the magnitude `bits` places up. Chunk-granularity movement first (zero chunks
    /// inserted at the low end), then a sub-chunk shift carrying between adjacent chunks; a carry
    /// out of the top grows the buffer by one chunk.
    pub(crate) fn shl_in_place(&mut self, bits: u32) {
        if bits == 0 {
            return;
        }
        let chunk_shift = (bits / CHUNK_BITS) as usize;
        let bit_shift = bits % CHUNK_BITS;

        if chunk_shift > 0 {
            self.chunks.splice(0..0, core::iter::repeat_n(0, chunk_shift));
        }
        if bit_shift == 0 {
            return;
        }
        let mut carry = 0u32;
        for chunk in &mut self.chunks {
            let next_carry = *chunk >> (CHUNK_BITS - bit_shift);
            *chunk = (*chunk << bit_shift) | carry;
            carry = next_carry;
        }
        if carry != 0 {
            self.chunks.push(carry);
        }
    }

    /// Shifts the magnitude `bits` places down. Removing more chunks than exist clears the value
    /// back to its minimum fraction-allocated zero state.
    pub(crate) fn shr_in_place(&mut self, bits: u32) {
        if bits == 0 {
            return;
        }
        let chunk_shift = (bits / CHUNK_BITS) as usize;
        let bit_shift = bits % CHUNK_BITS;

        if chunk_shift >= self.chunks.len() {
            self.chunks.clear();
            self.allocate_fraction();
            self.canonicalize();
            return;
        }
        self.chunks.drain(..chunk_shift);
        self.allocate_fraction();
        if bit_shift != 0 {
            let mut carry = 0u32;
            for chunk in self.chunks.iter_mut().rev() {
                let next_carry = *chunk << (CHUNK_BITS - bit_shift);
                *chunk = (*chunk >> bit_shift) | carry;
                carry = next_carry;
            }
        }
        self.truncate_whole_part();
        self.canonicalize();
    }

    /// Returns `self` shifted `bits` places up; a negative count shifts down instead.
    pub fn shift_left(&self, bits: i32) -> Self {
        let mut result = self.clone();
        if bits < 0 {
            result.shr_in_place(bits.unsigned_abs());
        } else {
            result.shl_in_place(bits as u32);
        }
        result
    }

    /// Returns `self` shifted `bits` places down; a negative count shifts up instead.
    pub fn shift_right(&self, bits: i32) -> Self {
        let mut result = self.clone();
        if bits < 0 {
            result.shl_in_place(bits.unsigned_abs());
        } else {
            result.shr_in_place(bits as u32);
        }
        result
    }
}

impl core::ops::Shl<i32> for &LongNumber {
    type Output = LongNumber;

    fn shl(self, bits: i32) -> LongNumber {
        self.shift_left(bits)
    }
}

impl core::ops::Shl<i32> for LongNumber {
    type Output = LongNumber;

    fn shl(self, bits: i32) -> LongNumber {
        self.shift_left(bits)
    }
}

impl core::ops::Shr<i32> for &LongNumber {
    type Output = LongNumber;

    fn shr(self, bits: i32) -> LongNumber {
        self.shift_right(bits)
    }
}

impl core::ops::Shr<i32> for LongNumber {
    type Output = LongNumber;

    fn shr(self, bits: i32) -> LongNumber {
        self.shift_right(bits)
    }
}

impl core::ops::ShlAssign<i32> for LongNumber {
    fn shl_assign(&mut self, bits: i32) {
        if bits < 0 {
            self.shr_in_place(bits.unsigned_abs());
        } else {
            self.shl_in_place(bits as u32);
        }
    }
}

impl core::ops::ShrAssign<i32> for LongNumber {
    fn shr_assign(&mut self, bits: i32) {
        if bits < 0 {
            self.shl_in_place(bits.unsigned_abs());
        } else {
            self.shr_in_place(bits as u32);
        }
    }
}
