use super::*;
use crate::LongNumberError;

impl LongNumber {
    /// A zero value whose fraction region is fully allocated for `fraction_bits`.
    pub fn zero(fraction_bits: u32) -> Self {
        let mut number = LongNumber { chunks: Vec::new(), sign: Sign::Positive, fraction_bits };
        number.allocate_fraction();
        number
    }

    /// The declared number of bits after the binary point.
    #[inline]
    pub fn fraction_bits(&self) -> u32 {
        self.fraction_bits
    }

    /// The sign of this value. Zero is always [`Sign::Positive`].
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// How many low-order chunks are reserved for the fraction part.
    #[inline]
    pub(crate) fn fraction_chunks(&self) -> usize {
        self.fraction_bits.div_ceil(CHUNK_BITS) as usize
    }

    /// Grows the buffer with zero chunks until the whole fraction region exists. Idempotent;
    /// called by every constructor.
    pub(crate) fn allocate_fraction(&mut self) {
        let fraction_chunks = self.fraction_chunks();
        while self.chunks.len() < fraction_chunks {
            self.chunks.push(0);
        }
    }

    /// Pops most-significant zero chunks until the whole part is minimal. Idempotent; never
    /// shrinks into the fraction region.
    pub(crate) fn truncate_whole_part(&mut self) {
        let fraction_chunks = self.fraction_chunks();
        while self.chunks.len() > fraction_chunks && self.chunks.last() == Some(&0) {
            self.chunks.pop();
        }
    }

    /// Resets a zero-magnitude value to the canonical non-negative zero. Every operation that
    /// builds or rewrites a value funnels through here, so `-0` is never observable.
    pub(crate) fn canonicalize(&mut self) {
        if self.sign == Sign::Negative && self.is_zero() {
            self.sign = Sign::Positive;
        }
    }

    /// Whether the significant bits of the magnitude are all zero.
    pub fn is_zero(&self) -> bool {
        (0..self.chunks.len()).all(|i| self.masked_chunk(i) == 0)
    }

    /// `chunks[index]` with insignificant bits cleared.
    ///
    /// Bits of chunk 0 below the top `fraction_bits % 32` are beyond the declared precision;
    /// comparison and rendering must treat them as don't-care.
    pub(crate) fn masked_chunk(&self, index: usize) -> u32 {
        let partial_bits = self.fraction_bits % CHUNK_BITS;
        if index != 0 || partial_bits == 0 {
            return self.chunks[index];
        }
        let mask = (1u32 << partial_bits) - 1;
        self.chunks[0] & (mask << (CHUNK_BITS - partial_bits))
    }

    /// As [`Self::masked_chunk`], but bounds-checked for external callers.
    pub fn get_chunk(&self, index: usize) -> Result<u32, LongNumberError> {
        if index >= self.chunks.len() {
            return Err(LongNumberError::ChunkIndexOutOfRange { index, len: self.chunks.len() });
        }
        Ok(self.masked_chunk(index))
    }

    /// Clears every insignificant bit of the fraction region, leaving only the value the declared
    /// precision can represent.
    pub(crate) fn clear_insignificant_bits(&mut self) {
        let partial_bits = self.fraction_bits % CHUNK_BITS;
        if partial_bits != 0 && !self.chunks.is_empty() {
            let mask = (1u32 << partial_bits) - 1;
            self.chunks[0] &= mask << (CHUNK_BITS - partial_bits);
        }
    }

    /// Raw bit `index` of the magnitude buffer (bit 0 = least significant bit of chunk 0).
    /// Reads past the end of the buffer are zero.
    pub(crate) fn get_bit(&self, index: usize) -> bool {
        let chunk_index = index / CHUNK_BITS as usize;
        let bit_index = index % CHUNK_BITS as usize;
        match self.chunks.get(chunk_index) {
            Some(chunk) => (chunk >> bit_index) & 1 != 0,
            None => false,
        }
    }

    /// Sets raw bit `index` of the magnitude buffer, growing it if needed.
    pub(crate) fn set_bit(&mut self, index: usize) {
        let chunk_index = index / CHUNK_BITS as usize;
        let bit_index = index % CHUNK_BITS as usize;
        if chunk_index >= self.chunks.len() {
            self.chunks.resize(chunk_index + 1, 0);
        }
        self.chunks[chunk_index] |= 1 << bit_index;
    }

    /// The absolute value of `self`.
    pub fn abs(&self) -> Self {
        let mut result = self.clone();
        result.sign = Sign::Positive;
        result
    }
}

impl Default for LongNumber {
    /// Zero at [`DEFAULT_FRACTION_BITS`] of precision.
    fn default() -> Self {
        Self::zero(DEFAULT_FRACTION_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_chunks() {
        assert_eq!(LongNumber::zero(0).fraction_chunks(), 0);
        assert_eq!(LongNumber::zero(1).fraction_chunks(), 1);
        assert_eq!(LongNumber::zero(32).fraction_chunks(), 1);
        assert_eq!(LongNumber::zero(33).fraction_chunks(), 2);
        assert_eq!(LongNumber::zero(96).fraction_chunks(), 3);
        assert_eq!(LongNumber::zero(100).fraction_chunks(), 4);
    }

    #[test]
    fn zero_allocates_fraction_region() {
        assert_eq!(LongNumber::zero(0).chunks.len(), 0);
        assert_eq!(LongNumber::zero(96).chunks.len(), 3);
        assert!(LongNumber::zero(96).is_zero());
    }

    #[test]
    fn allocate_and_truncate_are_idempotent() {
        let mut x = LongNumber::zero(64);
        x.chunks.push(7);
        x.chunks.push(0);
        x.chunks.push(0);
        x.truncate_whole_part();
        assert_eq!(x.chunks, [0, 0, 7]);
        x.truncate_whole_part();
        assert_eq!(x.chunks, [0, 0, 7]);
        x.allocate_fraction();
        assert_eq!(x.chunks, [0, 0, 7]);
    }

    #[test]
    fn truncate_never_shrinks_fraction_region() {
        let mut x = LongNumber::zero(64);
        x.truncate_whole_part();
        assert_eq!(x.chunks.len(), 2);
    }

    #[test]
    fn masked_chunk_hides_insignificant_bits() {
        let mut x = LongNumber::zero(3);
        // Top 3 bits of chunk 0 are significant, the rest are junk.
        x.chunks[0] = 0b101 << 29 | 0xabcd;
        assert_eq!(x.masked_chunk(0), 0b101 << 29);
        assert_eq!(x.get_chunk(0).unwrap(), 0b101 << 29);
        // A whole chunk is never masked.
        x.chunks.push(0xffff_ffff);
        assert_eq!(x.masked_chunk(1), 0xffff_ffff);
    }

    #[test]
    fn get_chunk_out_of_range() {
        let x = LongNumber::zero(32);
        assert_eq!(
            x.get_chunk(1),
            Err(crate::LongNumberError::ChunkIndexOutOfRange { index: 1, len: 1 }),
        );
    }

    #[test]
    fn is_zero_ignores_junk_bits() {
        let mut x = LongNumber::zero(3);
        x.chunks[0] = 0x1fff_ffff; // all below the 3 significant bits
        assert!(x.is_zero());
        x.chunks[0] |= 1 << 29;
        assert!(!x.is_zero());
    }

    #[test]
    fn canonicalize_makes_zero_positive() {
        let mut x = LongNumber::zero(32);
        x.sign = Sign::Negative;
        x.canonicalize();
        assert_eq!(x.sign, Sign::Positive);

        let mut y = LongNumber::zero(32);
        y.chunks[0] = 1 << 31;
        y.sign = Sign::Negative;
        y.canonicalize();
        assert_eq!(y.sign, Sign::Negative);
    }

    #[test]
    fn bit_access() {
        let mut x = LongNumber::zero(0);
        assert!(!x.get_bit(100));
        x.set_bit(37);
        assert_eq!(x.chunks, [0, 1 << 5]);
        assert!(x.get_bit(37));
        assert!(!x.get_bit(36));
    }
}
