use super::*;

impl LongNumber {
    /// Changes the declared precision to `fraction_bits`, resizing the fraction region at the low
    /// end of the buffer.
    ///
    /// Growing prepends zero chunks, preserving the numeric value exactly; shrinking removes
    /// low-order chunks, silently discarding the dropped fractional bits (truncation, no
    /// rounding). Widening within the same chunk (say 90 to 96 bits) only promotes bits that were
    /// already stored below the significance cutoff.
    pub fn set_precision(&mut self, fraction_bits: u32) {
        let old_chunks = self.fraction_chunks();
        self.fraction_bits = fraction_bits;
        let new_chunks = self.fraction_chunks();
        if new_chunks > old_chunks {
            self.chunks.splice(0..0, core::iter::repeat_n(0, new_chunks - old_chunks));
        } else if new_chunks < old_chunks {
            self.chunks.drain(..old_chunks - new_chunks);
        }
        self.canonicalize();
    }

    /// As [`Self::set_precision`], on a copy.
    pub fn with_precision(&self, fraction_bits: u32) -> Self {
        let mut result = self.clone();
        result.set_precision(fraction_bits);
        result
    }
}
