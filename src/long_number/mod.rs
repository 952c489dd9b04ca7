//! This module and its submodules contain the chunked fixed-point number type and all of its
//! operations.
//!
//! Some notation used in the comments:
//!
//!   - **Chunk**: one 32-bit unsigned segment of the magnitude. Chunks are stored
//!     least-significant-first (little-endian by chunk).
//!   - **Fraction chunks**: the `ceil(fraction_bits / 32)` low-order chunks reserved for the part
//!     of the number after the binary point. Fraction bit `k` (1-indexed after the point) lives at
//!     bit `32 * fraction_chunks - k` of the raw buffer, so the partially-used chunk is always
//!     chunk 0 and its unused low bits are insignificant.
//!   - **Whole part**: every chunk above the fraction chunks.

/// Width of one magnitude chunk, in bits.
pub(crate) const CHUNK_BITS: u32 = u32::BITS;

/// Floor for the working precision of division and square root, so that integer-shaped operands
/// still come out with an accurate fractional part.
pub(crate) const MIN_WORKING_BITS: u32 = 96;

/// Fraction bits given to values built through the blanket `From` conversions.
pub const DEFAULT_FRACTION_BITS: u32 = 96;

/// The sign of a [`LongNumber`].
///
/// Zero is always [`Positive`](Sign::Positive); every constructing operation canonicalizes a
/// zero-magnitude result, so a negative zero is never observable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub(crate) fn flipped(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Sign of a product of two values with these signs.
    pub(crate) fn combine(self, other: Sign) -> Sign {
        if self == other { Sign::Positive } else { Sign::Negative }
    }
}

/// An arbitrary-precision fixed-point signed binary number.
///
/// The magnitude is a base-2^32 positional number over `chunks`; the low `fraction_chunks()`
/// chunks hold the `fraction_bits` bits after the binary point. The whole part is kept minimal
/// (no most-significant zero chunks beyond the fraction region), and the fraction region is
/// always fully allocated, even for zero.
///
/// `LongNumber` has value semantics: clones are deep, no two values share a buffer, and every
/// binary operator produces a new value. Compound assignment (`+=` and friends) is sugar for
/// reassigning the pure operator's result.
#[derive(Clone)]
pub struct LongNumber {
    /// Magnitude, least significant chunk first.
    chunks: Vec<u32>,
    /// Meaningful only for nonzero magnitude; zero is canonically positive.
    sign: Sign,
    /// Bits of precision kept after the binary point.
    fraction_bits: u32,
}

/// Chunk bookkeeping primitives and masked chunk access.
mod basics;

/// Construction from floats, integers, and binary-digit strings.
mod convert;

/// Total sign-aware ordering, usable across mismatched precisions.
mod cmp;

/// Changing the number of fraction bits of an existing value.
mod precision;

/// Rendering to binary and decimal strings.
mod fmt;

/// Derived operations (integer exponentiation, square root).
mod math;

/// The arithmetic core: addition, subtraction, multiplication, division, shifts.
mod ops;
