//! This crate provides an arbitrary-precision, fixed-point, signed binary number type
//! ([`LongNumber`]) and its arithmetic.
//!
//! # Introduction
//!
//! A [`LongNumber`] stores its magnitude as a little-endian sequence of 32-bit chunks, of which a
//! declared number of low-order *fraction bits* sit after the binary point. Magnitude is
//! unbounded; fractional precision is fixed per value and can be changed explicitly (and lossily)
//! with [`LongNumber::with_precision`].
//!
//! On top of the chunked representation the crate implements full arithmetic (addition,
//! subtraction, schoolbook multiplication, restoring binary long division, logical shifts),
//! derived operations (binary exponentiation, Newton-Raphson square root), a total sign-aware
//! ordering that works across mismatched precisions, lossless binary-string parsing, and decimal
//! rendering with a caller-chosen digit count.
//!
//! # Usage
//!
//! ```
//! use longnum::LongNumber;
//!
//! // Parse a binary literal with 3 fraction bits and render it in decimal.
//! let x = LongNumber::from_binary_str("10.101", 3)?;
//! assert_eq!(x.to_decimal_string(3), "2.625");
//!
//! // The usual operators work on owned values and references alike.
//! let y = LongNumber::from_int(4, 0);
//! assert_eq!((&x + &y).to_decimal_string(3), "6.625");
//! assert_eq!(y.sqrt()?, LongNumber::from_int(2, 0));
//! # Ok::<(), longnum::LongNumberError>(())
//! ```
//!
//! The [`pi`] module is a worked consumer of the arithmetic surface: it computes π with the
//! Chudnovsky series at any requested precision. The `pi` binary exposes it on the command line.
//!
//! This crate includes benchmarks; run them with `cargo bench`.

use thiserror::Error;

mod long_number;

pub mod harness;
pub mod pi;

pub use long_number::{DEFAULT_FRACTION_BITS, LongNumber, Sign};

/// The error type for every fallible [`LongNumber`] operation.
///
/// All failures are synchronous and immediate; nothing is retried or swallowed. Precision loss
/// (shrinking with [`LongNumber::with_precision`], post-multiplication truncation, division's
/// fixed working precision) is specified behavior, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LongNumberError {
    /// The input string had no characters at all.
    #[error("input string is empty")]
    EmptyInput,

    /// A character other than `0` or `1` appeared in a digit position.
    #[error("invalid character {0:?}: binary digits must match [01]")]
    InvalidDigit(char),

    /// The divisor had zero magnitude.
    #[error("division by zero")]
    DivisionByZero,

    /// The square root operand was negative.
    #[error("cannot take the square root of a negative number")]
    SqrtOfNegative,

    /// A chunk index was past the end of the buffer.
    #[error("chunk index {index} out of range for {len} chunks")]
    ChunkIndexOutOfRange { index: usize, len: usize },
}

/// Number of cases for each proptest-based test.
#[cfg(test)]
pub(crate) const PROPTEST_CASES: u32 = 512;
