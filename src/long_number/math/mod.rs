use super::*;

/// Integer exponentiation by squaring.
mod pow;

/// Newton-Raphson square root.
mod sqrt;
