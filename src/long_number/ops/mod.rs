use super::*;

/// Addition (mixed signs are rewritten as subtraction).
mod add;

/// Subtraction and unary negation.
mod sub;

/// Schoolbook multiplication.
mod mul;

/// Restoring binary long division.
mod div;

/// Logical shifts by a signed bit count.
mod shift;

/// Helper macro implementing an operator for all combinations of value and reference, plus both
/// compound-assignment forms, over the pure named method. Compound assignment is only ever this
/// reassignment sugar, never a second implementation.
macro_rules! mk_ops {
    ($trait:ident, $trait_assign:ident, $method:ident, $method_assign:ident) => {
        impl $trait<LongNumber> for LongNumber {
            type Output = LongNumber;

            #[inline]
            fn $method(self, rhs: LongNumber) -> LongNumber {
                LongNumber::$method(&self, &rhs)
            }
        }

        impl $trait<&LongNumber> for LongNumber {
            type Output = LongNumber;

            #[inline]
            fn $method(self, rhs: &LongNumber) -> LongNumber {
                LongNumber::$method(&self, rhs)
            }
        }

        impl $trait<LongNumber> for &LongNumber {
            type Output = LongNumber;

            #[inline]
            fn $method(self, rhs: LongNumber) -> LongNumber {
                LongNumber::$method(self, &rhs)
            }
        }

        impl $trait<&LongNumber> for &LongNumber {
            type Output = LongNumber;

            #[inline]
            fn $method(self, rhs: &LongNumber) -> LongNumber {
                LongNumber::$method(self, rhs)
            }
        }

        impl $trait_assign<LongNumber> for LongNumber {
            #[inline]
            fn $method_assign(&mut self, rhs: LongNumber) {
                *self = LongNumber::$method(self, &rhs)
            }
        }

        impl $trait_assign<&LongNumber> for LongNumber {
            #[inline]
            fn $method_assign(&mut self, rhs: &LongNumber) {
                *self = LongNumber::$method(self, rhs)
            }
        }
    };
}

pub(crate) use mk_ops;
