use num_traits::{Num, NumCast};
use std::fmt::Debug;

/// A trait representing numeric types usable as matrix elements.
///
/// It bounds the types (like `i64`, `f64`) that can flow through the generic
/// element-wise kernels, concatenation and casting. `Num` supplies the
/// arithmetic operators plus `zero()`/`one()`, `NumCast` supplies checked
/// conversions between element types.
pub trait Element:
    Num // Includes Zero, One, Add, Sub, Mul, Div, Rem
    + NumCast
    + PartialEq
    + Debug
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Raises `self` to `exponent`, element by element.
    ///
    /// Integers use exact integer powers over the full width of `exponent`.
    /// A negative exponent yields the truncated reciprocal
    /// `1 / self^|exponent|`, which is `0` whenever `|self| >= 2`; a zero
    /// base with a negative exponent panics like any other integer division
    /// by zero. Floats use `powf`.
    ///
    /// # Panics
    /// Integer types panic when a non-negative power does not fit the type.
    fn pow_elem(self, exponent: Self) -> Self;
}

macro_rules! impl_element_signed {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn pow_elem(self, exponent: Self) -> Self {
                    match self {
                        // 0^-n is an integer division by zero
                        0 if exponent < 0 => 1 / self,
                        0 => if exponent == 0 { 1 } else { 0 },
                        1 => 1,
                        -1 => if exponent % 2 == 0 { 1 } else { -1 },
                        _ => {
                            let power = u32::try_from(exponent.unsigned_abs())
                                .ok()
                                .and_then(|magnitude| self.checked_pow(magnitude));
                            match power {
                                // |self| >= 2, so the reciprocal truncates to 0 on overflow too
                                Some(power) if exponent < 0 => 1 / power,
                                None if exponent < 0 => 0,
                                Some(power) => power,
                                None => panic!(
                                    "attempt to raise {} to the power {} with overflow",
                                    self, exponent
                                ),
                            }
                        }
                    }
                }
            }
        )*
    };
}

macro_rules! impl_element_unsigned {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn pow_elem(self, exponent: Self) -> Self {
                    match self {
                        0 => if exponent == 0 { 1 } else { 0 },
                        1 => 1,
                        _ => u32::try_from(exponent)
                            .ok()
                            .and_then(|magnitude| self.checked_pow(magnitude))
                            .unwrap_or_else(|| {
                                panic!(
                                    "attempt to raise {} to the power {} with overflow",
                                    self, exponent
                                )
                            }),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_element_float {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn pow_elem(self, exponent: Self) -> Self {
                    self.powf(exponent)
                }
            }
        )*
    };
}

impl_element_signed!(i32, i64);
impl_element_unsigned!(u32, u64);
impl_element_float!(f32, f64);
