// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Argument values that can be attached to an [`crate::Attribute`] in a
//! [`crate::StyleSet`].
//!
//! The argument is intentionally loosely typed: the encoder bound to the attribute
//! decides what it accepts, and anything it does not accept degrades to the bare SGR
//! code. See [`crate::encode_palette_index`] and [`crate::encode_truecolor`].

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;

use crate::sizing::MAX_INLINE_COMPONENTS;

/// Inline storage for the channels of a component list argument.
pub type InlineVecComponents = SmallVec<[SgrNumber; MAX_INLINE_COMPONENTS]>;

/// A single numeric value, kept in the form it was supplied in. Integers render as
/// integers and floats render via [`f64`]'s [`Display`] (shortest round-trip form), so
/// no rounding is ever applied when a channel is written out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SgrNumber {
    Int(i64),
    Float(f64),
}

/// An argument for an attribute that expects one.
///
/// - [`SgrArg::Number`]: a palette index, or a packed `0xRRGGBB` truecolor value.
/// - [`SgrArg::Components`]: a list of channels, the last three of which are red, green
///   and blue.
#[derive(Debug, Clone, PartialEq)]
pub enum SgrArg {
    Number(SgrNumber),
    Components(InlineVecComponents),
}

/// Packs three channels into one integer: `((red << 8) + green) << 8) + blue`.
///
/// ```rust
/// use ansi_sgr::rgb_to_packed;
/// assert_eq!(rgb_to_packed(82, 37, 158), 0x52_259E);
/// ```
#[must_use]
pub fn rgb_to_packed(red: u8, green: u8, blue: u8) -> i64 {
    let mut rgb = i64::from(red);
    rgb = (rgb << 8) + i64::from(green);
    rgb = (rgb << 8) + i64::from(blue);
    rgb
}

mod sgr_number_impl {
    use super::{Display, Formatter, Result, SgrNumber};

    impl SgrNumber {
        /// Integer view of the number. Floats are truncated toward zero; `None` if the
        /// float is not finite or does not fit in an [`i64`].
        #[must_use]
        #[allow(clippy::cast_possible_truncation)]
        pub fn truncated(&self) -> Option<i64> {
            match *self {
                SgrNumber::Int(it) => Some(it),
                SgrNumber::Float(it) => {
                    // 2^63, the first f64 past i64::MAX.
                    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
                    let it = it.trunc();
                    (it.is_finite() && (-LIMIT..LIMIT).contains(&it)).then_some(it as i64)
                }
            }
        }

        /// `true` if the number is strictly greater than zero. `NaN` is not.
        #[must_use]
        pub fn is_positive(&self) -> bool {
            match *self {
                SgrNumber::Int(it) => it > 0,
                SgrNumber::Float(it) => it > 0.0,
            }
        }
    }

    impl Display for SgrNumber {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                SgrNumber::Int(it) => write!(f, "{it}"),
                SgrNumber::Float(it) => write!(f, "{it}"),
            }
        }
    }
}

/// These trait implementations allow primitive numbers to be used wherever an
/// [`SgrNumber`] or [`SgrArg`] is expected.
mod convert_into_sgr_number {
    use super::{SgrArg, SgrNumber};

    macro_rules! impl_from_int {
        ($($ty:ty),*) => {$(
            impl From<$ty> for SgrNumber {
                fn from(value: $ty) -> Self { SgrNumber::Int(i64::from(value)) }
            }

            impl From<$ty> for SgrArg {
                fn from(value: $ty) -> Self { SgrArg::Number(value.into()) }
            }
        )*};
    }

    impl_from_int!(u8, u16, u32, i8, i16, i32, i64);

    impl From<f32> for SgrNumber {
        fn from(value: f32) -> Self { SgrNumber::Float(f64::from(value)) }
    }

    impl From<f64> for SgrNumber {
        fn from(value: f64) -> Self { SgrNumber::Float(value) }
    }

    impl From<f32> for SgrArg {
        fn from(value: f32) -> Self { SgrArg::Number(value.into()) }
    }

    impl From<f64> for SgrArg {
        fn from(value: f64) -> Self { SgrArg::Number(value.into()) }
    }

    impl From<SgrNumber> for SgrArg {
        fn from(value: SgrNumber) -> Self { SgrArg::Number(value) }
    }
}

mod convert_into_components {
    use super::{InlineVecComponents, SgrArg, SgrNumber};

    impl<T: Into<SgrNumber>, const N: usize> From<[T; N]> for SgrArg {
        fn from(value: [T; N]) -> Self {
            SgrArg::Components(value.into_iter().map(Into::into).collect())
        }
    }

    impl<T: Into<SgrNumber>> From<Vec<T>> for SgrArg {
        fn from(value: Vec<T>) -> Self {
            SgrArg::Components(value.into_iter().map(Into::into).collect())
        }
    }

    impl<T: Into<SgrNumber> + Copy> From<&[T]> for SgrArg {
        fn from(value: &[T]) -> Self {
            SgrArg::Components(value.iter().copied().map(Into::into).collect())
        }
    }

    impl From<(u8, u8, u8)> for SgrArg {
        fn from((red, green, blue): (u8, u8, u8)) -> Self {
            let it: InlineVecComponents = [red, green, blue]
                .into_iter()
                .map(SgrNumber::from)
                .collect();
            SgrArg::Components(it)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;
    use test_case::test_case;

    use super::*;

    #[test_case(0, 0, 0, 0)]
    #[test_case(255, 255, 255, 0xFF_FFFF)]
    #[test_case(82, 37, 158, 5_383_582)]
    #[test_case(1, 0, 0, 0x01_0000)]
    fn test_rgb_to_packed(red: u8, green: u8, blue: u8, expected: i64) {
        assert_eq!(rgb_to_packed(red, green, blue), expected);
    }

    #[test]
    fn test_number_display_keeps_form() {
        assert_eq!(SgrNumber::Int(82).to_string(), "82");
        assert_eq!(SgrNumber::Float(82.5).to_string(), "82.5");
        assert_eq!(SgrNumber::Float(0.25).to_string(), "0.25");
    }

    #[test_case(SgrNumber::Int(-3), Some(-3))]
    #[test_case(SgrNumber::Float(3.9), Some(3))]
    #[test_case(SgrNumber::Float(-0.5), Some(0))]
    #[test_case(SgrNumber::Float(f64::NAN), None)]
    #[test_case(SgrNumber::Float(f64::INFINITY), None)]
    #[test_case(SgrNumber::Float(1e30), None)]
    fn test_truncated(number: SgrNumber, expected: Option<i64>) {
        assert_eq!(number.truncated(), expected);
    }

    #[test]
    fn test_is_positive() {
        assert!(SgrNumber::Int(1).is_positive());
        assert!(!SgrNumber::Int(0).is_positive());
        assert!(SgrNumber::Float(0.001).is_positive());
        assert!(!SgrNumber::Float(-0.0).is_positive());
        assert!(!SgrNumber::Float(f64::NAN).is_positive());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(SgrArg::from(255_u8), SgrArg::Number(SgrNumber::Int(255)));
        assert_eq!(SgrArg::from(-1_i32), SgrArg::Number(SgrNumber::Int(-1)));
        assert_eq!(SgrArg::from(1.5_f32), SgrArg::Number(SgrNumber::Float(1.5)));
        assert_eq!(
            SgrArg::from([1_i32, 2, 3]),
            SgrArg::Components(smallvec![
                SgrNumber::Int(1),
                SgrNumber::Int(2),
                SgrNumber::Int(3)
            ])
        );
        assert_eq!(
            SgrArg::from(vec![0.5_f64, 1.0]),
            SgrArg::Components(smallvec![SgrNumber::Float(0.5), SgrNumber::Float(1.0)])
        );
        assert_eq!(SgrArg::from((10_u8, 20_u8, 30_u8)), SgrArg::from([10_u8, 20, 30]));
        assert_eq!(SgrArg::from(&[7_i64, 8, 9][..]), SgrArg::from([7_i64, 8, 9]));
    }
}
