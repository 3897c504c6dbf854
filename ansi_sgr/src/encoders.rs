// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Argument encoders for the color attributes (SGR codes 38 and 48).
//!
//! An encoder turns an [`SgrArg`] into the suffix that follows the attribute's code,
//! eg: `;5;208` or `;2;82;37;158`. Returning `None` means "emit the bare code": invalid
//! input is never an error.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use std::fmt::Write;

use smallstr::SmallString;

use crate::{PALETTE_INDEX_SELECTOR,
            PARAM_SEPARATOR,
            SgrArg,
            SgrNumber,
            TRUECOLOR_SELECTOR,
            sizing::FRAGMENT_STORAGE_SIZE};

/// The argument suffix of an attribute, eg: `;5;208`.
pub type ArgFragment = SmallString<[u8; FRAGMENT_STORAGE_SIZE]>;

/// Signature shared by all the encoders in the attribute catalog.
pub type ArgumentEncoder = fn(&SgrArg) -> Option<ArgFragment>;

/// Encodes a 256 color palette index as `;5;<index>`.
///
/// Accepts a single number. Floats are truncated toward zero. Anything outside of
/// `0..=255`, and component lists, produce no fragment.
#[must_use]
pub fn encode_palette_index(arg: &SgrArg) -> Option<ArgFragment> {
    let SgrArg::Number(number) = arg else {
        return None;
    };
    let index = u8::try_from(number.truncated()?).ok()?;

    let mut acc = ArgFragment::new();
    acc.push(PARAM_SEPARATOR);
    acc.push_str(PALETTE_INDEX_SELECTOR);
    acc.push(PARAM_SEPARATOR);
    write!(acc, "{index}").ok()?;
    Some(acc)
}

/// Encodes a 24-bit color as `;2;<red>;<green>;<blue>`.
///
/// The argument is either:
/// 1. A single packed `0xRRGGBB` number. It must be non-negative (floats are truncated
///    toward zero). Only the low 32 bits are used, so an `0xAARRGGBB` value works too:
///    the top byte is forced to `0xFF` and the three channels are the lower three
///    bytes.
/// 2. A list of at least three components. The last three are red, green and blue, any
///    leading components (eg: alpha) are ignored. Channels keep their numeric form, so
///    floats are written out as floats.
///
/// All three channels must be strictly greater than zero, otherwise no fragment is
/// produced. This means pure black (`0x000000`) and any color with a zero channel
/// (eg: pure red `0xFF0000`) fall back to the bare code.
#[must_use]
pub fn encode_truecolor(arg: &SgrArg) -> Option<ArgFragment> {
    let [red, green, blue] = match arg {
        SgrArg::Number(number) => unpack_rgb(*number)?,
        SgrArg::Components(components) => {
            let [.., red, green, blue] = components.as_slice() else {
                return None;
            };
            [*red, *green, *blue]
        }
    };

    if !(red.is_positive() && green.is_positive() && blue.is_positive()) {
        return None;
    }

    let mut acc = ArgFragment::new();
    acc.push(PARAM_SEPARATOR);
    acc.push_str(TRUECOLOR_SELECTOR);
    for channel in [red, green, blue] {
        acc.push(PARAM_SEPARATOR);
        write!(acc, "{channel}").ok()?;
    }
    Some(acc)
}

/// Splits a packed `0xRRGGBB` value into its channels.
fn unpack_rgb(number: SgrNumber) -> Option<[SgrNumber; 3]> {
    let packed = number.truncated()?;
    if packed < 0 {
        return None;
    }
    let packed = u32::try_from(packed & 0xFFFF_FFFF).ok()?;
    let packed = 0xFF00_0000 | packed;
    let [_alpha, red, green, blue] = packed.to_be_bytes();
    Some([red.into(), green.into(), blue.into()])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::rgb_to_packed;

    #[test]
    fn test_palette_index_full_range() {
        for index in 0..=255_u8 {
            let it = encode_palette_index(&index.into());
            assert_eq!(it.as_deref(), Some(format!(";5;{index}").as_str()));
        }
    }

    #[test_case(-1)]
    #[test_case(256)]
    #[test_case(10_000)]
    #[test_case(i64::MIN)]
    #[test_case(i64::MAX)]
    fn test_palette_index_out_of_range(index: i64) {
        assert_eq!(encode_palette_index(&index.into()), None);
    }

    #[test]
    fn test_palette_index_float_is_truncated() {
        assert_eq!(encode_palette_index(&208.9_f64.into()).as_deref(), Some(";5;208"));
        assert_eq!(encode_palette_index(&255.5_f64.into()).as_deref(), Some(";5;255"));
        assert_eq!(encode_palette_index(&256.0_f64.into()), None);
        assert_eq!(encode_palette_index(&f64::NAN.into()), None);
    }

    #[test]
    fn test_palette_index_rejects_components() {
        assert_eq!(encode_palette_index(&[1_i32, 2, 3].into()), None);
    }

    #[test]
    fn test_truecolor_packed() {
        let packed = rgb_to_packed(82, 37, 158);
        assert_eq!(encode_truecolor(&packed.into()).as_deref(), Some(";2;82;37;158"));
    }

    #[test_case(0 ; "black")]
    #[test_case(0xFF_0000 ; "pure red has zero channels")]
    #[test_case(0x00_FF01 ; "zero red channel")]
    #[test_case(-1 ; "negative sentinel")]
    #[test_case(i64::MIN ; "most negative")]
    #[test_case(0x1_0000_0000 ; "low 32 bits are black")]
    fn test_truecolor_packed_no_fragment(packed: i64) {
        assert_eq!(encode_truecolor(&packed.into()), None);
    }

    #[test]
    fn test_truecolor_packed_ignores_top_byte() {
        // The 0x7F byte is overwritten by 0xFF.
        assert_eq!(
            encode_truecolor(&0x7F01_0203_i32.into()).as_deref(),
            Some(";2;1;2;3")
        );
    }

    #[test_case(SgrArg::from(0xFF52_259E_u32) ; "argb u32")]
    #[test_case(SgrArg::from(0x8052_259E_i64) ; "high bit set")]
    #[test_case(SgrArg::from(0x1_0052_259E_i64) ; "wider than 32 bits")]
    #[test_case(SgrArg::from(4_283_573_662.0_f64) ; "argb as float")]
    fn test_truecolor_packed_uses_low_32_bits(arg: SgrArg) {
        assert_eq!(encode_truecolor(&arg).as_deref(), Some(";2;82;37;158"));
    }

    #[test]
    fn test_truecolor_packed_float_is_truncated() {
        assert_eq!(
            encode_truecolor(&66051.7_f64.into()).as_deref(),
            Some(";2;1;2;3")
        );
    }

    #[test]
    fn test_truecolor_components() {
        assert_eq!(
            encode_truecolor(&[82_i32, 37, 158].into()).as_deref(),
            Some(";2;82;37;158")
        );
    }

    #[test]
    fn test_truecolor_components_uses_last_three() {
        assert_eq!(
            encode_truecolor(&[255_i32, 10, 20, 30].into()).as_deref(),
            Some(";2;10;20;30")
        );
        assert_eq!(
            encode_truecolor(&[0_i32, 0, 10, 20, 30].into()).as_deref(),
            Some(";2;10;20;30")
        );
    }

    #[test]
    fn test_truecolor_components_keep_float_form() {
        assert_eq!(
            encode_truecolor(&[82.5_f64, 37.25, 158.0].into()).as_deref(),
            Some(";2;82.5;37.25;158")
        );
    }

    #[test]
    fn test_truecolor_components_no_fragment() {
        assert_eq!(encode_truecolor(&[1_i32, 2].into()), None);
        assert_eq!(encode_truecolor(&Vec::<i32>::new().into()), None);
        assert_eq!(encode_truecolor(&[10_i32, 0, 30].into()), None);
        assert_eq!(encode_truecolor(&[10.0_f64, -1.0, 30.0].into()), None);
    }
}
