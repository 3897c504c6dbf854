// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The attribute catalog: every SGR attribute this crate can emit, bound to its
//! numeric code and (for the color attributes) an argument encoder.
//!
//! The catalog is a single immutable `static` table, [`ATTRIBUTE_CATALOG`], indexed by
//! the ordinal of the [`Attribute`] variant. Lookups are a plain array index.
//!
//! Some attributes are synonyms and share a code. Applying either has the same effect
//! on the terminal:
//!
//! | Attributes                                       | Code |
//! |--------------------------------------------------|------|
//! | `HighIntensity`, `Bold`                          | 1    |
//! | `LowIntensity`, `Light`                          | 2    |
//! | `ColorIndex`, `Color`                            | 38   |
//! | `BackgroundColorIndex`, `BackgroundColor`        | 48   |
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://www.ditig.com/256-colors-cheat-sheet>

use std::{fmt::{Display, Formatter, Result, Write},
          str::FromStr};

use smallstr::SmallString;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::{ArgumentEncoder,
            BufTextStorage,
            CSI,
            SGR,
            SgrArg,
            SgrError,
            WriteToBuf,
            encode_palette_index,
            encode_truecolor,
            sizing::FRAGMENT_STORAGE_SIZE};

/// A styling attribute. The declaration order is the catalog order: it is the order of
/// [`Attribute::iter()`] and the index into [`ATTRIBUTE_CATALOG`].
///
/// Names are `snake_case` and parse case-insensitively. Background colors also accept a
/// short `bg_` prefix, and [`Attribute::Reverse`] also accepts `invert`.
///
/// ```rust
/// use ansi_sgr::Attribute;
///
/// assert_eq!(Attribute::Bold.code(), 1);
/// assert_eq!(Attribute::Bold.name(), "bold");
/// assert_eq!("BG_BRIGHT_RED".parse::<Attribute>().unwrap(), Attribute::BackgroundBrightRed);
/// assert_eq!(Attribute::Reset.to_string(), "\x1b[0m");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    Reset,
    HighIntensity,
    Bold,
    LowIntensity,
    Light,
    Italic,
    Underline,
    Blink,
    RapidBlink,
    #[strum(to_string = "reverse", serialize = "invert")]
    Reverse,
    InvisibleText,
    Strike,
    DoubleUnderline,
    NormalIntensity,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    ColorIndex,
    Color,
    #[strum(to_string = "background_black", serialize = "bg_black")]
    BackgroundBlack,
    #[strum(to_string = "background_red", serialize = "bg_red")]
    BackgroundRed,
    #[strum(to_string = "background_green", serialize = "bg_green")]
    BackgroundGreen,
    #[strum(to_string = "background_yellow", serialize = "bg_yellow")]
    BackgroundYellow,
    #[strum(to_string = "background_blue", serialize = "bg_blue")]
    BackgroundBlue,
    #[strum(to_string = "background_magenta", serialize = "bg_magenta")]
    BackgroundMagenta,
    #[strum(to_string = "background_cyan", serialize = "bg_cyan")]
    BackgroundCyan,
    #[strum(to_string = "background_white", serialize = "bg_white")]
    BackgroundWhite,
    #[strum(to_string = "background_color_index", serialize = "bg_color_index")]
    BackgroundColorIndex,
    #[strum(to_string = "background_color", serialize = "bg_color")]
    BackgroundColor,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    #[strum(to_string = "background_bright_black", serialize = "bg_bright_black")]
    BackgroundBrightBlack,
    #[strum(to_string = "background_bright_red", serialize = "bg_bright_red")]
    BackgroundBrightRed,
    #[strum(to_string = "background_bright_green", serialize = "bg_bright_green")]
    BackgroundBrightGreen,
    #[strum(to_string = "background_bright_yellow", serialize = "bg_bright_yellow")]
    BackgroundBrightYellow,
    #[strum(to_string = "background_bright_blue", serialize = "bg_bright_blue")]
    BackgroundBrightBlue,
    #[strum(to_string = "background_bright_magenta", serialize = "bg_bright_magenta")]
    BackgroundBrightMagenta,
    #[strum(to_string = "background_bright_cyan", serialize = "bg_bright_cyan")]
    BackgroundBrightCyan,
    #[strum(to_string = "background_bright_white", serialize = "bg_bright_white")]
    BackgroundBrightWhite,
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    pub attribute: Attribute,
    pub code: u8,
    pub encoder: Option<ArgumentEncoder>,
}

/// The attribute code plus its optional argument suffix, eg: `38;5;208`.
pub type AttributeFragment = SmallString<[u8; FRAGMENT_STORAGE_SIZE]>;

const fn plain(attribute: Attribute, code: u8) -> AttributeSpec {
    AttributeSpec {
        attribute,
        code,
        encoder: None,
    }
}

const fn with_encoder(
    attribute: Attribute,
    code: u8,
    encoder: ArgumentEncoder,
) -> AttributeSpec {
    AttributeSpec {
        attribute,
        code,
        encoder: Some(encoder),
    }
}

/// Process wide, read-only. Row `i` describes the variant whose ordinal is `i`.
#[rustfmt::skip]
pub static ATTRIBUTE_CATALOG: [AttributeSpec; Attribute::COUNT] = [
    plain(Attribute::Reset,                     0),
    plain(Attribute::HighIntensity,             1),
    plain(Attribute::Bold,                      1),
    plain(Attribute::LowIntensity,              2),
    plain(Attribute::Light,                     2),
    plain(Attribute::Italic,                    3),
    plain(Attribute::Underline,                 4),
    plain(Attribute::Blink,                     5),
    plain(Attribute::RapidBlink,                6),
    plain(Attribute::Reverse,                   7),
    plain(Attribute::InvisibleText,             8),
    plain(Attribute::Strike,                    9),
    plain(Attribute::DoubleUnderline,           21),
    plain(Attribute::NormalIntensity,           22),
    plain(Attribute::Black,                     30),
    plain(Attribute::Red,                       31),
    plain(Attribute::Green,                     32),
    plain(Attribute::Yellow,                    33),
    plain(Attribute::Blue,                      34),
    plain(Attribute::Magenta,                   35),
    plain(Attribute::Cyan,                      36),
    plain(Attribute::White,                     37),
    with_encoder(Attribute::ColorIndex,         38, encode_palette_index),
    with_encoder(Attribute::Color,              38, encode_truecolor),
    plain(Attribute::BackgroundBlack,           40),
    plain(Attribute::BackgroundRed,             41),
    plain(Attribute::BackgroundGreen,           42),
    plain(Attribute::BackgroundYellow,          43),
    plain(Attribute::BackgroundBlue,            44),
    plain(Attribute::BackgroundMagenta,         45),
    plain(Attribute::BackgroundCyan,            46),
    plain(Attribute::BackgroundWhite,           47),
    with_encoder(Attribute::BackgroundColorIndex, 48, encode_palette_index),
    with_encoder(Attribute::BackgroundColor,    48, encode_truecolor),
    plain(Attribute::BrightBlack,               90),
    plain(Attribute::BrightRed,                 91),
    plain(Attribute::BrightGreen,               92),
    plain(Attribute::BrightYellow,              93),
    plain(Attribute::BrightBlue,                94),
    plain(Attribute::BrightMagenta,             95),
    plain(Attribute::BrightCyan,                96),
    plain(Attribute::BrightWhite,               97),
    plain(Attribute::BackgroundBrightBlack,     100),
    plain(Attribute::BackgroundBrightRed,       101),
    plain(Attribute::BackgroundBrightGreen,     102),
    plain(Attribute::BackgroundBrightYellow,    103),
    plain(Attribute::BackgroundBrightBlue,      104),
    plain(Attribute::BackgroundBrightMagenta,   105),
    plain(Attribute::BackgroundBrightCyan,      106),
    plain(Attribute::BackgroundBrightWhite,     107),
];

mod attribute_impl {
    use super::{Attribute, AttributeFragment, AttributeSpec, IntoEnumIterator,
                ATTRIBUTE_CATALOG, ArgumentEncoder, FromStr, SgrArg, SgrError, Write};

    impl Attribute {
        /// This attribute's row in [`ATTRIBUTE_CATALOG`].
        #[must_use]
        pub fn spec(self) -> &'static AttributeSpec { &ATTRIBUTE_CATALOG[self as usize] }

        #[must_use]
        pub fn code(self) -> u8 { self.spec().code }

        #[must_use]
        pub fn encoder(self) -> Option<ArgumentEncoder> { self.spec().encoder }

        #[must_use]
        pub fn expects_argument(self) -> bool { self.encoder().is_some() }

        /// Canonical `snake_case` name.
        #[must_use]
        pub fn name(self) -> &'static str { self.into() }

        /// The code followed by the argument suffix, if this attribute has an encoder
        /// and the encoder accepts `arg`. Otherwise just the code.
        ///
        /// ```rust
        /// use ansi_sgr::Attribute;
        ///
        /// assert_eq!(Attribute::ColorIndex.fragment(Some(&208_u8.into())), "38;5;208");
        /// assert_eq!(Attribute::ColorIndex.fragment(Some(&999_i32.into())), "38");
        /// assert_eq!(Attribute::Bold.fragment(Some(&208_u8.into())), "1");
        /// ```
        #[must_use]
        pub fn fragment(self, arg: Option<&SgrArg>) -> AttributeFragment {
            let spec = self.spec();
            let mut acc = AttributeFragment::new();
            // Writing into an in-memory buffer can't fail.
            write!(acc, "{}", spec.code).ok();
            if let (Some(encoder), Some(arg)) = (spec.encoder, arg) {
                if let Some(suffix) = encoder(arg) {
                    acc.push_str(&suffix);
                }
            }
            acc
        }

        /// Resolves a name (or alias) to an attribute.
        ///
        /// # Errors
        ///
        /// Returns [`SgrError::UnknownAttribute`] if `name` is not in the catalog.
        pub fn try_from_name(name: &str) -> Result<Attribute, SgrError> {
            Attribute::from_str(name).map_err(|_| {
                tracing::debug!(message = "Unknown SGR attribute name", name = %name);
                SgrError::UnknownAttribute {
                    name: name.to_string(),
                }
            })
        }

        /// All the attributes that take an argument.
        pub fn with_encoders() -> impl Iterator<Item = Attribute> {
            Attribute::iter().filter(|it| it.expects_argument())
        }
    }
}

/// [`WriteToBuf`] writes the standalone bare frame for this attribute, eg: `\x1b[1m`.
impl WriteToBuf for Attribute {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        acc.push_str(CSI);
        write!(acc, "{}", self.code())?;
        acc.push_str(SGR);
        Ok(())
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut acc = BufTextStorage::new();
        self.write_to_buf(&mut acc)?;
        self.write_buf_to_fmt(&acc, f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::SGR_RESET;

    #[test]
    fn test_catalog_rows_match_ordinals() {
        for (ordinal, attribute) in Attribute::iter().enumerate() {
            assert_eq!(ATTRIBUTE_CATALOG[ordinal].attribute, attribute);
            assert_eq!(attribute as usize, ordinal);
        }
        assert_eq!(Attribute::COUNT, 50);
    }

    #[test]
    fn test_codes_come_from_sgr_table() {
        for attribute in Attribute::iter() {
            let code = attribute.code();
            assert!(
                matches!(code, 0..=9 | 21 | 22 | 30..=38 | 40..=48 | 90..=97 | 100..=107),
                "{attribute:?} has code {code}"
            );
        }
    }

    #[test_case(Attribute::HighIntensity, Attribute::Bold)]
    #[test_case(Attribute::LowIntensity, Attribute::Light)]
    #[test_case(Attribute::ColorIndex, Attribute::Color)]
    #[test_case(Attribute::BackgroundColorIndex, Attribute::BackgroundColor)]
    fn test_synonyms_share_code(lhs: Attribute, rhs: Attribute) {
        assert_eq!(lhs.code(), rhs.code());
        assert_eq!(lhs.to_string(), rhs.to_string());
    }

    #[test]
    fn test_only_color_attributes_expect_arguments() {
        let it: Vec<_> = Attribute::with_encoders().collect();
        assert_eq!(
            it,
            vec![
                Attribute::ColorIndex,
                Attribute::Color,
                Attribute::BackgroundColorIndex,
                Attribute::BackgroundColor,
            ]
        );
    }

    #[test]
    fn test_display_is_bare_frame() {
        for attribute in Attribute::iter() {
            assert_eq!(attribute.to_string(), format!("\x1b[{}m", attribute.code()));
        }
        assert_eq!(Attribute::Reset.to_string(), SGR_RESET);
    }

    #[test]
    fn test_fragment_without_argument() {
        assert_eq!(Attribute::Color.fragment(None), "38");
        assert_eq!(Attribute::BackgroundBrightWhite.fragment(None), "107");
        assert_eq!(Attribute::Strike.fragment(None), "9");
    }

    #[test]
    fn test_fragment_with_argument() {
        assert_eq!(
            Attribute::BackgroundColorIndex.fragment(Some(&236_u8.into())),
            "48;5;236"
        );
        assert_eq!(
            Attribute::BackgroundColor.fragment(Some(&[175_u8, 215, 135].into())),
            "48;2;175;215;135"
        );
        assert_eq!(Attribute::Color.fragment(Some(&0_i32.into())), "38");
    }

    #[test_case("bold", Attribute::Bold)]
    #[test_case("BOLD", Attribute::Bold)]
    #[test_case("high_intensity", Attribute::HighIntensity)]
    #[test_case("invert", Attribute::Reverse)]
    #[test_case("reverse", Attribute::Reverse)]
    #[test_case("bg_red", Attribute::BackgroundRed)]
    #[test_case("background_red", Attribute::BackgroundRed)]
    #[test_case("bright_cyan", Attribute::BrightCyan)]
    #[test_case("bg_bright_white", Attribute::BackgroundBrightWhite)]
    #[test_case("color_index", Attribute::ColorIndex)]
    fn test_parse_name(name: &str, expected: Attribute) {
        assert_eq!(Attribute::try_from_name(name), Ok(expected));
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            Attribute::try_from_name("blinky"),
            Err(SgrError::UnknownAttribute {
                name: "blinky".into()
            })
        );
    }

    #[test]
    fn test_name_round_trips() {
        for attribute in Attribute::iter() {
            assert_eq!(Attribute::try_from_name(attribute.name()), Ok(attribute));
        }
        assert_eq!(Attribute::Reverse.name(), "reverse");
        assert_eq!(Attribute::BackgroundRed.name(), "background_red");
        assert_eq!(Attribute::DoubleUnderline.name(), "double_underline");
    }
}
