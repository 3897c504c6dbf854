// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One accessor per standard attribute, eg: `style.bold().bg_red()`. Each accessor is
//! [`StyleSet::combine()`] with a single fixed attribute, so it also clears any argument
//! previously recorded for that attribute.
//!
//! The accessors are generated from the single table passed to `generate_named_accessors!`,
//! which also produces [`NAMED_ACCESSORS`] so the same names can be resolved at runtime
//! with [`StyleSet::select_named()`].

use crate::{Attribute, SgrError, StyleSet};

macro_rules! generate_named_accessors {
    ($($name:ident => $attribute:ident),* $(,)?) => {
        /// Every accessor name paired with the attribute it selects.
        pub const NAMED_ACCESSORS: &[(&str, Attribute)] = &[
            $((stringify!($name), Attribute::$attribute)),*
        ];

        impl StyleSet {
            $(
                #[doc = concat!("Selects [`Attribute::", stringify!($attribute), "`], argument free.")]
                pub fn $name(&mut self) -> &mut Self {
                    self.combine([Attribute::$attribute])
                }
            )*
        }
    };
}

generate_named_accessors! {
    high_intensity   => HighIntensity,
    bold             => Bold,
    low_intensity    => LowIntensity,
    light            => Light,
    italic           => Italic,
    underline        => Underline,
    blink            => Blink,
    rapid_blink      => RapidBlink,
    invert           => Reverse,
    reverse          => Reverse,
    invisible_text   => InvisibleText,
    strike           => Strike,
    double_underline => DoubleUnderline,
    normal_intensity => NormalIntensity,

    black   => Black,
    red     => Red,
    green   => Green,
    yellow  => Yellow,
    blue    => Blue,
    magenta => Magenta,
    cyan    => Cyan,
    white   => White,

    bg_black   => BackgroundBlack,
    bg_red     => BackgroundRed,
    bg_green   => BackgroundGreen,
    bg_yellow  => BackgroundYellow,
    bg_blue    => BackgroundBlue,
    bg_magenta => BackgroundMagenta,
    bg_cyan    => BackgroundCyan,
    bg_white   => BackgroundWhite,

    bright_black   => BrightBlack,
    bright_red     => BrightRed,
    bright_green   => BrightGreen,
    bright_yellow  => BrightYellow,
    bright_blue    => BrightBlue,
    bright_magenta => BrightMagenta,
    bright_cyan    => BrightCyan,
    bright_white   => BrightWhite,

    bg_bright_black   => BackgroundBrightBlack,
    bg_bright_red     => BackgroundBrightRed,
    bg_bright_green   => BackgroundBrightGreen,
    bg_bright_yellow  => BackgroundBrightYellow,
    bg_bright_blue    => BackgroundBrightBlue,
    bg_bright_magenta => BackgroundBrightMagenta,
    bg_bright_cyan    => BackgroundBrightCyan,
    bg_bright_white   => BackgroundBrightWhite,
}

impl StyleSet {
    /// Same as calling the accessor called `name`, resolved at runtime. Any catalog
    /// name or alias is accepted (see [`Attribute::try_from_name()`]).
    ///
    /// ```rust
    /// use ansi_sgr::StyleSet;
    ///
    /// let mut style = StyleSet::new();
    /// style.select_named("bold")?.select_named("bg_bright_blue")?;
    /// assert_eq!(style.render(), "\x1b[1;104m");
    /// # Ok::<(), ansi_sgr::SgrError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SgrError::UnknownAttribute`] and leaves `self` untouched if `name` is
    /// not in the catalog.
    pub fn select_named(&mut self, name: &str) -> Result<&mut Self, SgrError> {
        let attribute = Attribute::try_from_name(name)?;
        Ok(self.combine([attribute]))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_every_accessor_name_resolves_to_its_attribute() {
        for (name, attribute) in NAMED_ACCESSORS {
            assert_eq!(Attribute::try_from_name(name), Ok(*attribute), "{name}");
        }
    }

    #[test]
    fn test_every_plain_attribute_has_an_accessor() {
        use strum::IntoEnumIterator;
        for attribute in Attribute::iter()
            .filter(|it| !it.expects_argument() && *it != Attribute::Reset)
        {
            assert!(
                NAMED_ACCESSORS.iter().any(|(_, it)| *it == attribute),
                "{attribute:?}"
            );
        }
    }

    #[test]
    fn test_accessors_render_codes() {
        assert_eq!(StyleSet::new().bold().red().render(), "\x1b[1;31m");
        assert_eq!(StyleSet::new().invert().render(), "\x1b[7m");
        assert_eq!(StyleSet::new().bg_bright_white().render(), "\x1b[107m");
        assert_eq!(StyleSet::new().double_underline().render(), "\x1b[21m");
        // `invert` and `reverse` are the same attribute, selected once.
        assert_eq!(StyleSet::new().invert().reverse().render(), "\x1b[7m");
    }

    #[test]
    fn test_select_named() {
        let mut style = StyleSet::new_with_grouping(false);
        style
            .select_named("Italic")
            .and_then(|it| it.select_named("bright_green"))
            .unwrap();
        assert_eq!(style.render(), "\x1b[3m\x1b[92m");
    }

    #[test]
    fn test_select_named_unknown_leaves_style_untouched() {
        let mut style = StyleSet::new();
        style.bold();
        let before = style.clone();

        let result = style.select_named("not_a_style").map(|it| it.render());
        assert_eq!(
            result,
            Err(SgrError::UnknownAttribute {
                name: "not_a_style".into()
            })
        );
        assert_eq!(style, before);
    }
}
