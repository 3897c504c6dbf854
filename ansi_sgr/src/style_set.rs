// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{Attribute,
            BufTextStorage,
            CSI,
            PARAM_SEPARATOR,
            SGR,
            SGR_RESET,
            SgrArg,
            WriteToBuf,
            rgb_to_packed,
            sizing::{DEFAULT_STRING_STORAGE_SIZE,
                     MAX_INLINE_ARGUMENTS,
                     MAX_INLINE_ATTRIBUTES}};

/// The main struct of this crate. It has three fields:
/// - `attributes` - the selected [`Attribute`]s, each at most once, in the order they
///   were first selected. This is the render order.
/// - `arguments` - the argument recorded for an attribute, if any. Every key is also in
///   `attributes`, and each attribute has at most one argument.
/// - `is_grouped` - whether [`Self::render()`] packs every attribute into one frame
///   (`\x1b[1;31m`) or emits one frame per attribute (`\x1b[1m\x1b[31m`).
///
/// All the mutators take `&mut self` and return `&mut Self` so they can be chained. The
/// accessors for each standard attribute (eg: [`Self::bold()`], [`Self::bg_red()`]) are
/// generated in [`crate::named_accessors`].
///
/// # Render order
///
/// Selecting an attribute that is already selected does not move it. Removing an
/// attribute and selecting it again moves it to the end. [`Self::replace()`] and
/// [`Self::clear()`] start over.
///
/// # Example usage:
///
/// ```rust
/// use ansi_sgr::{Attribute, StyleSet};
///
/// let mut style = StyleSet::new();
/// style.bold().red();
/// assert_eq!(style.render(), "\x1b[1;31m");
///
/// style.set_grouped(false);
/// assert_eq!(style.render(), "\x1b[1m\x1b[31m");
///
/// style.replace([Attribute::Underline]).set_background_color_index(236);
/// assert_eq!(style.wrap("text"), "\x1b[4m\x1b[48;5;236mtext\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSet {
    attributes: InlineVecAttributes,
    arguments: InlineVecArguments,
    is_grouped: bool,
}

/// Inline storage for the selection, spills to the heap past [`MAX_INLINE_ATTRIBUTES`].
pub type InlineVecAttributes = SmallVec<[Attribute; MAX_INLINE_ATTRIBUTES]>;

/// Inline storage for the argument mapping.
pub type InlineVecArguments = SmallVec<[(Attribute, SgrArg); MAX_INLINE_ARGUMENTS]>;

impl Default for StyleSet {
    fn default() -> Self { Self::new() }
}

impl FromIterator<Attribute> for StyleSet {
    /// Grouped style set with `iter` selected.
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        let mut it = Self::new();
        it.add_attributes(iter);
        it
    }
}

mod construct {
    use super::{InlineVecArguments, InlineVecAttributes, StyleSet};

    impl StyleSet {
        /// Empty and grouped.
        #[must_use]
        pub fn new() -> Self { Self::new_with_grouping(true) }

        #[must_use]
        pub fn new_with_grouping(is_grouped: bool) -> Self {
            Self {
                attributes: InlineVecAttributes::new(),
                arguments: InlineVecArguments::new(),
                is_grouped,
            }
        }
    }
}

mod query {
    use super::{Attribute, SgrArg, StyleSet};

    impl StyleSet {
        #[must_use]
        pub fn is_grouped(&self) -> bool { self.is_grouped }

        /// The selected attributes in render order.
        #[must_use]
        pub fn attributes(&self) -> &[Attribute] { &self.attributes }

        /// The argument recorded for `attribute`, if any.
        #[must_use]
        pub fn argument(&self, attribute: Attribute) -> Option<&SgrArg> {
            self.arguments
                .iter()
                .find(|(key, _)| *key == attribute)
                .map(|(_, arg)| arg)
        }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.attributes.is_empty() }

        /// `true` only if every attribute in `attributes` is selected. An empty list is
        /// trivially contained.
        pub fn contains_all(&self, attributes: impl IntoIterator<Item = Attribute>) -> bool {
            attributes
                .into_iter()
                .all(|it| self.attributes.contains(&it))
        }

        /// Same as [`Self::contains_all()`].
        pub fn is(&self, attributes: impl IntoIterator<Item = Attribute>) -> bool {
            self.contains_all(attributes)
        }
    }
}

mod mutate {
    use super::{Attribute, InlineVecAttributes, SgrArg, StyleSet};

    impl StyleSet {
        pub fn set_grouped(&mut self, is_grouped: bool) -> &mut Self {
            self.is_grouped = is_grouped;
            self
        }

        pub fn add_attributes(
            &mut self,
            attributes: impl IntoIterator<Item = Attribute>,
        ) -> &mut Self {
            for attribute in attributes {
                self.select(attribute);
            }
            self
        }

        /// Deselects `attributes` and drops their arguments.
        pub fn remove_attributes(
            &mut self,
            attributes: impl IntoIterator<Item = Attribute>,
        ) -> &mut Self {
            for attribute in attributes {
                self.attributes.retain(|it| *it != attribute);
                self.drop_argument(attribute);
            }
            self
        }

        /// Selects `attribute` and records `arg` for it, overwriting any previous
        /// argument.
        pub fn set_argument(
            &mut self,
            attribute: Attribute,
            arg: impl Into<SgrArg>,
        ) -> &mut Self {
            self.select(attribute);
            let arg = arg.into();
            match self.arguments.iter_mut().find(|(key, _)| *key == attribute) {
                Some((_, existing)) => *existing = arg,
                None => self.arguments.push((attribute, arg)),
            }
            self
        }

        /// Empties the selection and the arguments. The grouping flag is kept.
        pub fn clear(&mut self) -> &mut Self {
            self.attributes.clear();
            self.arguments.clear();
            self
        }

        /// [`Self::clear()`], then select exactly `attributes`.
        pub fn replace(
            &mut self,
            attributes: impl IntoIterator<Item = Attribute>,
        ) -> &mut Self {
            self.clear().add_attributes(attributes)
        }

        /// [`Self::clear()`], then select exactly `attribute` with `arg`.
        pub fn replace_with_argument(
            &mut self,
            attribute: Attribute,
            arg: impl Into<SgrArg>,
        ) -> &mut Self {
            self.clear().set_argument(attribute, arg)
        }

        /// Selects `attributes` and clears any argument previously recorded for them,
        /// so each one renders as its bare code.
        pub fn combine(&mut self, attributes: impl IntoIterator<Item = Attribute>) -> &mut Self {
            for attribute in attributes {
                self.select(attribute);
                self.drop_argument(attribute);
            }
            self
        }

        /// Same as [`Self::set_argument()`].
        pub fn combine_with_argument(
            &mut self,
            attribute: Attribute,
            arg: impl Into<SgrArg>,
        ) -> &mut Self {
            self.set_argument(attribute, arg)
        }

        /// Deselects `attributes`, then makes a full pruning pass over what is left:
        /// the argument of every attribute still selected (none of which is in
        /// `attributes`) is dropped, as are the arguments of the removed ones.
        ///
        /// ```rust
        /// use ansi_sgr::{Attribute, StyleSet};
        ///
        /// let mut style = StyleSet::new();
        /// style.bold().set_foreground_color_index(208);
        /// assert_eq!(style.render(), "\x1b[1;38;5;208m");
        ///
        /// style.exclude([Attribute::Bold]);
        /// assert_eq!(style.render(), "\x1b[38m");
        /// ```
        pub fn exclude(&mut self, attributes: impl IntoIterator<Item = Attribute>) -> &mut Self {
            let excluded: InlineVecAttributes = attributes.into_iter().collect();
            self.attributes.retain(|it| !excluded.contains(it));
            // Every argument is either keyed by an excluded attribute or by one that
            // is still selected, and both kinds are dropped.
            self.arguments.clear();
            self
        }

        fn select(&mut self, attribute: Attribute) {
            if !self.attributes.contains(&attribute) {
                self.attributes.push(attribute);
            }
        }

        fn drop_argument(&mut self, attribute: Attribute) {
            self.arguments.retain(|(key, _)| *key != attribute);
        }
    }
}

/// Setters for the four color attributes, codes 38 and 48.
mod color_setters {
    use super::{Attribute, SgrArg, StyleSet, rgb_to_packed};

    impl StyleSet {
        /// Truecolor foreground from a packed `0xRRGGBB` value or a component list.
        pub fn set_foreground_color(&mut self, color: impl Into<SgrArg>) -> &mut Self {
            self.set_argument(Attribute::Color, color)
        }

        /// Truecolor background from a packed `0xRRGGBB` value or a component list.
        pub fn set_background_color(&mut self, color: impl Into<SgrArg>) -> &mut Self {
            self.set_argument(Attribute::BackgroundColor, color)
        }

        /// Foreground from the 256 color palette.
        pub fn set_foreground_color_index(&mut self, index: i64) -> &mut Self {
            self.set_argument(Attribute::ColorIndex, index)
        }

        /// Background from the 256 color palette.
        pub fn set_background_color_index(&mut self, index: i64) -> &mut Self {
            self.set_argument(Attribute::BackgroundColorIndex, index)
        }

        pub fn set_foreground_rgb(&mut self, red: u8, green: u8, blue: u8) -> &mut Self {
            self.set_foreground_color(rgb_to_packed(red, green, blue))
        }

        pub fn set_background_rgb(&mut self, red: u8, green: u8, blue: u8) -> &mut Self {
            self.set_background_color(rgb_to_packed(red, green, blue))
        }

        /// Deselects the truecolor foreground, and drops its argument.
        pub fn remove_foreground_color(&mut self) -> &mut Self {
            self.remove_attributes([Attribute::Color])
        }
    }
}

mod render {
    use std::fmt::Write;

    use super::{BufTextStorage, CSI, DEFAULT_STRING_STORAGE_SIZE, PARAM_SEPARATOR, SGR,
                SGR_RESET, SmallString, StyleSet};

    impl StyleSet {
        /// The escape sequence(s) for the current selection, grouped or not according
        /// to [`Self::is_grouped()`]. An empty selection renders `\x1b[m`.
        #[must_use]
        pub fn render(&self) -> String { self.render_with_grouping(self.is_grouped) }

        /// Same as [`Self::render()`], with the grouping mode given for this call only.
        #[must_use]
        pub fn render_with_grouping(&self, is_grouped: bool) -> String {
            let mut acc = BufTextStorage::new();
            // Writing into an in-memory buffer can't fail.
            self.write_to_buf_with_grouping(&mut acc, is_grouped).ok();
            acc
        }

        /// `render() + text + "\x1b[0m"`. The reset frame is always appended, no
        /// matter what is selected.
        #[must_use]
        pub fn wrap(&self, text: &str) -> String {
            let mut acc = self.render();
            acc.push_str(text);
            acc.push_str(SGR_RESET);
            acc
        }

        /// This is different than [`Self::render()`], because it doesn't allocate a new
        /// [String], but instead writes into an inline buffer on the stack. If this
        /// buffer gets larger than [`DEFAULT_STRING_STORAGE_SIZE`], it will spill to the
        /// heap.
        #[must_use]
        pub fn to_small_str(&self) -> SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]> {
            let mut acc = SmallString::new();
            // Writing into an in-memory buffer can't fail.
            self.write_frames(&mut acc, self.is_grouped).ok();
            acc
        }

        /// # Errors
        ///
        /// Returns an error if the formatting operation fails.
        pub fn write_to_buf_with_grouping(
            &self,
            acc: &mut BufTextStorage,
            is_grouped: bool,
        ) -> std::fmt::Result {
            self.write_frames(acc, is_grouped)
        }

        fn write_frames(&self, acc: &mut impl Write, is_grouped: bool) -> std::fmt::Result {
            acc.write_str(CSI)?;
            for (index, attribute) in self.attributes.iter().enumerate() {
                if index > 0 {
                    if is_grouped {
                        acc.write_char(PARAM_SEPARATOR)?;
                    } else {
                        acc.write_str(SGR)?;
                        acc.write_str(CSI)?;
                    }
                }
                acc.write_str(&attribute.fragment(self.argument(*attribute)))?;
            }
            acc.write_str(SGR)
        }
    }
}

impl WriteToBuf for StyleSet {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        self.write_to_buf_with_grouping(acc, self.is_grouped)
    }
}

impl Display for StyleSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut acc = BufTextStorage::new();
        self.write_to_buf(&mut acc)?;
        self.write_buf_to_fmt(&acc, f)
    }
}
