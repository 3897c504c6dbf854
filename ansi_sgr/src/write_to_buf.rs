// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # String building with `WriteToBuf`
//!
//! Rendering a style set is a sequence of small appends (codes, separators, argument
//! fragments). Going through [`std::fmt::Formatter`] for each of them means one trip
//! through the formatter state machine per append. Instead, types implement
//! [`WriteToBuf`] to append into a [`BufTextStorage`], and their
//! [`std::fmt::Display`] implementation makes one [`Formatter::write_str`] call with the
//! finished buffer.
//!
//! ```rust
//! use ansi_sgr::{BufTextStorage, StyleSet, WriteToBuf};
//!
//! let mut acc = BufTextStorage::new();
//! StyleSet::new().bold().write_to_buf(&mut acc).unwrap();
//! acc.push_str("bold text");
//! assert_eq!(acc, "\x1b[1mbold text");
//! ```

use std::fmt::{Formatter, Result};

/// Buffer for building escape sequences. This type alias makes it easy to swap in a
/// different string-like backing store without touching the rest of the crate.
pub type BufTextStorage = String;

/// Trait for appending a textual representation to a buffer.
pub trait WriteToBuf {
    /// Append the representation of `self` to `acc`. Call
    /// [`WriteToBuf::write_buf_to_fmt()`] when implementing [`std::fmt::Display`].
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting operation fails.
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result;

    /// Use [`Formatter::write_str`] to write the `acc` buffer out in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the formatter fails.
    fn write_buf_to_fmt(&self, acc: &BufTextStorage, f: &mut Formatter<'_>) -> Result {
        f.write_str(acc)
    }
}
