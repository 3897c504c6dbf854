// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) frame constants.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#CSI_(Control_Sequence_Introducer)_sequences>

/// Control Sequence Introducer: `ESC [`.
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR frame.
pub const SGR: &str = "m";

/// Separates parameters inside one frame, and the parts of an argument fragment.
pub const PARAM_SEPARATOR: char = ';';

/// Resets all text attributes (color, bold, italic, etc.) to default.
pub const SGR_RESET: &str = "\x1b[0m";

/// Selector that follows code 38 / 48 for a 256 color palette index.
pub const PALETTE_INDEX_SELECTOR: &str = "5";

/// Selector that follows code 38 / 48 for a 24-bit truecolor value.
pub const TRUECOLOR_SELECTOR: &str = "2";

/// Capacity constants for the inline (stack allocated) storage used by this crate.
/// Each container spills to the heap when it grows past these sizes.
pub mod sizing {
    /// Most style sets hold a handful of attributes: an intensity, an underline, a
    /// foreground and a background color.
    pub const MAX_INLINE_ATTRIBUTES: usize = 8;

    /// Only the four color attributes (38 / 48 in palette and truecolor form) take an
    /// argument.
    pub const MAX_INLINE_ARGUMENTS: usize = 4;

    /// RGB, with room for one extra leading channel (eg: alpha).
    pub const MAX_INLINE_COMPONENTS: usize = 4;

    /// `;2;255;255;255` is 14 bytes, the longest fragment produced from integer input.
    pub const FRAGMENT_STORAGE_SIZE: usize = 16;

    /// `\x1b[1;31;48;5;236m` and friends.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;
}
