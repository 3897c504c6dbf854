// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `ansi_sgr`
//!
//! Fluent builder for ANSI SGR (Select Graphic Rendition) escape sequences.
//!
//! You select styling attributes (bold, underline, named colors, palette index and
//! truecolor colors) on a [`StyleSet`], then render them into a single control
//! sequence string. Every attribute is a variant of [`Attribute`], and each variant is
//! bound to its numeric SGR code (and an optional argument encoder) in a static catalog.
//!
//! ```rust
//! use ansi_sgr::{Attribute, StyleSet};
//!
//! // Grouped (the default): one frame, `;` separated parameters.
//! let seq = StyleSet::new().bold().red().render();
//! assert_eq!(seq, "\x1b[1;31m");
//!
//! // Ungrouped: one frame per attribute.
//! let seq = StyleSet::new_with_grouping(false)
//!     .bg_bright_red()
//!     .set_foreground_color_index(255)
//!     .render();
//! assert_eq!(seq, "\x1b[101m\x1b[38;5;255m");
//!
//! // Wrap some text, the reset suffix is always appended.
//! let badge = StyleSet::new().bg_green().set_foreground_color_index(255).wrap(" PASS ");
//! assert_eq!(badge, "\x1b[42;38;5;255m PASS \x1b[0m");
//!
//! // Truecolor, packed or as components.
//! let seq = StyleSet::new().set_foreground_rgb(82, 37, 158).render();
//! assert_eq!(seq, "\x1b[38;2;82;37;158m");
//!
//! // Attributes can also be resolved by name.
//! assert_eq!("bg_red".parse::<Attribute>().unwrap(), Attribute::BackgroundRed);
//! ```
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
// Enforce strict error handling in production code, allow unwrap in tests.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod attribute;
pub mod constants;
pub mod encoders;
pub mod named_accessors;
pub mod sgr_arg;
pub mod sgr_error;
pub mod style_set;
pub mod write_to_buf;

// Re-export.
pub use attribute::*;
pub use constants::*;
pub use encoders::*;
pub use sgr_arg::*;
pub use sgr_error::*;
pub use style_set::*;
pub use write_to_buf::*;
