// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use miette::Diagnostic;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers. Works hand in hand w/ [`SgrError`].
pub type SgrResult<T> = miette::Result<T>;

/// Caller contract violations. Malformed argument values are never reported here,
/// they degrade to the bare SGR code instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum SgrError {
    #[error("🎨 Unknown SGR attribute name: '{name}'")]
    #[diagnostic(
        code(ansi_sgr::unknown_attribute),
        help("Use a snake_case attribute name, eg: `bold`, `bg_red`, `bright_cyan`")
    )]
    UnknownAttribute { name: String },
}
