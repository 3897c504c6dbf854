// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints the 256 color palette as a grid, followed by a few status badges, then
//! reports how many bytes were written to `stdout`.
//!
//! ```text
//! cargo run --bin sgr_palette -- --columns 16
//! cargo run --bin sgr_palette -- --ungrouped --enable-logging
//! ```

use std::io::{BufWriter, Write, stdout};

use ansi_sgr::{SgrResult, StyleSet};
use clap::Parser;
use miette::IntoDiagnostic;

/// Width of one grid cell, the index is right aligned in it.
const CELL_WIDTH: usize = 5;

#[derive(Debug, Parser)]
#[command(about = "Print the ANSI 256 color palette and some status badges")]
struct CliArg {
    /// Emit one escape sequence per attribute instead of grouping them.
    #[arg(long)]
    ungrouped: bool,

    /// Number of palette cells per row.
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u16).range(1..=256))]
    columns: u16,

    /// Log debug output to stderr.
    #[arg(long)]
    enable_logging: bool,
}

fn main() -> SgrResult<()> {
    let cli_arg = CliArg::parse();

    if cli_arg.enable_logging {
        try_initialize_logging(tracing_core::LevelFilter::DEBUG)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let mut out = ByteCountingWriter::new(BufWriter::new(stdout().lock()));
    let mut styler = StyleSet::new_with_grouping(!cli_arg.ungrouped);

    print_palette_grid(&mut out, &mut styler, usize::from(cli_arg.columns))
        .into_diagnostic()?;
    print_badges(&mut out, &mut styler).into_diagnostic()?;
    out.flush().into_diagnostic()?;

    let bytes_transferred = out.bytes_written();
    tracing::debug!(message = "Stop logging...", bytes_transferred);

    let mut out = out.into_inner();
    writeln!(out, "Bytes transferred: {bytes_transferred}").into_diagnostic()?;
    out.flush().into_diagnostic()?;

    Ok(())
}

/// Installs a `tracing` subscriber that writes to stderr, so log output does not mix
/// with the escape sequences on stdout.
fn try_initialize_logging(level_filter: tracing_core::LevelFilter) -> SgrResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| miette::miette!("Could not initialize logging: {err}"))
}

fn print_palette_grid(
    out: &mut impl Write,
    styler: &mut StyleSet,
    columns: usize,
) -> std::io::Result<()> {
    for index in 0..=255_u8 {
        styler.clear().set_foreground_color_index(i64::from(index));
        write!(out, "{styler}{}", format_cell(index))?;
        if (usize::from(index) + 1) % columns == 0 {
            writeln!(out)?;
        }
    }
    if 256 % columns != 0 {
        writeln!(out)?;
    }
    Ok(())
}

fn print_badges(out: &mut impl Write, styler: &mut StyleSet) -> std::io::Result<()> {
    writeln!(out)?;

    styler.clear().bg_bright_red().set_foreground_color_index(255);
    writeln!(out, "[{}]", styler.wrap("FAILED"))?;

    styler.clear().bg_green().set_foreground_color_index(255);
    writeln!(out, "[{}]", styler.wrap(" PASS "))?;

    styler.clear().bg_black().set_foreground_color_index(255);
    writeln!(out, "[{}]", styler.wrap("  OK  "))?;

    Ok(())
}

fn format_cell(index: u8) -> String { format!("{index:>CELL_WIDTH$}") }

/// Forwards everything to the wrapped writer and keeps a running total of the bytes
/// that were accepted by it.
#[derive(Debug)]
struct ByteCountingWriter<W: Write> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> ByteCountingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }

    fn bytes_written(&self) -> u64 { self.bytes_written }

    fn into_inner(self) -> W { self.inner }
}

impl<W: Write> Write for ByteCountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let count = self.inner.write(buf)?;
        self.bytes_written += count as u64;
        Ok(count)
    }

    fn flush(&mut self) -> std::io::Result<()> { self.inner.flush() }
}
