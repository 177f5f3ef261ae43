// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! ufo-anchors: batch anchor tools for UFO fonts
//!
//! Anchor files are small tab-separated text files. They are parsed in
//! full first; only then is each font loaded, edited, and saved (and only
//! saved if something changed). Encoding and GOADB glyph lists are
//! handled the same way for glyph order and Unicode values.

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub mod anchors;
mod cli;
pub mod error;
pub mod glyphs;
pub mod model;
mod settings;

use anchors::{
    AnchorList, AnchorSpecFile, DeletionSpec, Diagnostic, RenameSpec, clear_anchors,
    delete_anchors, export_anchors, place_anchors, rename_anchors, replace_anchors,
    write_anchor_list,
};
use cli::{Cli, Command};
use error::AnchorsError;
use glyphs::{EncodingFile, GoadbFile, apply_glyph_order, find_encoding_file, set_unicodes};
use model::Workspace;

/// `output -o -` writes the list to stdout
const STDOUT_PATH: &str = "-";

/// Entry point for the `ufo-anchors` command
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Place { spec: path, fonts } => {
            let (spec, diagnostics) = AnchorSpecFile::load(&path)?;
            report_diagnostics(&path, spec.is_empty(), &diagnostics);
            for_each_font(&fonts, "anchors placed", &mut out, |ws| {
                place_anchors(&spec, ws)
            })?;
        }
        Command::Delete { spec: path, fonts } => {
            let (spec, diagnostics) = DeletionSpec::load(&path)?;
            report_diagnostics(&path, spec.is_empty(), &diagnostics);
            for_each_font(&fonts, "anchors deleted", &mut out, |ws| {
                delete_anchors(&spec, ws)
            })?;
        }
        Command::Rename { spec: path, fonts } => {
            let (spec, diagnostics) = RenameSpec::load(&path)?;
            report_diagnostics(&path, spec.is_empty(), &diagnostics);
            for_each_font(&fonts, "anchors renamed", &mut out, |ws| {
                rename_anchors(&spec, ws)
            })?;
        }
        Command::Input { font, anchors } => {
            let path = anchors.unwrap_or_else(|| cli::default_input_path(&font));
            input_anchors(&font, &path, &mut out)?;
        }
        Command::Output { font, output } => {
            let path = output.unwrap_or_else(|| cli::default_output_path(&font));
            output_anchors(&font, &path, &mut out)?;
            if path == Path::new(STDOUT_PATH) {
                return Ok(());
            }
        }
        Command::Clear { font, glyphs } => {
            let mut workspace = Workspace::load(&font)?;
            if clear_anchors(&mut workspace, &glyphs) > 0 {
                workspace.save()?;
                writeln!(out, "Anchors were removed.")?;
            } else {
                writeln!(out, "The selected glyphs had no anchors.")?;
            }
        }
        Command::GlyphOrder { font, encoding } => {
            let path = match encoding {
                Some(path) => path,
                None => find_encoding_file(&cli::font_dir(&font))?,
            };
            let (encoding, diagnostics) = EncodingFile::load(&path)?;
            report_diagnostics(&path, encoding.is_empty(), &diagnostics);
            edit_font(&font, "glyphs ordered", &mut out, |ws| {
                let report = apply_glyph_order(&encoding, ws);
                if report.changed { report.listed } else { 0 }
            })?;
        }
        Command::Unicodes { goadb: path, fonts } => {
            let (goadb, diagnostics) = GoadbFile::load(&path)?;
            report_diagnostics(&path, goadb.is_empty(), &diagnostics);
            for_each_font(&fonts, "Unicode values set", &mut out, |ws| {
                set_unicodes(&goadb, ws)
            })?;
        }
    }

    writeln!(out, "Done!")?;
    Ok(())
}

/// Install the tracing subscriber (can be controlled via RUST_LOG env var)
fn init_tracing(verbose: bool) {
    let default = if verbose {
        settings::logging::VERBOSE
    } else {
        settings::logging::QUIET
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stderr, so `output -o -` keeps stdout to itself
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report_diagnostics(path: &Path, empty: bool, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        tracing::warn!("{}. Skipped.", diagnostic);
    }
    if empty {
        tracing::warn!("{} has no usable lines", path.display());
    }
}

fn for_each_font<W, F>(fonts: &[PathBuf], action: &str, out: &mut W, mut edit: F) -> Result<()>
where
    W: Write,
    F: FnMut(&mut Workspace) -> usize,
{
    for path in fonts {
        edit_font(path, action, out, &mut edit)?;
    }
    Ok(())
}

/// Load one font, apply `edit`, and save it if `edit` changed anything.
///
/// `edit` returns how many things it changed. A changed font is reported
/// on `out` as its file name followed by `  N <action>`; an unchanged font
/// is neither saved nor reported. Returns the count.
pub fn edit_font<W, F>(path: &Path, action: &str, out: &mut W, edit: F) -> Result<usize>
where
    W: Write,
    F: FnOnce(&mut Workspace) -> usize,
{
    let mut workspace = Workspace::load(path)?;
    let count = edit(&mut workspace);
    if count > 0 {
        workspace.save()?;
        writeln!(out, "{}", workspace.file_name())?;
        writeln!(out, "  {} {}", count, action)?;
    } else {
        tracing::info!("Nothing to do for {} ({})", workspace.file_name(), action);
    }
    Ok(count)
}

fn input_anchors<W: Write>(font: &Path, anchors: &Path, out: &mut W) -> Result<()> {
    let (list, diagnostics) = AnchorList::load(anchors)?;
    report_diagnostics(anchors, false, &diagnostics);
    if list.is_empty() {
        writeln!(out, "No valid anchors data was found.")?;
        return Ok(());
    }

    let mut workspace = Workspace::load(font)?;
    let report = replace_anchors(&list, &mut workspace);
    if report.changed() {
        workspace.save()?;
        writeln!(out, "{}", workspace.file_name())?;
        writeln!(out, "  {} anchors added", report.added)?;
    }
    Ok(())
}

fn output_anchors<W: Write>(font: &Path, output: &Path, out: &mut W) -> Result<()> {
    let workspace = Workspace::load(font)?;
    let records = export_anchors(&workspace);
    if records.is_empty() {
        tracing::warn!("The font has no anchors.");
        return Ok(());
    }

    let write_error = |source| AnchorsError::Write {
        path: output.to_path_buf(),
        source,
    };

    if output == Path::new(STDOUT_PATH) {
        write_anchor_list(out, &records).map_err(write_error)?;
        return Ok(());
    }

    tracing::info!("Writing file {} ...", output.display());
    let file = std::fs::File::create(output).map_err(write_error)?;
    write_anchor_list(std::io::BufWriter::new(file), &records).map_err(write_error)?;
    Ok(())
}
