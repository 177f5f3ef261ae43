// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Command-line arguments and default file locations.

use std::path::{Path, PathBuf};

use crate::settings::naming;

#[derive(clap::Parser, Debug)]
#[command(name = "ufo-anchors", version, about = "Batch anchor tools for UFO fonts")]
pub struct Cli {
    /// Log progress (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Add anchors from a placement file, keeping anchors that already exist
    Place {
        /// Placement file: glyph, anchor, then nothing, a keyword, or x and y
        spec: PathBuf,
        /// UFO sources to update
        #[arg(required = true)]
        fonts: Vec<PathBuf>,
    },
    /// Delete the anchors named in a `glyph<TAB>anchor` file
    Delete {
        spec: PathBuf,
        #[arg(required = true)]
        fonts: Vec<PathBuf>,
    },
    /// Rename anchors from a `glyph<TAB>current<TAB>new` file
    Rename {
        spec: PathBuf,
        #[arg(required = true)]
        fonts: Vec<PathBuf>,
    },
    /// Replace all anchors of a font with a four-column anchor list
    Input {
        font: PathBuf,
        /// Anchor list to read [default: `anchors` or `anchors_N` next to
        /// the font, N being the master number in the font's file name]
        #[arg(long)]
        anchors: Option<PathBuf>,
    },
    /// Write all anchors of a font as a four-column anchor list
    Output {
        font: PathBuf,
        /// File to write, or `-` for stdout [default: `anchors_N` next to
        /// the font]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Remove all anchors from the given glyphs
    Clear {
        font: PathBuf,
        #[arg(required = true)]
        glyphs: Vec<String>,
    },
    /// Set the glyph order from an encoding file
    GlyphOrder {
        font: PathBuf,
        /// Encoding file [default: the only `.enc` file next to the font]
        #[arg(long)]
        encoding: Option<PathBuf>,
    },
    /// Set Unicode values from a GOADB file
    Unicodes {
        /// GOADB file: final name, production name, optional Unicode override
        goadb: PathBuf,
        #[arg(required = true)]
        fonts: Vec<PathBuf>,
    },
}

/// The master number at the end of a font's file name.
///
/// `Sans_2.ufo` is master `2`; `Sans-Bold.ufo` has none.
pub fn master_number(font: &Path) -> Option<String> {
    let stem = font.file_stem()?.to_str()?;
    let suffix = stem.rsplit('_').next()?;
    (!suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit())).then(|| suffix.to_string())
}

/// Anchor list read by `input` when none is given
pub fn default_input_path(font: &Path) -> PathBuf {
    let name = match master_number(font) {
        Some(master) => format!("{}_{}", naming::ANCHORS_FILE, master),
        None => naming::ANCHORS_FILE.to_string(),
    };
    font_dir(font).join(name)
}

/// Anchor list written by `output` when none is given
pub fn default_output_path(font: &Path) -> PathBuf {
    let master = master_number(font).unwrap_or_else(|| naming::DEFAULT_MASTER.to_string());
    font_dir(font).join(format!("{}_{}", naming::ANCHORS_FILE, master))
}

/// Directory holding a font (`.` for a bare file name)
pub fn font_dir(font: &Path) -> PathBuf {
    match font.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
