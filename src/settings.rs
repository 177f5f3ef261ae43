// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool settings and configuration constants.
//!
//! Everything the command line does not expose lives here, so the file
//! formats and the default log filter can be tweaked in one place.

// ============================================================================
// ANCHOR FILE FORMAT
// ============================================================================
/// Column separator in all anchor files
const COLUMN_SEPARATOR: char = '\t';

/// Lines starting with this (after trimming) are comments
const COMMENT_PREFIX: char = '#';

// ============================================================================
// GLYPH LIST FORMAT (.enc and GOADB files)
// ============================================================================
// Whitespace separated; either marker starts a comment line.

const GLYPH_LIST_COMMENT_PREFIXES: [char; 2] = ['#', '%'];

/// Extension of encoding files looked up next to a font
const ENCODING_EXTENSION: &str = "enc";

// ============================================================================
// ANCHOR FILE NAMING
// ============================================================================
// A font named `MyFont_2.ufo` is master 2 of its family. Its anchors live
// next to it in `anchors_2`; a font without a master number reads `anchors`
// and writes `anchors_0`.

/// Base name of the anchors file read by `input`
const ANCHORS_FILE_NAME: &str = "anchors";

/// Master number assumed by `output` when the font name has none
const DEFAULT_MASTER: &str = "0";

// ============================================================================
// LOGGING
// ============================================================================
/// Default filter when `RUST_LOG` is unset (quiet: only the summary prints)
const LOG_FILTER_QUIET: &str = "ufo_anchors=warn";

/// Default filter with `--verbose`
const LOG_FILTER_VERBOSE: &str = "ufo_anchors=info";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Anchor file syntax
pub mod format {
    /// Column separator
    pub const SEPARATOR: char = super::COLUMN_SEPARATOR;

    /// Comment marker
    pub const COMMENT: char = super::COMMENT_PREFIX;
}

/// Glyph list syntax (encoding and GOADB files)
pub mod glyph_list {
    /// Comment markers
    pub const COMMENTS: [char; 2] = super::GLYPH_LIST_COMMENT_PREFIXES;

    /// Encoding file extension
    pub const ENCODING_EXTENSION: &str = super::ENCODING_EXTENSION;
}

/// Per-master anchor file naming
pub mod naming {
    /// Base file name (`anchors`, `anchors_1`, ...)
    pub const ANCHORS_FILE: &str = super::ANCHORS_FILE_NAME;

    /// Master number used for export when the font name has none
    pub const DEFAULT_MASTER: &str = super::DEFAULT_MASTER;
}

/// Log filter defaults (overridden by `RUST_LOG`)
pub mod logging {
    pub const QUIET: &str = super::LOG_FILTER_QUIET;
    pub const VERBOSE: &str = super::LOG_FILTER_VERBOSE;
}
