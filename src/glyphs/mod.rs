// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph lists: encoding files for glyph order, GOADB files for Unicode values

pub mod encoding;
pub mod goadb;

pub use encoding::{EncodingFile, GlyphOrderReport, apply_glyph_order, find_encoding_file};
pub use goadb::{GoadbFile, parse_codepoint, set_unicodes};
